//! Validated console input
//!
//! Workflows talk to the terminal only through the [`Prompt`] trait: print a
//! line, read a line, or read a value that must pass validation. Invalid
//! values are reported and asked for again; only end of input escapes the
//! loop, as [`PesBuddyError::InputClosed`].

use std::io::{self, BufRead, Write};

use crate::error::{PesBuddyError, PesBuddyResult};

/// Interactive input/output used by the workflows
pub trait Prompt {
    /// Print one line of output
    fn say(&mut self, message: &str) -> PesBuddyResult<()>;

    /// Show `prompt` and read one line, without its line terminator
    fn read_line(&mut self, prompt: &str) -> PesBuddyResult<String>;

    /// Read until `parse` accepts the line, printing its error message on
    /// every rejection
    fn read_valid<T, F>(&mut self, prompt: &str, mut parse: F) -> PesBuddyResult<T>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(message) => self.say(&message)?,
            }
        }
    }

    /// Read a whole number
    fn read_int(&mut self, prompt: &str) -> PesBuddyResult<i64> {
        self.read_valid(prompt, parse_int)
    }

    /// Read a finite, non-negative real number
    fn read_amount(&mut self, prompt: &str) -> PesBuddyResult<f64> {
        self.read_valid(prompt, parse_amount)
    }
}

fn parse_int(line: &str) -> Result<i64, String> {
    line.trim()
        .parse::<i64>()
        .map_err(|_| "Invalid input. Please enter a whole number.".to_string())
}

fn parse_amount(line: &str) -> Result<f64, String> {
    match line.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err("Enter a valid non-negative amount!".to_string()),
    }
}

/// [`Prompt`] over any buffered reader and writer
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
}

impl ConsoleIo<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    /// Create a console over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return its output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for ConsoleIo<R, W> {
    fn say(&mut self, message: &str) -> PesBuddyResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> PesBuddyResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(PesBuddyError::InputClosed);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Undecodable bytes become U+FFFD and fail validation like any typo
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
