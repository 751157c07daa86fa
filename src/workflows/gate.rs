//! Entry gate: register or log in before reaching the main menu

use crate::config::settings::Settings;
use crate::error::PesBuddyResult;
use crate::models::{Identifier, UserRecord};
use crate::prompt::Prompt;
use crate::services::{LoginOutcome, RegisterOutcome, SessionGate};
use crate::storage::Storage;

/// How the gate was left
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Logged in; carries the name the session greets
    Authenticated { name: String },
    /// Login attempts exhausted
    LockedOut,
}

/// Show the register/login menu until a login succeeds or is locked out
pub fn run<P: Prompt>(io: &mut P, storage: &Storage, settings: &Settings) -> PesBuddyResult<GateOutcome> {
    let mut gate = SessionGate::new(storage, settings.max_login_attempts);

    loop {
        io.say("1. Register\n2. Login")?;
        let choice = io.read_line("Enter your choice: ")?;

        match choice.trim() {
            "1" => register(io, &gate)?,
            "2" => return login(io, &mut gate),
            other if other.parse::<i64>().is_ok() => {
                io.say("Invalid choice!\nPlease enter 1 to Register or 2 to Login.\n")?;
            }
            _ => io.say("Invalid input. Please enter 1 or 2.\n")?,
        }
    }
}

fn register<P: Prompt>(io: &mut P, gate: &SessionGate<'_>) -> PesBuddyResult<()> {
    let name = io.read_valid("Enter your Name: ", |line| {
        UserRecord::validate_name(line).map(|()| line.to_string())
    })?;

    let identifier = io.read_valid("Enter your SRN: ", |line| {
        Identifier::parse(line).map_err(|_| {
            "Invalid SRN Format! It should be exactly 13 Characters long.".to_string()
        })
    })?;

    match gate.register(&name, &identifier)? {
        RegisterOutcome::Created(_) => {
            io.say("Remember, your SRN is your Password!")?;
            io.say("Redirecting you to the login page...\n")?;
        }
        RegisterOutcome::AlreadyExists => io.say("User Already Exists!\n")?,
    }
    Ok(())
}

fn login<P: Prompt>(io: &mut P, gate: &mut SessionGate<'_>) -> PesBuddyResult<GateOutcome> {
    while gate.attempts_left() > 0 {
        let name = io.read_line("Name: ")?;
        let password = io.read_line("Password: ")?;

        match gate.login(&name, &password)? {
            LoginOutcome::Authenticated { name } => {
                io.say(&format!("\nWelcome back, {}!", name))?;
                return Ok(GateOutcome::Authenticated { name });
            }
            LoginOutcome::Rejected { attempts_left } => {
                io.say(&format!(
                    "Invalid Credentials!\nLogin Attempts left: {}\n",
                    attempts_left
                ))?;
            }
            LoginOutcome::LockedOut => break,
        }
    }

    io.say("Invalid Credentials!\nLogin Attempts left: 0\n")?;
    io.say("Too many failed Attempts!\nTry again after some time!\nThank You!")?;
    Ok(GateOutcome::LockedOut)
}
