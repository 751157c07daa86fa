//! Canteen menu models
//!
//! Each canteen publishes its menu as a plain text file with one
//! `<item name> <price>` entry per line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of items read from one menu file
pub const MAX_MENU_ITEMS: usize = 100;

/// The canteens that accept orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Canteen {
    Skm,
    Gjbc,
    BeBloc,
    Hornbill,
}

impl Canteen {
    /// All canteens in menu order
    pub fn all() -> [Canteen; 4] {
        [Canteen::Skm, Canteen::Gjbc, Canteen::BeBloc, Canteen::Hornbill]
    }

    /// Canteen for a one-based menu selection
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(Canteen::Skm),
            2 => Some(Canteen::Gjbc),
            3 => Some(Canteen::BeBloc),
            4 => Some(Canteen::Hornbill),
            _ => None,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Canteen::Skm => "SKM Canteen",
            Canteen::Gjbc => "GJBC Canteen",
            Canteen::BeBloc => "BE BLOC 13th Floor Canteen",
            Canteen::Hornbill => "HornBill Canteen",
        }
    }

    /// File name of the canteen's menu listing
    pub fn menu_file(&self) -> &'static str {
        match self {
            Canteen::Skm => "skm_menu.txt",
            Canteen::Gjbc => "gjbc_menu.txt",
            Canteen::BeBloc => "bebloc_menu.txt",
            Canteen::Hornbill => "hornbill_menu.txt",
        }
    }
}

impl fmt::Display for Canteen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One purchasable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: i64,
}

impl MenuItem {
    /// Create a menu item
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Parse one menu line
    ///
    /// The line is split at its last space. The prefix is the item name and
    /// the suffix is read as a leading integer; a suffix with no usable digits
    /// gives price 0 instead of rejecting the line. Lines without a space are
    /// not items.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\n', '\r']);
        let (name, price) = line.rsplit_once(' ')?;
        Some(Self {
            name: name.to_string(),
            price: parse_leading_int(price),
        })
    }

    /// Render the item as a menu file line (without terminator)
    pub fn to_line(&self) -> String {
        format!("{} {}", self.name, self.price)
    }
}

/// Read the integer at the start of `text`
///
/// Skips leading whitespace, accepts an optional sign and stops at the first
/// non-digit. Anything that doesn't yield a non-negative value in range is 0.
fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(value) if !negative => value,
        _ => 0,
    }
}
