//! User model
//!
//! A registered user is a display name plus a 13-character identifier (the
//! university SRN). The identifier doubles as the password.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Required identifier length, in characters
pub const IDENTIFIER_LEN: usize = 13;

/// Separator between name and identifier in the credential store
pub const RECORD_SEPARATOR: &str = ", ";

/// A validated 13-character identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Validate and wrap a raw identifier
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let len = raw.chars().count();
        if len != IDENTIFIER_LEN {
            return Err(IdentifierError::WrongLength(len));
        }
        if raw.contains(['\n', '\r']) {
            return Err(IdentifierError::ControlCharacter);
        }
        Ok(Self(raw.to_string()))
    }

    /// Get the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    WrongLength(usize),
    ControlCharacter,
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(
                f,
                "SRN must be exactly {} characters long (got {})",
                IDENTIFIER_LEN, len
            ),
            Self::ControlCharacter => write!(f, "SRN cannot contain line breaks"),
        }
    }
}

impl std::error::Error for IdentifierError {}

/// One record of the credential store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub identifier: Identifier,
}

impl UserRecord {
    /// Create a new user record
    pub fn new(name: impl Into<String>, identifier: Identifier) -> Self {
        Self {
            name: name.into(),
            identifier,
        }
    }

    /// Check whether a name can be stored without corrupting the record format
    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.contains(',') {
            return Err("Name cannot contain a comma".into());
        }
        if name.contains(['\n', '\r']) {
            return Err("Name cannot contain line breaks".into());
        }
        Ok(())
    }

    /// Render the record as one store line (without terminator)
    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.name, RECORD_SEPARATOR, self.identifier)
    }

    /// Parse one store line
    ///
    /// The line splits at the first `", "`; everything after it is the
    /// identifier, byte for byte, so whatever was registered reads back
    /// unchanged. Lines without the separator are not records. The
    /// identifier is kept even if its length is off, so hand-edited files
    /// still load.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (name, identifier) = line.split_once(RECORD_SEPARATOR)?;
        if identifier.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            identifier: Identifier(identifier.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_length() {
        assert!(Identifier::parse("PES1UG20CS001").is_ok());
        assert_eq!(
            Identifier::parse("PES1UG20CS01"),
            Err(IdentifierError::WrongLength(12))
        );
        assert_eq!(
            Identifier::parse("PES1UG20CS0011"),
            Err(IdentifierError::WrongLength(14))
        );
        assert_eq!(Identifier::parse(""), Err(IdentifierError::WrongLength(0)));
    }

    #[test]
    fn test_identifier_counts_characters_not_bytes() {
        assert!(Identifier::parse("ÉÉÉÉÉÉÉÉÉÉÉÉÉ").is_ok());
    }

    #[test]
    fn test_record_line_round_trip() {
        let record = UserRecord::new("Asha Rao", Identifier::parse("PES1UG20CS001").unwrap());
        let line = record.to_line();
        assert_eq!(line, "Asha Rao, PES1UG20CS001");
        assert_eq!(UserRecord::from_line(&line), Some(record));
    }

    #[test]
    fn test_from_line_strips_crlf_only() {
        let record = UserRecord::from_line("Ravi, PES2UG21EC042\r").unwrap();
        assert_eq!(record.name, "Ravi");
        assert_eq!(record.identifier.as_str(), "PES2UG21EC042");
    }

    #[test]
    fn test_padded_identifier_survives_round_trip() {
        let identifier = Identifier::parse("  PES1UG20CS0").unwrap();
        let record = UserRecord::new("Asha", identifier);
        let line = record.to_line();
        assert_eq!(line, "Asha,   PES1UG20CS0");

        let parsed = UserRecord::from_line(&line).unwrap();
        assert_eq!(parsed.identifier.as_str(), "  PES1UG20CS0");
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_from_line_rejects_non_records() {
        assert_eq!(UserRecord::from_line(""), None);
        assert_eq!(UserRecord::from_line("no separator here"), None);
        assert_eq!(UserRecord::from_line("Ravi,PES2UG21EC042"), None);
        assert_eq!(UserRecord::from_line("Name, "), None);
    }

    #[test]
    fn test_validate_name() {
        assert!(UserRecord::validate_name("Asha Rao").is_ok());
        assert!(UserRecord::validate_name("Rao, Asha").is_err());
    }
}
