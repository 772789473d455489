//! Error types for the shortcut engine

use std::fmt;

/// Errors surfaced by parsing, registration and bulk loading.
///
/// "No action matched this event" is not an error; dispatch reports it
/// through [`crate::dispatch::Outcome::NoMatch`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A chord token did not resolve to any known key name
    UnknownKey(String),
    /// The chord string was empty or all whitespace
    EmptyCombo,
    /// Subscribe/unsubscribe referenced an action name that is not registered
    UnknownAction(String),
    /// A bulk-load entry failed validation (missing or empty field)
    InvalidEntry(String),
    /// An options document contained an unrecognized key
    InvalidOption(String),
    /// The JSON/YAML document itself was malformed
    Parse(String),
    /// A keymap file could not be read
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownKey(k) => write!(f, "unknown key: {}", k),
            Error::EmptyCombo => write!(f, "combo string must be a non-empty string"),
            Error::UnknownAction(a) => write!(f, "action {} does not exist", a),
            Error::InvalidEntry(e) => write!(f, "invalid keymap entry: {}", e),
            Error::InvalidOption(o) => write!(f, "invalid option: {}", o),
            Error::Parse(e) => write!(f, "parse error: {}", e),
            Error::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for Error {}
