//! Behavior toggles for event processing and dispatch

use serde::Deserialize;

use crate::error::Error;

/// Engine behavior toggles; all default to off.
///
/// Deserialization is strict: unrecognized keys fail with
/// [`Error::InvalidOption`]. Field names accept the camelCase spelling
/// used by JSON option documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Options {
    /// Emit structured trace output while processing and matching combos
    pub debug: bool,
    /// Signal the host to suppress default handling when an action fires
    pub prevent_default: bool,
    /// Only evaluate matching for combos holding at least one modifier
    pub only_state_combos: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document.
    ///
    /// A malformed document fails with [`Error::Parse`]; a well-formed one
    /// carrying unrecognized keys fails with [`Error::InvalidOption`].
    pub fn from_json(json: &str) -> Result<Options, Error> {
        serde_json::from_str(json).map_err(|e| {
            if e.is_syntax() || e.is_eof() {
                Error::Parse(e.to_string())
            } else {
                Error::InvalidOption(e.to_string())
            }
        })
    }

    pub fn debug(mut self, on: bool) -> Self {
        self.debug = on;
        self
    }

    pub fn prevent_default(mut self, on: bool) -> Self {
        self.prevent_default = on;
        self
    }

    pub fn only_state_combos(mut self, on: bool) -> Self {
        self.only_state_combos = on;
        self
    }
}
