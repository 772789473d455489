//! Bulk keymap loading from JSON documents and keymap files
//!
//! The entry shape matches the JSON array format:
//!
//! ```json
//! [
//!   { "action": "openWindow", "combo": "ctrl a" }
//! ]
//! ```
//!
//! Loading is atomic: every entry is validated and parsed before any
//! action is produced, so a malformed entry aborts the whole load.

use std::path::Path;

use serde::Deserialize;

use crate::action::Action;
use crate::combo::KeyCombo;
use crate::error::Error;
use crate::key_table::KeyTable;

/// One action/combo pair from a keymap document
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ComboEntry {
    pub action: String,
    pub combo: String,
}

/// Parse validated entries into actions; all-or-nothing
pub fn actions_from_entries(entries: &[ComboEntry], table: &KeyTable) -> Result<Vec<Action>, Error> {
    let mut actions = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.action.trim().is_empty() {
            return Err(Error::InvalidEntry(
                "each entry must have a non-empty \"action\" field".to_string(),
            ));
        }
        if entry.combo.trim().is_empty() {
            return Err(Error::InvalidEntry(format!(
                "entry \"{}\" must have a non-empty \"combo\" field",
                entry.action
            )));
        }
        let combo = KeyCombo::parse(&entry.combo, table)?;
        actions.push(Action::new(entry.action.clone(), combo));
    }
    Ok(actions)
}

/// Parse a JSON array of `{ action, combo }` objects into actions
pub fn actions_from_json(json: &str, table: &KeyTable) -> Result<Vec<Action>, Error> {
    let entries: Vec<ComboEntry> =
        serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))?;
    actions_from_entries(&entries, table)
}

/// Load actions from a keymap file; `.yaml`/`.yml` parse as YAML,
/// anything else as JSON
pub fn load_keymap_file(path: &Path, table: &KeyTable) -> Result<Vec<Action>, Error> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io(e.to_string()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        let entries: Vec<ComboEntry> =
            serde_yaml::from_str(&content).map_err(|e| Error::Parse(e.to_string()))?;
        actions_from_entries(&entries, table)
    } else {
        actions_from_json(&content, table)
    }
}
