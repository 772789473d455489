//! Raw key event contract supplied by the host event source

use crate::combo::Modifiers;
use crate::key_table::KeyCode;

/// A key-down event as delivered by the host.
///
/// Mirrors the browser keydown shape: the pressed code plus a fresh
/// snapshot of the four modifier flags. Key-up is not modeled as data;
/// hosts call [`crate::engine::Shortcut::clean_combo`] on any key-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: KeyCode,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyEvent {
    /// A key-down with no modifier flags set
    pub fn new(key_code: impl Into<KeyCode>) -> Self {
        Self {
            key_code: key_code.into(),
            ..Self::default()
        }
    }

    /// A key-down carrying a modifier snapshot
    pub fn with_modifiers(key_code: impl Into<KeyCode>, mods: Modifiers) -> Self {
        Self {
            key_code: key_code.into(),
            alt: mods.alt(),
            ctrl: mods.ctrl(),
            shift: mods.shift(),
            meta: mods.cmd(),
        }
    }

    /// The event's modifier flags as a bitfield (meta maps to cmd)
    pub fn modifiers(&self) -> Modifiers {
        Modifiers::new(self.alt, self.ctrl, self.shift, self.meta)
    }
}
