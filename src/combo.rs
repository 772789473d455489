//! Key combo representation: modifier flags plus a set of ordinary keys

use std::collections::BTreeSet;
use std::fmt;

use crate::error::Error;
use crate::key_table::{KeyCode, KeyTable, Modifier, Resolved};

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const ALT: Modifiers = Modifiers(0b0001);
    pub const CTRL: Modifiers = Modifiers(0b0010);
    pub const SHIFT: Modifiers = Modifiers(0b0100);
    pub const CMD: Modifiers = Modifiers(0b1000);

    /// Create modifiers from individual flags
    pub const fn new(alt: bool, ctrl: bool, shift: bool, cmd: bool) -> Self {
        let mut bits = 0u8;
        if alt {
            bits |= 0b0001;
        }
        if ctrl {
            bits |= 0b0010;
        }
        if shift {
            bits |= 0b0100;
        }
        if cmd {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    /// Check if alt is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0001 != 0
    }

    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0010 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0100 != 0
    }

    /// Check if cmd (meta) is held
    #[inline]
    pub const fn cmd(self) -> bool {
        self.0 & 0b1000 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// The flag bit for one named modifier
    pub const fn from_modifier(modifier: Modifier) -> Modifiers {
        match modifier {
            Modifier::Alt => Modifiers::ALT,
            Modifier::Ctrl => Modifiers::CTRL,
            Modifier::Shift => Modifiers::SHIFT,
            Modifier::Cmd => Modifiers::CMD,
        }
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.alt() {
            parts.push("Alt");
        }
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.cmd() {
            parts.push("Cmd");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A parsed chord: the set of non-modifier key codes plus modifier flags.
///
/// Immutable once built from a chord string; the live tracker mutates its
/// own working instance incrementally. Modifier codes never land in `keys`;
/// they are folded into `mods` instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyCombo {
    pub keys: BTreeSet<KeyCode>,
    pub mods: Modifiers,
}

impl KeyCombo {
    /// An empty combo (no keys, no modifiers)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a chord string like "ctrl shift a" against the key table.
    ///
    /// Parsing is case-insensitive and tolerant of extra whitespace. Tokens
    /// resolving to modifier codes (including the platform cmd alias set)
    /// set the matching flag; everything else joins the key set.
    pub fn parse(combo_str: &str, table: &KeyTable) -> Result<KeyCombo, Error> {
        let normalized = combo_str.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(Error::EmptyCombo);
        }

        let mut combo = KeyCombo::new();
        for token in normalized.split_whitespace() {
            match table.resolve(token)? {
                Resolved::One(code) => match table.modifier_of(code) {
                    Some(modifier) => {
                        combo.mods = combo.mods | Modifiers::from_modifier(modifier);
                    }
                    None => {
                        combo.keys.insert(code);
                    }
                },
                // The only alias set is cmd
                Resolved::Alias(_) => {
                    combo.mods = combo.mods | Modifiers::CMD;
                }
            }
        }
        Ok(combo)
    }

    /// Whether any of the four modifier flags is set
    pub fn has_any_modifier(&self) -> bool {
        !self.mods.is_empty()
    }

    /// Whether the combo holds no keys and no modifiers
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.mods.is_empty()
    }

    /// Human-readable rendering using the table's reverse lookup, for
    /// debug traces
    pub fn describe(&self, table: &KeyTable) -> String {
        let keys: Vec<String> = self
            .keys
            .iter()
            .map(|&code| match table.reverse(code) {
                Some(name) => name.to_string(),
                None => format!("#{}", code),
            })
            .collect();
        format!("keys=[{}] mods={}", keys.join(", "), self.mods)
    }
}
