//! Key name ↔ key code mapping and modifier classification
//!
//! The table is the single source of truth for translating chord tokens
//! ("ctrl", "a", "num+") into platform key codes and for deciding which
//! codes are modifier ("state") keys.

use std::collections::HashMap;
use std::fmt;

use crate::error::Error;

/// A platform key code as delivered by host key events
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyCode(pub u16);

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for KeyCode {
    fn from(code: u16) -> Self {
        KeyCode(code)
    }
}

/// The four modifier ("state") keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Alt,
    Ctrl,
    Shift,
    Cmd,
}

impl Modifier {
    pub const fn name(self) -> &'static str {
        match self {
            Modifier::Alt => "alt",
            Modifier::Ctrl => "ctrl",
            Modifier::Shift => "shift",
            Modifier::Cmd => "cmd",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Host platform inputs used to derive the cmd alias set.
///
/// Passed explicitly to [`KeyTable::new`] so re-derivation at startup is a
/// plain reconstruction instead of mutation of shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Platform {
    pub os: String,
    pub user_agent: String,
}

impl Platform {
    pub fn new(os: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            user_agent: user_agent.into(),
        }
    }

    fn is_mac(&self) -> bool {
        self.os.contains("Mac")
    }
}

/// Result of resolving a key name: a single code, or a set of
/// interchangeable codes (only "cmd" has an alias set).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved<'a> {
    One(KeyCode),
    Alias(&'a [KeyCode]),
}

// Every fixed name → code pair. "cmd" is absent on purpose: its codes are
// platform-derived in KeyTable::new.
const KEY_NAMES: &[(&str, u16)] = &[
    // digits
    ("0", 48),
    ("1", 49),
    ("2", 50),
    ("3", 51),
    ("4", 52),
    ("5", 53),
    ("6", 54),
    ("7", 55),
    ("8", 56),
    ("9", 57),
    // letters
    ("a", 65),
    ("b", 66),
    ("c", 67),
    ("d", 68),
    ("e", 69),
    ("f", 70),
    ("g", 71),
    ("h", 72),
    ("i", 73),
    ("j", 74),
    ("k", 75),
    ("l", 76),
    ("m", 77),
    ("n", 78),
    ("o", 79),
    ("p", 80),
    ("q", 81),
    ("r", 82),
    ("s", 83),
    ("t", 84),
    ("u", 85),
    ("v", 86),
    ("w", 87),
    ("x", 88),
    ("y", 89),
    ("z", 90),
    // punctuation
    (",", 188),
    (".", 190),
    // modifiers
    ("shift", 16),
    ("ctrl", 17),
    ("alt", 18),
    // navigation
    ("left", 37),
    ("right", 39),
    ("up", 38),
    ("down", 40),
    ("backspace", 8),
    ("enter", 13),
    ("pageup", 33),
    ("pagedown", 34),
    ("end", 35),
    ("home", 36),
    // numpad
    ("num0", 96),
    ("num1", 97),
    ("num2", 98),
    ("num3", 99),
    ("num4", 100),
    ("num5", 101),
    ("num6", 102),
    ("num7", 103),
    ("num8", 104),
    ("num9", 105),
    ("num*", 106),
    ("num+", 107),
    ("num-", 109),
    ("num.", 110),
    ("num/", 111),
    // function keys
    ("f1", 112),
    ("f2", 113),
    ("f3", 114),
    ("f4", 115),
    ("f5", 116),
    ("f6", 117),
    ("f7", 118),
    ("f8", 119),
    ("f9", 120),
    ("f10", 121),
    ("f11", 122),
    ("f12", 123),
];

/// The key table stores the name↔code maps and the platform cmd alias set
#[derive(Clone, Debug)]
pub struct KeyTable {
    map: HashMap<&'static str, KeyCode>,
    reversed: HashMap<KeyCode, &'static str>,
    cmd_codes: Vec<KeyCode>,
}

impl KeyTable {
    /// Build the table for the given platform.
    ///
    /// The cmd alias set is `[91, 93]` by default, `[17]` on Mac+Opera and
    /// `[224]` on Mac+Firefox. Calling this again with the same platform
    /// yields an identical table.
    pub fn new(platform: &Platform) -> Self {
        let mut map = HashMap::with_capacity(KEY_NAMES.len());
        let mut reversed = HashMap::with_capacity(KEY_NAMES.len() + 2);
        for &(name, code) in KEY_NAMES {
            map.insert(name, KeyCode(code));
            reversed.insert(KeyCode(code), name);
        }

        let cmd_codes = Self::derive_cmd_codes(platform);
        for &code in &cmd_codes {
            reversed.insert(code, "cmd");
        }

        Self {
            map,
            reversed,
            cmd_codes,
        }
    }

    fn derive_cmd_codes(platform: &Platform) -> Vec<KeyCode> {
        if platform.is_mac() && platform.user_agent.contains("Opera") {
            vec![KeyCode(17)]
        } else if platform.is_mac() && platform.user_agent.contains("Firefox") {
            vec![KeyCode(224)]
        } else {
            vec![KeyCode(91), KeyCode(93)]
        }
    }

    /// Resolve a key name (case-insensitive) to its code or alias set
    pub fn resolve(&self, name: &str) -> Result<Resolved<'_>, Error> {
        let lower = name.to_lowercase();
        if lower == "cmd" {
            return Ok(Resolved::Alias(&self.cmd_codes));
        }
        self.map
            .get(lower.as_str())
            .map(|&code| Resolved::One(code))
            .ok_or_else(|| Error::UnknownKey(name.to_string()))
    }

    /// Classify a code as one of the modifier keys, if it is one.
    ///
    /// The fixed alt/ctrl/shift codes are checked before the cmd alias set,
    /// so on Mac+Opera (where cmd aliases to 17) code 17 still reads as ctrl;
    /// live tracking takes the actual flags from the event, so matching is
    /// unaffected.
    pub fn modifier_of(&self, code: KeyCode) -> Option<Modifier> {
        match code.0 {
            18 => Some(Modifier::Alt),
            17 => Some(Modifier::Ctrl),
            16 => Some(Modifier::Shift),
            _ if self.cmd_codes.contains(&code) => Some(Modifier::Cmd),
            _ => None,
        }
    }

    /// Whether the code is any modifier key
    pub fn is_modifier(&self, code: KeyCode) -> bool {
        self.modifier_of(code).is_some()
    }

    /// The platform cmd alias codes, any one of which satisfies cmd
    pub fn cmd_codes(&self) -> &[KeyCode] {
        &self.cmd_codes
    }

    /// Inverse lookup, for debugging output
    pub fn reverse(&self, code: KeyCode) -> Option<&'static str> {
        self.reversed.get(&code).copied()
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::new(&Platform::default())
    }
}
