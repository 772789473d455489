//! Live combo tracking: folds key-down events into a running combo

use crate::combo::{KeyCombo, Modifiers};
use crate::event::KeyEvent;
use crate::key_table::KeyTable;

/// Mutable accumulator for the currently-held combo.
///
/// Each fed event contributes its key code to the running key set and its
/// modifier snapshot to the running flags; any key-up resets the whole
/// combo. This gives accumulate-until-release semantics: holding ctrl,
/// then pressing `a`, then `f` builds `{a, f}` with ctrl set, which
/// matches a registered "ctrl a f" in any token order.
#[derive(Clone, Debug, Default)]
pub struct ComboTracker {
    current: KeyCombo,
}

impl ComboTracker {
    /// A tracker in the idle state (empty combo)
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one key-down event into the running combo.
    ///
    /// Returns whether the event was novel. Modifier flags are resampled
    /// from the event itself and merged into the running flags (sticky
    /// until reset). Modifier key codes and repeated key-downs of held
    /// keys are not novel; browsers repeat key-down while a key is held.
    pub fn feed(&mut self, ev: &KeyEvent, table: &KeyTable) -> bool {
        self.current.mods = self.current.mods | ev.modifiers();

        if let Some(modifier) = table.modifier_of(ev.key_code) {
            self.current.mods = self.current.mods | Modifiers::from_modifier(modifier);
            return false;
        }

        if self.current.keys.contains(&ev.key_code) {
            return false;
        }

        self.current.keys.insert(ev.key_code);
        true
    }

    /// Clear the running combo back to the idle state
    pub fn reset(&mut self) {
        self.current = KeyCombo::new();
    }

    /// The running combo
    pub fn current(&self) -> &KeyCombo {
        &self.current
    }

    /// Whether any of the four modifier flags is set
    pub fn has_any_modifier(&self) -> bool {
        self.current.has_any_modifier()
    }

    /// Whether no keys are held and no flags are set
    pub fn is_idle(&self) -> bool {
        self.current.is_empty()
    }
}
