//! Matching the live combo against registered actions

use tracing::debug;

use crate::event::KeyEvent;
use crate::key_table::KeyTable;
use crate::options::Options;
use crate::registry::ActionRegistry;
use crate::tracker::ComboTracker;

/// What processing one key event produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// An action's combo equals the live combo; its callbacks ran
    Fired {
        action: String,
        callbacks: usize,
        /// Whether the host should suppress default handling for the event
        prevent_default: bool,
    },
    /// No registered combo equals the live combo; a normal outcome for
    /// most keystrokes
    NoMatch,
    /// Matching was gated off by `only_state_combos` (no modifier held)
    Skipped,
    /// The event was not novel (repeated key-down or a modifier key), so
    /// matching was not evaluated
    Ignored,
    /// The engine is paused
    Paused,
}

impl Outcome {
    pub fn fired(&self) -> bool {
        matches!(self, Outcome::Fired { .. })
    }
}

/// Find the first action whose combo equals the live combo and invoke its
/// callbacks.
///
/// Actions are scanned in insertion order and at most one fires per event,
/// even if several registered combos coincide structurally.
pub fn dispatch(
    tracker: &ComboTracker,
    registry: &mut ActionRegistry,
    ev: &KeyEvent,
    options: &Options,
    table: &KeyTable,
) -> Outcome {
    if options.only_state_combos && !tracker.has_any_modifier() {
        return Outcome::Skipped;
    }

    let live = tracker.current();
    for action in registry.actions_mut() {
        if action.combo == *live {
            let callbacks = action.callback_count();
            if options.debug {
                debug!(
                    target: "keychord",
                    action = %action.name,
                    combo = %live.describe(table),
                    callbacks,
                    "action matched"
                );
            }
            action.fire(ev);
            return Outcome::Fired {
                action: action.name.clone(),
                callbacks,
                prevent_default: options.prevent_default,
            };
        }
    }

    Outcome::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::combo::{KeyCombo, Modifiers};
    use std::cell::Cell;
    use std::rc::Rc;

    fn tracker_with(table: &KeyTable, events: &[KeyEvent]) -> ComboTracker {
        let mut tracker = ComboTracker::new();
        for ev in events {
            tracker.feed(ev, table);
        }
        tracker
    }

    #[test]
    fn test_fires_matching_action() {
        let table = KeyTable::default();
        let mut registry = ActionRegistry::new();
        registry.add(Action::new(
            "open",
            KeyCombo::parse("ctrl a", &table).unwrap(),
        ));
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        registry
            .subscribe("open", Box::new(move |_| h.set(h.get() + 1)))
            .unwrap();

        let ev = KeyEvent::with_modifiers(65, Modifiers::CTRL);
        let tracker = tracker_with(&table, &[KeyEvent::with_modifiers(17, Modifiers::CTRL), ev]);

        let outcome = dispatch(&tracker, &mut registry, &ev, &Options::default(), &table);
        assert_eq!(
            outcome,
            Outcome::Fired {
                action: "open".to_string(),
                callbacks: 1,
                prevent_default: false,
            }
        );
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_no_match_is_silent() {
        let table = KeyTable::default();
        let mut registry = ActionRegistry::new();
        registry.add(Action::new(
            "open",
            KeyCombo::parse("ctrl b", &table).unwrap(),
        ));

        let ev = KeyEvent::new(65);
        let tracker = tracker_with(&table, &[ev]);
        let outcome = dispatch(&tracker, &mut registry, &ev, &Options::default(), &table);
        assert_eq!(outcome, Outcome::NoMatch);
    }

    #[test]
    fn test_only_state_combos_gates_plain_keys() {
        let table = KeyTable::default();
        let mut registry = ActionRegistry::new();
        registry.add(Action::new("plain", KeyCombo::parse("a", &table).unwrap()));
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        registry
            .subscribe("plain", Box::new(move |_| h.set(h.get() + 1)))
            .unwrap();

        let options = Options::new().only_state_combos(true);
        let ev = KeyEvent::new(65);
        let tracker = tracker_with(&table, &[ev]);

        let outcome = dispatch(&tracker, &mut registry, &ev, &options, &table);
        assert_eq!(outcome, Outcome::Skipped);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_only_state_combos_allows_modified_combo() {
        let table = KeyTable::default();
        let mut registry = ActionRegistry::new();
        registry.add(Action::new(
            "open",
            KeyCombo::parse("ctrl a", &table).unwrap(),
        ));

        let options = Options::new().only_state_combos(true);
        let ev = KeyEvent::with_modifiers(65, Modifiers::CTRL);
        let tracker = tracker_with(&table, &[ev]);

        assert!(dispatch(&tracker, &mut registry, &ev, &options, &table).fired());
    }

    #[test]
    fn test_at_most_one_action_fires() {
        let table = KeyTable::default();
        let mut registry = ActionRegistry::new();
        // Two names, structurally identical combos
        registry.add(Action::new(
            "first",
            KeyCombo::parse("ctrl a", &table).unwrap(),
        ));
        registry.add(Action::new(
            "second",
            KeyCombo::parse("ctrl a", &table).unwrap(),
        ));
        let hits = Rc::new(Cell::new(0));
        for name in ["first", "second"] {
            let h = Rc::clone(&hits);
            registry
                .subscribe(name, Box::new(move |_| h.set(h.get() + 1)))
                .unwrap();
        }

        let ev = KeyEvent::with_modifiers(65, Modifiers::CTRL);
        let tracker = tracker_with(&table, &[ev]);
        let outcome = dispatch(&tracker, &mut registry, &ev, &Options::default(), &table);

        assert_eq!(hits.get(), 1);
        match outcome {
            Outcome::Fired { action, .. } => assert_eq!(action, "first"),
            other => panic!("expected Fired, got {:?}", other),
        }
    }

    #[test]
    fn test_prevent_default_signal() {
        let table = KeyTable::default();
        let mut registry = ActionRegistry::new();
        registry.add(Action::new(
            "open",
            KeyCombo::parse("ctrl a", &table).unwrap(),
        ));

        let options = Options::new().prevent_default(true);
        let ev = KeyEvent::with_modifiers(65, Modifiers::CTRL);
        let tracker = tracker_with(&table, &[ev]);

        match dispatch(&tracker, &mut registry, &ev, &options, &table) {
            Outcome::Fired {
                prevent_default, ..
            } => assert!(prevent_default),
            other => panic!("expected Fired, got {:?}", other),
        }
    }
}
