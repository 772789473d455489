//! Caller-owned shortcut engine coordinating tracking, matching and dispatch

use std::path::Path;

use tracing::debug;

use crate::action::{Action, CallbackId};
use crate::combo::KeyCombo;
use crate::config;
use crate::dispatch::{dispatch, Outcome};
use crate::error::Error;
use crate::event::KeyEvent;
use crate::key_table::{KeyTable, Platform};
use crate::options::Options;
use crate::registry::ActionRegistry;
use crate::tracker::ComboTracker;

/// The shortcut engine: owns the key table, action registry and live
/// tracker for one key-event source.
///
/// Hosts forward every key-down to [`Shortcut::process_event`] and every
/// key-up to [`Shortcut::clean_combo`]. The engine is explicitly
/// constructed and caller-owned; embedders wanting a shared instance wrap
/// one themselves.
#[derive(Debug)]
pub struct Shortcut {
    table: KeyTable,
    registry: ActionRegistry,
    tracker: ComboTracker,
    options: Options,
    initialized: bool,
    paused: bool,
}

impl Shortcut {
    /// Build an engine for the given platform
    pub fn new(platform: &Platform) -> Self {
        Self {
            table: KeyTable::new(platform),
            registry: ActionRegistry::new(),
            tracker: ComboTracker::new(),
            options: Options::default(),
            initialized: false,
            paused: false,
        }
    }

    /// Record options and mark the engine initialized.
    ///
    /// Idempotent: only the first call takes effect, so a host wiring key
    /// listeners more than once does not duplicate anything.
    pub fn init(&mut self, options: Options) {
        if !self.initialized {
            self.options = options;
            self.initialized = true;
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Return to the pristine state: no actions, idle tracker, default
    /// options, not initialized, not paused
    pub fn reset(&mut self) {
        self.registry.reset();
        self.tracker.reset();
        self.options = Options::default();
        self.initialized = false;
        self.paused = false;
    }

    /// Initialize (if needed) and bulk-load actions from a JSON array of
    /// `{ action, combo }` objects.
    ///
    /// The load is atomic: a malformed entry leaves the registry untouched.
    pub fn load_from_json(&mut self, json: &str, options: Option<Options>) -> Result<(), Error> {
        self.init(options.unwrap_or_default());
        let actions = config::actions_from_json(json, &self.table)?;
        for action in actions {
            self.registry.add(action);
        }
        Ok(())
    }

    /// Initialize (if needed) and bulk-load actions from a keymap file
    /// (JSON or YAML by extension)
    pub fn load_from_file(&mut self, path: &Path, options: Option<Options>) -> Result<(), Error> {
        self.init(options.unwrap_or_default());
        let actions = config::load_keymap_file(path, &self.table)?;
        for action in actions {
            self.registry.add(action);
        }
        Ok(())
    }

    /// Parse a chord string against this engine's key table
    pub fn parse_combo(&self, combo_str: &str) -> Result<KeyCombo, Error> {
        KeyCombo::parse(combo_str, &self.table)
    }

    /// Register an action; last write wins on duplicate names
    pub fn add_action(&mut self, action: Action) {
        self.registry.add(action);
    }

    /// Attach a callback to a registered action
    pub fn subscribe(
        &mut self,
        name: &str,
        cb: impl FnMut(&KeyEvent) + 'static,
    ) -> Result<CallbackId, Error> {
        self.registry.subscribe(name, Box::new(cb))
    }

    /// Detach one callback by id, or all of the action's callbacks when
    /// `id` is `None`
    pub fn unsubscribe(&mut self, name: &str, id: Option<CallbackId>) -> Result<(), Error> {
        self.registry.unsubscribe(name, id)
    }

    /// Fold a key-down into the live combo and dispatch on novel events.
    ///
    /// A no-op returning [`Outcome::Paused`] while paused. Repeated
    /// key-downs and modifier keys yield [`Outcome::Ignored`] without
    /// evaluating any matching.
    pub fn process_event(&mut self, ev: &KeyEvent) -> Outcome {
        if self.paused {
            return Outcome::Paused;
        }

        let novel = self.tracker.feed(ev, &self.table);
        if !novel {
            return Outcome::Ignored;
        }

        if self.options.debug {
            debug!(
                target: "keychord",
                key = %ev.key_code,
                combo = %self.tracker.current().describe(&self.table),
                "key pressed"
            );
        }

        dispatch(
            &self.tracker,
            &mut self.registry,
            ev,
            &self.options,
            &self.table,
        )
    }

    /// Key-up hook: reset the whole live combo.
    ///
    /// Any release clears every held key and flag, not just the released
    /// key; this trades multi-stage chord entry for never leaving a stuck
    /// modifier behind. A no-op while paused, since release events are
    /// not buffered.
    pub fn clean_combo(&mut self) {
        if self.paused {
            return;
        }
        self.tracker.reset();
        if self.options.debug {
            debug!(target: "keychord", "cleaned live combo");
        }
    }

    /// Stop processing events; tracker state is left as-is
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume processing from the state pause left behind
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn key_table(&self) -> &KeyTable {
        &self.table
    }

    pub fn actions(&self) -> &[Action] {
        self.registry.actions()
    }

    /// The live combo currently being accumulated
    pub fn live_combo(&self) -> &KeyCombo {
        self.tracker.current()
    }
}

impl Default for Shortcut {
    fn default() -> Self {
        Self::new(&Platform::default())
    }
}
