//! Action registry: insertion-ordered map from name to action

use std::collections::HashMap;

use crate::action::{Action, Callback, CallbackId};
use crate::error::Error;

/// Stores registered actions and resolves them by name.
///
/// Actions keep their insertion order so dispatch iterates
/// deterministically. Re-adding under an existing name overwrites the
/// action in place (combo and callbacks both replaced), keeping its
/// original position.
#[derive(Debug, Default)]
pub struct ActionRegistry {
    actions: Vec<Action>,
    index: HashMap<String, usize>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action; last write wins on duplicate names
    pub fn add(&mut self, action: Action) {
        match self.index.get(&action.name) {
            Some(&idx) => self.actions[idx] = action,
            None => {
                self.index.insert(action.name.clone(), self.actions.len());
                self.actions.push(action);
            }
        }
    }

    /// Attach a callback to a registered action
    pub fn subscribe(&mut self, name: &str, cb: Callback) -> Result<CallbackId, Error> {
        let action = self
            .get_mut(name)
            .ok_or_else(|| Error::UnknownAction(name.to_string()))?;
        Ok(action.add_callback(cb))
    }

    /// Detach one callback by id, or all callbacks when `id` is `None`
    pub fn unsubscribe(&mut self, name: &str, id: Option<CallbackId>) -> Result<(), Error> {
        let action = self
            .get_mut(name)
            .ok_or_else(|| Error::UnknownAction(name.to_string()))?;
        action.remove_callback(id);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Action> {
        self.index.get(name).map(|&idx| &self.actions[idx])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Action> {
        self.index.get(name).map(|&idx| &mut self.actions[idx])
    }

    /// Registered actions in insertion order
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub(crate) fn actions_mut(&mut self) -> &mut [Action] {
        &mut self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Drop all registered actions
    pub fn reset(&mut self) {
        self.actions.clear();
        self.index.clear();
    }
}
