//! Named actions and their subscriber callbacks

use std::fmt;

use crate::combo::KeyCombo;
use crate::event::KeyEvent;

/// Subscriber callback invoked with the triggering event
pub type Callback = Box<dyn FnMut(&KeyEvent)>;

/// Handle identifying one subscription, for targeted unsubscribe.
///
/// Closures have no identity in Rust, so subscription hands back a token
/// instead of comparing function references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackId(u64);

/// A named combo with zero or more subscriber callbacks
pub struct Action {
    pub name: String,
    pub combo: KeyCombo,
    callbacks: Vec<(CallbackId, Callback)>,
    next_id: u64,
}

impl Action {
    pub fn new(name: impl Into<String>, combo: KeyCombo) -> Self {
        Self {
            name: name.into(),
            combo,
            callbacks: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback; the returned id can be passed to
    /// [`Action::remove_callback`]
    pub fn add_callback(&mut self, cb: Callback) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, cb));
        id
    }

    /// Remove one callback by id, or all of them when `id` is `None`
    pub fn remove_callback(&mut self, id: Option<CallbackId>) {
        match id {
            Some(id) => self.callbacks.retain(|(cid, _)| *cid != id),
            None => self.callbacks.clear(),
        }
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Invoke every callback with the triggering event
    pub(crate) fn fire(&mut self, ev: &KeyEvent) {
        for (_, cb) in &mut self.callbacks {
            cb(ev);
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("combo", &self.combo)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_fire_invokes_all_callbacks() {
        let mut action = Action::new("open", KeyCombo::new());
        let count = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let count = Rc::clone(&count);
            action.add_callback(Box::new(move |_| count.set(count.get() + 1)));
        }

        action.fire(&KeyEvent::new(65));
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_remove_single_callback() {
        let mut action = Action::new("open", KeyCombo::new());
        let hits = Rc::new(Cell::new(0));

        let keep = Rc::clone(&hits);
        action.add_callback(Box::new(move |_| keep.set(keep.get() + 1)));
        let drop_me = Rc::clone(&hits);
        let id = action.add_callback(Box::new(move |_| drop_me.set(drop_me.get() + 10)));

        action.remove_callback(Some(id));
        action.fire(&KeyEvent::new(65));
        assert_eq!(hits.get(), 1);
        assert_eq!(action.callback_count(), 1);
    }

    #[test]
    fn test_remove_all_callbacks() {
        let mut action = Action::new("open", KeyCombo::new());
        action.add_callback(Box::new(|_| {}));
        action.add_callback(Box::new(|_| {}));

        action.remove_callback(None);
        assert_eq!(action.callback_count(), 0);
    }
}
