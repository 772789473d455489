//! Keychord - keyboard shortcut engine
//!
//! This crate binds symbolic actions to keyboard chord strings
//! ("ctrl a"), tracks the keys currently held from a stream of raw key
//! events, and fires subscriber callbacks exactly once when the live
//! combo equals a registered one.
//!
//! # Architecture
//!
//! ```text
//! chord string → KeyTable → KeyCombo                       (registration)
//! host KeyEvent → ComboTracker → dispatch() → callbacks    (runtime)
//! ```
//!
//! # Usage
//!
//! ```
//! use keychord::{KeyEvent, Modifiers, Shortcut};
//!
//! let mut engine = Shortcut::default();
//! engine
//!     .load_from_json(r#"[{ "action": "open", "combo": "ctrl a" }]"#, None)
//!     .unwrap();
//! engine.subscribe("open", |_ev| println!("open!")).unwrap();
//!
//! // Host key events: ctrl down, then 'a' down
//! engine.process_event(&KeyEvent::with_modifiers(17, Modifiers::CTRL));
//! let outcome = engine.process_event(&KeyEvent::with_modifiers(65, Modifiers::CTRL));
//! assert!(outcome.fired());
//!
//! // Any key-up resets the live combo
//! engine.clean_combo();
//! ```

pub mod action;
pub mod combo;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod event;
pub mod key_table;
pub mod options;
pub mod registry;
pub mod tracker;

// Re-export commonly used types
pub use action::{Action, Callback, CallbackId};
pub use combo::{KeyCombo, Modifiers};
pub use config::ComboEntry;
pub use dispatch::Outcome;
pub use engine::Shortcut;
pub use error::Error;
pub use event::KeyEvent;
pub use key_table::{KeyCode, KeyTable, Modifier, Platform};
pub use options::Options;
pub use registry::ActionRegistry;
pub use tracker::ComboTracker;
