//! Keymap loading tests
//!
//! Covers the JSON bulk-load format, YAML keymap files and strict
//! options parsing.

use std::io::Write;

use keychord::{Error, Options, Shortcut};

// ========================================================================
// JSON bulk load
// ========================================================================

#[test]
fn test_load_registers_all_entries() {
    let mut engine = Shortcut::default();
    engine
        .load_from_json(
            r#"[
                { "action": "openWindow", "combo": "ctrl a" },
                { "action": "closeWindow", "combo": "ctrl shift w" },
                { "action": "saveAll", "combo": "cmd shift s" }
            ]"#,
            None,
        )
        .unwrap();

    assert_eq!(engine.actions().len(), 3);
    let names: Vec<&str> = engine.actions().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["openWindow", "closeWindow", "saveAll"]);
}

#[test]
fn test_load_accepts_options() {
    let mut engine = Shortcut::default();
    engine
        .load_from_json(
            r#"[{ "action": "open", "combo": "ctrl a" }]"#,
            Some(Options::new().prevent_default(true)),
        )
        .unwrap();

    assert!(engine.options().prevent_default);
    assert!(engine.is_initialized());
}

#[test]
fn test_load_rejects_missing_fields() {
    let mut engine = Shortcut::default();
    let err = engine
        .load_from_json(r#"[{ "action": "open" }]"#, None)
        .unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!(engine.actions().is_empty());
}

#[test]
fn test_load_rejects_non_array_document() {
    let mut engine = Shortcut::default();
    let err = engine.load_from_json(r#""ctrl a""#, None).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_load_error_mentions_unknown_key() {
    let mut engine = Shortcut::default();
    let err = engine
        .load_from_json(r#"[{ "action": "open", "combo": "hyper a" }]"#, None)
        .unwrap_err();
    assert_eq!(err, Error::UnknownKey("hyper".to_string()));
}

// ========================================================================
// Keymap files
// ========================================================================

#[test]
fn test_load_yaml_keymap_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "- action: openWindow\n  combo: ctrl a\n- action: saveAll\n  combo: cmd s"
    )
    .unwrap();

    let mut engine = Shortcut::default();
    engine.load_from_file(file.path(), None).unwrap();
    assert_eq!(engine.actions().len(), 2);
    assert_eq!(engine.actions()[1].name, "saveAll");
}

#[test]
fn test_load_json_keymap_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"[{{ "action": "open", "combo": "ctrl a" }}]"#).unwrap();

    let mut engine = Shortcut::default();
    engine.load_from_file(file.path(), None).unwrap();
    assert_eq!(engine.actions().len(), 1);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let mut engine = Shortcut::default();
    let err = engine
        .load_from_file(std::path::Path::new("/no/such/keymap.json"), None)
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

// ========================================================================
// Options documents
// ========================================================================

#[test]
fn test_options_from_json_full_document() {
    let options =
        Options::from_json(r#"{"debug": true, "preventDefault": true, "onlyStateCombos": false}"#)
            .unwrap();
    assert!(options.debug);
    assert!(options.prevent_default);
    assert!(!options.only_state_combos);
}

#[test]
fn test_options_unknown_key_fails_construction() {
    let err = Options::from_json(r#"{"debug": true, "verbose": true}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidOption(_)));
}
