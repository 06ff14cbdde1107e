//! Tests for loading `ActionBindings` from disk.

use std::io::Write;

use bevy::prelude::KeyCode;
use rstest::{fixture, rstest};
use stride::{ActionBindings, BindingsError};
use tempfile::NamedTempFile;

#[fixture]
fn bindings_file() -> NamedTempFile {
    NamedTempFile::new().unwrap_or_else(|e| panic!("temp file: {e}"))
}

fn write(file: &mut NamedTempFile, contents: &str) {
    file.write_all(contents.as_bytes())
        .unwrap_or_else(|e| panic!("write bindings: {e}"));
}

#[rstest]
fn remapped_keys_are_loaded(mut bindings_file: NamedTempFile) {
    write(
        &mut bindings_file,
        r#"{
            "movement": { "up": "KeyI", "down": "KeyK", "left": "KeyJ", "right": "KeyL" },
            "sprint": "ControlLeft"
        }"#,
    );

    let bindings = ActionBindings::load(bindings_file.path())
        .unwrap_or_else(|e| panic!("bindings should load: {e}"));

    assert_eq!(bindings.movement.up, KeyCode::KeyI);
    assert_eq!(bindings.sprint, KeyCode::ControlLeft);
    assert_eq!(bindings.jump, KeyCode::Space);
}

#[rstest]
fn remap_onto_an_existing_binding_is_rejected(mut bindings_file: NamedTempFile) {
    write(&mut bindings_file, r#"{ "jump": "KeyW" }"#);

    let err = ActionBindings::load(bindings_file.path()).expect_err("KeyW drives movement");
    assert!(matches!(err, BindingsError::DuplicateKey { key: KeyCode::KeyW, .. }));
}

#[test]
fn missing_file_reports_its_path() {
    let err = ActionBindings::load("does/not/exist.json").expect_err("file is absent");
    assert!(matches!(err, BindingsError::Read { .. }));
    assert!(err.to_string().contains("does/not/exist.json"));
}
