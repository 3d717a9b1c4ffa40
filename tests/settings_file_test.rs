//! Settings persisted in a JSON file and picked up by a session.

use std::fs;

use serde_json::json;
use tempfile::tempdir;

use tui_snake::core::Session;
use tui_snake::settings::{Bindings, JsonFileStore, Settings, SettingsStore};
use tui_snake::types::{Action, Difficulty, InputCode};

#[test]
fn test_file_settings_drive_a_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tui-snake.json");
    let doc = json!({
        "difficulty": "H",
        "showFPS": true,
        "keyUp": 87,
        "keyDown": "83",
        "keyLeft": 65,
        "keyRight": 68
    });
    fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    let settings = Settings::load(&store);
    assert_eq!(settings.difficulty, Difficulty::Hard);
    assert!(settings.show_fps);
    assert_eq!(settings.move_interval_ms(), 20);

    let mut session = Session::new(settings, 9);
    assert_eq!(session.key_down(InputCode(87)), Some(Action::Up));
    assert_eq!(session.key_down(InputCode::ARROW_UP), None);
    assert_eq!(session.game().config().move_interval_ms, 20);
    assert!(session.game().config().show_fps);
}

#[test]
fn test_save_then_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    let settings = Settings {
        difficulty: Difficulty::Easy,
        show_fps: true,
        ..Settings::default()
    };
    settings.save(&mut store);
    store.flush().unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("difficulty").as_deref(), Some("E"));
    assert_eq!(Settings::load(&reopened), settings);
}

#[test]
fn test_broken_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(Settings::load(&store), Settings::default());
}

#[test]
fn test_conflicting_bindings_revert_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        json!({ "difficulty": "E", "keyUp": 40, "keyDown": 40 }).to_string(),
    )
    .unwrap();

    let settings = Settings::load(&JsonFileStore::open(&path).unwrap());
    assert_eq!(settings.difficulty, Difficulty::Easy);
    assert_eq!(settings.bindings, Bindings::default());
}

#[test]
fn test_live_settings_change_keeps_round() {
    let mut session = Session::new(Settings::default(), 5);
    session.frame(0);
    session.frame(1000);

    session.apply_settings(Settings {
        difficulty: Difficulty::Hard,
        ..Settings::default()
    });
    assert_eq!(session.round(), 1);
    assert_eq!(session.game().snake().move_interval_ms(), 20);
}
