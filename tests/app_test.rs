//! Tests for command dispatch against card files.

use goal_bingo::{App, CardStore, Command, Settings};
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory and a seeded app. The directory handle must
/// stay in scope to keep the files alive.
fn setup() -> (TempDir, App, CardStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let settings = Settings::from_toml("default_grid_size = 3\nseed = 7\ncell_width = 6\n")
        .expect("Valid settings");
    let store = CardStore::new(dir.path().join("card.json"));
    (dir, App::new(settings), store)
}

fn new_card() -> Command {
    Command::New {
        size: None,
        header: None,
        no_free: false,
        force: false,
    }
}

fn fill(app: &mut App, store: &CardStore, count: usize) {
    for i in 0..count {
        app.execute(
            store,
            Command::Add {
                content: format!("Goal {}", i),
                position: None,
            },
        )
        .expect("Add failed");
    }
}

#[test]
fn test_new_card_uses_settings() {
    let (_dir, mut app, store) = setup();
    let output = app.execute(&store, new_card()).expect("New failed");
    assert!(output.contains("FREE"));

    let card = store.load().expect("Load failed");
    assert_eq!(card.config.grid_size().side(), 3);
    assert_eq!(card.config.header_text(), "BIN");
    assert_eq!(card.config.free_space_position().map(|p| p.index()), Some(4));
}

#[test]
fn test_new_card_refuses_overwrite() {
    let (_dir, mut app, store) = setup();
    app.execute(&store, new_card()).expect("New failed");
    assert!(app.execute(&store, new_card()).is_err());

    let forced = Command::New {
        size: Some(2),
        header: Some("ok".to_string()),
        no_free: true,
        force: true,
    };
    app.execute(&store, forced).expect("Forced new failed");
    let card = store.load().expect("Load failed");
    assert_eq!(card.config.header_text(), "OK");
    assert!(!card.config.has_free_space());
}

#[test]
fn test_fill_finalize_and_complete() {
    let (_dir, mut app, store) = setup();
    app.execute(&store, new_card()).expect("New failed");
    fill(&mut app, &store, 8);

    let output = app.execute(&store, Command::Finalize).expect("Finalize failed");
    assert!(output.contains("finalized"));
    assert!(app.execute(&store, Command::Shuffle).is_err());
    assert!(app.execute(&store, Command::DisableFree).is_err());

    for position in [0, 8] {
        app.execute(&store, Command::Complete { position, undo: false })
            .expect("Complete failed");
    }
    let output = app.execute(&store, Command::Bingos).expect("Bingos failed");
    assert!(output.contains("diagonal 0"), "{output}");
}

#[test]
fn test_finalize_partial_card_fails() {
    let (_dir, mut app, store) = setup();
    app.execute(&store, new_card()).expect("New failed");
    fill(&mut app, &store, 3);

    let err = app.execute(&store, Command::Finalize).unwrap_err();
    assert!(err.to_string().contains("needs 8 items"));
    assert!(!store.load().expect("Load failed").config.is_finalized());
}

#[test]
fn test_card_full_leaves_file_unchanged() {
    let (_dir, mut app, store) = setup();
    app.execute(&store, new_card()).expect("New failed");
    fill(&mut app, &store, 8);
    let before = store.load().expect("Load failed");

    let err = app
        .execute(&store, Command::MoveFree { position: 0 })
        .unwrap_err();
    assert!(err.to_string().contains("remove an item"));
    assert_eq!(store.load().expect("Load failed"), before);
}

#[test]
fn test_clone_to_smaller_card_reports_truncation() {
    let (dir, mut app, store) = setup();
    app.execute(&store, new_card()).expect("New failed");
    fill(&mut app, &store, 8);

    let out: PathBuf = dir.path().join("copy.json");
    let output = app
        .execute(
            &store,
            Command::CloneCard {
                out: out.clone(),
                size: Some(2),
                no_free: false,
            },
        )
        .expect("Clone failed");
    assert!(output.contains("Only 3 of 8 goals fit"));

    let copy = CardStore::new(out).load().expect("Load copy failed");
    assert_eq!(copy.items.len(), 3);
    assert!(copy.items.iter().all(|i| !i.is_completed()));
}

#[test]
fn test_corrupt_card_file_is_rejected() {
    let (dir, mut app, store) = setup();
    let path = dir.path().join("card.json");
    std::fs::write(
        &path,
        r#"{"config":{"grid_size":9,"header_text":"X","free_space":"disabled"},"items":[]}"#,
    )
    .expect("Write failed");
    assert!(app.execute(&store, Command::Show).is_err());
}

#[test]
fn test_card_file_with_blank_goal_is_rejected() {
    let (dir, mut app, store) = setup();
    std::fs::write(
        dir.path().join("card.json"),
        r#"{"config":{"grid_size":2,"header_text":"BI","free_space":"disabled"},
            "items":[{"position":0,"content":"   "}]}"#,
    )
    .expect("Write failed");
    assert!(store.load().is_err());
    assert!(app.execute(&store, Command::Finalize).is_err());
}
