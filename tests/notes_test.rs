//! Note store integration tests
//!
//! Covers note CRUD including the partial-update contract: fields absent
//! from a patch stay untouched, provided fields match the patch exactly.

mod common;

use common::TestDatabase;
use inkboard::backend::notes::db;
use inkboard::shared::NotePatch;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_create_and_list_note() {
    let db = TestDatabase::new().await;

    let note = db::create_note(db.pool(), "alpha", "hi", 10.0, 20.0, "yellow", 1_000)
        .await
        .unwrap();

    assert_eq!(note.board_id, "alpha");
    assert_eq!(note.created_at, 1_000);

    let notes = db::list_notes(db.pool(), "alpha").await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0], note);
}

#[tokio::test]
async fn test_list_scoped_to_board() {
    let db = TestDatabase::new().await;

    db::create_note(db.pool(), "alpha", "a", 0.0, 0.0, "yellow", 1_000).await.unwrap();
    db::create_note(db.pool(), "beta", "b", 0.0, 0.0, "pink", 1_000).await.unwrap();

    let alpha_notes = db::list_notes(db.pool(), "alpha").await.unwrap();
    assert_eq!(alpha_notes.len(), 1);
    assert_eq!(alpha_notes[0].text, "a");

    let empty = db::list_notes(db.pool(), "gamma").await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields_unchanged() {
    let db = TestDatabase::new().await;

    let note = db::create_note(db.pool(), "alpha", "hi", 10.0, 20.0, "yellow", 1_000)
        .await
        .unwrap();

    let patch = NotePatch {
        x: Some(30.0),
        ..Default::default()
    };
    let updated = db::update_note(db.pool(), &note.id, &patch).await.unwrap().unwrap();

    assert_eq!(updated.x, 30.0);
    assert_eq!(updated.text, "hi");
    assert_eq!(updated.y, 20.0);
    assert_eq!(updated.color, "yellow");
    assert_eq!(updated.created_at, 1_000);
}

#[tokio::test]
async fn test_full_patch_updates_all_fields() {
    let db = TestDatabase::new().await;

    let note = db::create_note(db.pool(), "alpha", "hi", 10.0, 20.0, "yellow", 1_000)
        .await
        .unwrap();

    let patch = NotePatch {
        text: Some("bye".to_string()),
        x: Some(1.0),
        y: Some(2.0),
        color: Some("pink".to_string()),
    };
    let updated = db::update_note(db.pool(), &note.id, &patch).await.unwrap().unwrap();

    assert_eq!(updated.text, "bye");
    assert_eq!(updated.x, 1.0);
    assert_eq!(updated.y, 2.0);
    assert_eq!(updated.color, "pink");
    // Identity and creation time survive any patch
    assert_eq!(updated.id, note.id);
    assert_eq!(updated.created_at, note.created_at);
}

#[tokio::test]
async fn test_empty_patch_is_a_no_op() {
    let db = TestDatabase::new().await;

    let note = db::create_note(db.pool(), "alpha", "hi", 10.0, 20.0, "yellow", 1_000)
        .await
        .unwrap();

    let updated = db::update_note(db.pool(), &note.id, &NotePatch::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated, note);
}

#[tokio::test]
async fn test_update_missing_note_returns_none() {
    let db = TestDatabase::new().await;

    let patch = NotePatch {
        text: Some("bye".to_string()),
        ..Default::default()
    };
    let result = db::update_note(db.pool(), "no-such-id", &patch).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_note() {
    let db = TestDatabase::new().await;

    let note = db::create_note(db.pool(), "alpha", "hi", 10.0, 20.0, "yellow", 1_000)
        .await
        .unwrap();

    let deleted = db::delete_note(db.pool(), &note.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, note.id);

    let notes = db::list_notes(db.pool(), "alpha").await.unwrap();
    assert!(notes.is_empty());

    // Second delete misses
    let missing = db::delete_note(db.pool(), &note.id).await.unwrap();
    assert!(missing.is_none());
}

/// The scripted note scenario: create board "alpha", add a note, patch x,
/// delete it.
#[tokio::test]
async fn test_note_lifecycle_scenario() {
    let db = TestDatabase::new().await;

    let board = inkboard::backend::boards::db::get_or_create_board(db.pool(), "alpha", 1_000)
        .await
        .unwrap();
    assert_eq!(board.created_at, board.last_accessed_at);

    let note = db::create_note(db.pool(), "alpha", "hi", 10.0, 20.0, "yellow", 2_000)
        .await
        .unwrap();

    let notes = db::list_notes(db.pool(), "alpha").await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].text, "hi");
    assert_eq!(notes[0].x, 10.0);
    assert_eq!(notes[0].y, 20.0);
    assert_eq!(notes[0].color, "yellow");

    let patch = NotePatch {
        x: Some(30.0),
        ..Default::default()
    };
    let updated = db::update_note(db.pool(), &note.id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.x, 30.0);
    assert_eq!(updated.text, "hi");

    db::delete_note(db.pool(), &note.id).await.unwrap().unwrap();
    assert!(db::list_notes(db.pool(), "alpha").await.unwrap().is_empty());
}
