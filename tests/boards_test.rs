//! Board store integration tests
//!
//! Covers the get-or-create-with-touch contract: first access creates with
//! equal timestamps, repeated access bumps only `last_accessed_at`, and the
//! pure lookup never touches.

mod common;

use common::TestDatabase;
use inkboard::backend::boards::db;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_first_access_creates_board_with_equal_timestamps() {
    let db = TestDatabase::new().await;

    let board = db::get_or_create_board(db.pool(), "alpha", 1_000).await.unwrap();

    assert_eq!(board.id, "alpha");
    assert_eq!(board.created_at, 1_000);
    assert_eq!(board.last_accessed_at, 1_000);
}

#[tokio::test]
async fn test_repeated_access_touches_but_preserves_identity() {
    let db = TestDatabase::new().await;

    let created = db::get_or_create_board(db.pool(), "alpha", 1_000).await.unwrap();
    let touched = db::get_or_create_board(db.pool(), "alpha", 5_000).await.unwrap();
    let touched_again = db::get_or_create_board(db.pool(), "alpha", 9_000).await.unwrap();

    assert_eq!(touched.id, created.id);
    assert_eq!(touched.created_at, created.created_at);
    assert_eq!(touched.last_accessed_at, 5_000);
    assert_eq!(touched_again.last_accessed_at, 9_000);

    // The touch is persisted, not just reflected in the return value
    let stored = db::get_board(db.pool(), "alpha").await.unwrap().unwrap();
    assert_eq!(stored.created_at, 1_000);
    assert_eq!(stored.last_accessed_at, 9_000);
}

#[tokio::test]
async fn test_last_accessed_at_never_below_created_at() {
    let db = TestDatabase::new().await;

    let board = db::get_or_create_board(db.pool(), "alpha", 1_000).await.unwrap();
    assert!(board.last_accessed_at >= board.created_at);

    let touched = db::get_or_create_board(db.pool(), "alpha", 2_000).await.unwrap();
    assert!(touched.last_accessed_at >= touched.created_at);
}

#[tokio::test]
async fn test_get_board_absent_returns_none() {
    let db = TestDatabase::new().await;

    let board = db::get_board(db.pool(), "never-seen").await.unwrap();
    assert!(board.is_none());
}

#[tokio::test]
async fn test_get_board_does_not_touch() {
    let db = TestDatabase::new().await;

    db::get_or_create_board(db.pool(), "alpha", 1_000).await.unwrap();

    // Pure lookups, regardless of how many
    for _ in 0..3 {
        let board = db::get_board(db.pool(), "alpha").await.unwrap().unwrap();
        assert_eq!(board.last_accessed_at, 1_000);
    }
}

#[tokio::test]
async fn test_distinct_slugs_are_distinct_boards() {
    let db = TestDatabase::new().await;

    db::get_or_create_board(db.pool(), "alpha", 1_000).await.unwrap();
    db::get_or_create_board(db.pool(), "beta", 2_000).await.unwrap();

    let alpha = db::get_board(db.pool(), "alpha").await.unwrap().unwrap();
    let beta = db::get_board(db.pool(), "beta").await.unwrap().unwrap();

    assert_eq!(alpha.created_at, 1_000);
    assert_eq!(beta.created_at, 2_000);
}
