//! Drawing store integration tests
//!
//! Covers stroke creation (point order preserved), listing scoped to a
//! board, and deletion.

mod common;

use common::TestDatabase;
use inkboard::backend::drawings::db;
use inkboard::shared::Point;
use pretty_assertions::assert_eq;

fn three_points() -> Vec<Point> {
    vec![
        Point { x: 0.0, y: 0.0 },
        Point { x: 5.5, y: 3.25 },
        Point { x: 10.0, y: -2.0 },
    ]
}

#[tokio::test]
async fn test_create_and_list_preserves_points_in_order() {
    let db = TestDatabase::new().await;

    let drawing = db::create_drawing(db.pool(), "alpha", three_points(), "#000000", 2.0, 1_000)
        .await
        .unwrap();

    assert_eq!(drawing.points, three_points());
    assert_eq!(drawing.color, "#000000");
    assert_eq!(drawing.stroke_width, 2.0);

    let drawings = db::list_drawings(db.pool(), "alpha").await.unwrap();
    assert_eq!(drawings.len(), 1);
    assert_eq!(drawings[0], drawing);
    assert_eq!(drawings[0].points, three_points());
}

#[tokio::test]
async fn test_list_scoped_to_board() {
    let db = TestDatabase::new().await;

    db::create_drawing(db.pool(), "alpha", three_points(), "#000000", 2.0, 1_000)
        .await
        .unwrap();
    db::create_drawing(db.pool(), "beta", three_points(), "#ff0000", 4.0, 1_000)
        .await
        .unwrap();

    let alpha = db::list_drawings(db.pool(), "alpha").await.unwrap();
    assert_eq!(alpha.len(), 1);
    assert_eq!(alpha[0].color, "#000000");

    assert!(db::list_drawings(db.pool(), "gamma").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_drawing() {
    let db = TestDatabase::new().await;

    let drawing = db::create_drawing(db.pool(), "alpha", three_points(), "#000000", 2.0, 1_000)
        .await
        .unwrap();

    let deleted = db::delete_drawing(db.pool(), &drawing.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, drawing.id);

    assert!(db::list_drawings(db.pool(), "alpha").await.unwrap().is_empty());

    // Second delete misses
    let missing = db::delete_drawing(db.pool(), &drawing.id).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_single_point_stroke_accepted() {
    // The >=2-points rule belongs to the producing client; the store
    // accepts any list.
    let db = TestDatabase::new().await;

    let drawing = db::create_drawing(
        db.pool(),
        "alpha",
        vec![Point { x: 1.0, y: 1.0 }],
        "#000000",
        2.0,
        1_000,
    )
    .await
    .unwrap();

    assert_eq!(drawing.points.len(), 1);
}
