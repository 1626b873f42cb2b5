#![allow(clippy::float_cmp)]

use super::*;

fn two_point_draw() -> Stroke {
    let mut s = Stroke::draw(Point::new(0.1, 0.1));
    s.push(Point::new(0.2, 0.2));
    s
}

// --- Stroke ---

#[test]
fn draw_stroke_has_default_color_and_width() {
    let s = Stroke::draw(Point::new(0.5, 0.5));
    assert_eq!(s.kind, StrokeKind::Draw);
    assert_eq!(s.color.as_deref(), Some("#ff0000"));
    assert_eq!(s.width, 3.0);
    assert_eq!(s.points.len(), 1);
}

#[test]
fn erase_stroke_has_no_color_and_wide_width() {
    let s = Stroke::erase(Point::new(0.5, 0.5));
    assert_eq!(s.kind, StrokeKind::Erase);
    assert_eq!(s.color, None);
    assert_eq!(s.width, 50.0);
}

#[test]
fn single_point_stroke_is_not_committable() {
    let s = Stroke::draw(Point::new(0.5, 0.5));
    assert!(!s.is_committable());
    assert_eq!(s.last_segment(), None);
}

#[test]
fn last_segment_returns_newest_pair() {
    let mut s = two_point_draw();
    s.push(Point::new(0.3, 0.3));
    let (from, to) = s.last_segment().unwrap();
    assert_eq!(from, Point::new(0.2, 0.2));
    assert_eq!(to, Point::new(0.3, 0.3));
}

#[test]
fn stroke_points_keep_insertion_order() {
    let mut s = Stroke::draw(Point::new(0.0, 0.0));
    s.push(Point::new(0.5, 0.0));
    s.push(Point::new(0.1, 0.0));
    let xs: Vec<f64> = s.points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 0.5, 0.1]);
}

#[test]
fn stroke_serde_omits_absent_color() {
    let s = Stroke::erase(Point::new(0.5, 0.5));
    let json = serde_json::to_string(&s).unwrap();
    assert!(!json.contains("color"));
    assert!(json.contains("\"erase\""));
}

// --- DrawingStore ---

#[test]
fn commit_refuses_single_point_strokes() {
    let mut store = DrawingStore::new();
    let committed = store.commit(1, Stroke::draw(Point::new(0.5, 0.5)));
    assert!(!committed);
    assert!(store.strokes(1).is_empty());
    assert!(store.is_empty());
}

#[test]
fn commit_stores_strokes_per_page() {
    let mut store = DrawingStore::new();
    assert!(store.commit(1, two_point_draw()));
    assert!(store.commit(2, two_point_draw()));
    assert_eq!(store.strokes(1).len(), 1);
    assert_eq!(store.strokes(2).len(), 1);
}

#[test]
fn absent_page_has_no_strokes() {
    let store = DrawingStore::new();
    assert!(store.strokes(7).is_empty());
}

#[test]
fn clear_page_leaves_other_pages_alone() {
    let mut store = DrawingStore::new();
    store.commit(1, two_point_draw());
    store.commit(2, two_point_draw());
    store.clear_page(2);
    assert_eq!(store.strokes(1).len(), 1);
    assert!(store.strokes(2).is_empty());
}

#[test]
fn translate_page_shifts_every_point() {
    let mut store = DrawingStore::new();
    store.commit(1, two_point_draw());
    store.commit(1, two_point_draw());
    store.translate_page(1, 0.3, 0.3);
    for stroke in store.strokes(1) {
        assert_eq!(stroke.points[0].x, 0.1 + 0.3);
        assert_eq!(stroke.points[1].y, 0.2 + 0.3);
    }
}

#[test]
fn translate_missing_page_is_a_noop() {
    let mut store = DrawingStore::new();
    store.translate_page(9, 0.5, 0.5);
    assert!(store.is_empty());
}

// --- MoveTransaction ---

#[test]
fn move_transaction_starts_with_zero_offset() {
    let txn = MoveTransaction::new(Point::new(0.2, 0.2));
    assert_eq!(txn.offset, (0.0, 0.0));
}

#[test]
fn move_transaction_offset_is_current_minus_start() {
    let mut txn = MoveTransaction::new(Point::new(0.2, 0.2));
    txn.update(Point::new(0.5, 0.5));
    let (dx, dy) = txn.offset;
    assert!((dx - 0.3).abs() < 1e-12);
    assert!((dy - 0.3).abs() < 1e-12);
}

#[test]
fn move_transaction_offset_tracks_latest_update() {
    let mut txn = MoveTransaction::new(Point::new(0.5, 0.5));
    txn.update(Point::new(0.9, 0.9));
    txn.update(Point::new(0.4, 0.4));
    let (dx, dy) = txn.offset;
    assert!((dx + 0.1).abs() < 1e-12);
    assert!((dy + 0.1).abs() < 1e-12);
}
