#![allow(clippy::float_cmp)]

use super::*;
use crate::stroke::Stroke;

fn doc() -> StaticDocument {
    StaticDocument::uniform(3, PageSize { width: 800.0, height: 600.0 })
}

fn viewport() -> ViewportState {
    let mut vp = ViewportState::new();
    vp.page_count = 3;
    vp.base_scale = 1.0;
    vp
}

fn store_with_stroke(page: u32) -> DrawingStore {
    let mut store = DrawingStore::new();
    let mut s = Stroke::draw(Point::new(0.0, 0.0));
    s.push(Point::new(0.5, 0.5));
    store.commit(page, s);
    store
}

// --- render_page ---

#[test]
fn scene_size_is_page_size_times_total_scale() {
    let mut vp = viewport();
    vp.gesture_zoom = 2.0;
    let scene = render_page(&doc(), &vp, &DrawingStore::new(), None)
        .unwrap()
        .unwrap();
    assert_eq!(scene.page, 1);
    assert_eq!(scene.width_px, 1600.0);
    assert_eq!(scene.height_px, 1200.0);
}

#[test]
fn scene_carries_the_zoom_readout() {
    // Default base scale 1.5 is the 100% reference.
    let mut vp = ViewportState::new();
    vp.page_count = 3;
    assert_eq!(
        render_page(&doc(), &vp, &DrawingStore::new(), None).unwrap().unwrap().zoom_percent,
        100
    );

    vp.gesture_zoom = 2.0;
    assert_eq!(
        render_page(&doc(), &vp, &DrawingStore::new(), None).unwrap().unwrap().zoom_percent,
        200
    );
}

#[test]
fn out_of_range_page_is_dropped_silently() {
    let mut vp = viewport();
    vp.current_page = 9;
    let result = render_page(&doc(), &vp, &DrawingStore::new(), None).unwrap();
    assert!(result.is_none());
}

#[test]
fn failed_geometry_query_is_an_error() {
    struct BrokenDoc;

    impl PageSource for BrokenDoc {
        fn page_count(&self) -> u32 {
            3
        }

        fn page_size(&self, _page: u32) -> Result<PageSize, RenderError> {
            Err(RenderError::DocumentUnavailable)
        }
    }

    let err = render_page(&BrokenDoc, &viewport(), &DrawingStore::new(), None);
    assert!(matches!(err, Err(RenderError::DocumentUnavailable)));
}

#[test]
fn scene_repaints_committed_strokes_in_pixels() {
    let vp = viewport();
    let store = store_with_stroke(1);
    let scene = render_page(&doc(), &vp, &store, None).unwrap().unwrap();

    assert_eq!(scene.ops.len(), 1);
    let op = &scene.ops[0];
    assert_eq!(op.composite, Composite::SourceOver);
    assert_eq!(op.path, vec![(0.0, 0.0), (400.0, 300.0)]);
}

#[test]
fn scene_only_includes_current_page_strokes() {
    let vp = viewport();
    let store = store_with_stroke(2);
    let scene = render_page(&doc(), &vp, &store, None).unwrap().unwrap();
    assert!(scene.ops.is_empty());
}

// --- overlay_ops ---

#[test]
fn erase_strokes_composite_as_cutout() {
    let mut store = DrawingStore::new();
    let mut s = Stroke::erase(Point::new(0.1, 0.1));
    s.push(Point::new(0.2, 0.2));
    store.commit(1, s);

    let ops = overlay_ops(&store, 1, 100.0, 100.0, None);
    assert_eq!(ops[0].composite, Composite::DestinationOut);
    assert_eq!(ops[0].color, None);
    assert_eq!(ops[0].width, 50.0);
}

#[test]
fn move_offset_translates_ops_without_touching_the_store() {
    let store = store_with_stroke(1);
    let ops = overlay_ops(&store, 1, 100.0, 100.0, Some((0.1, 0.2)));
    assert_eq!(ops[0].path[0], (10.0, 20.0));
    // Stored coordinates are untouched by the preview.
    assert_eq!(store.strokes(1)[0].points[0], Point::new(0.0, 0.0));
}

#[test]
fn ops_preserve_commit_order() {
    let mut store = DrawingStore::new();
    let mut a = Stroke::draw(Point::new(0.0, 0.0));
    a.push(Point::new(0.1, 0.1));
    let mut b = Stroke::erase(Point::new(0.5, 0.5));
    b.push(Point::new(0.6, 0.6));
    store.commit(1, a);
    store.commit(1, b);

    let ops = overlay_ops(&store, 1, 100.0, 100.0, None);
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0].composite, Composite::SourceOver);
    assert_eq!(ops[1].composite, Composite::DestinationOut);
}

// --- segment_op ---

#[test]
fn segment_op_scales_to_canvas_pixels() {
    let op = segment_op(
        StrokeKind::Draw,
        Point::new(0.25, 0.25),
        Point::new(0.5, 0.5),
        Some("#ff0000".to_owned()),
        3.0,
        200.0,
        100.0,
    );
    assert_eq!(op.path, vec![(50.0, 25.0), (100.0, 50.0)]);
    assert_eq!(op.composite, Composite::SourceOver);
}

// --- base scale & scroll anchoring ---

#[test]
fn base_scale_fits_container_width() {
    assert_eq!(base_scale_for(&doc(), 1, 1600.0), 2.0);
    assert_eq!(base_scale_for(&doc(), 1, 400.0), 0.5);
}

#[test]
fn base_scale_falls_back_to_one_on_failure() {
    assert_eq!(base_scale_for(&StaticDocument::unavailable(), 1, 1600.0), 1.0);
    assert_eq!(base_scale_for(&doc(), 99, 1600.0), 1.0);
}

#[test]
fn zoom_scroll_delta_weights_by_center() {
    let (dx, dy) = zoom_scroll_delta((800.0, 600.0), (1600.0, 1200.0), Point::new(0.5, 0.25));
    assert_eq!(dx, 400.0);
    assert_eq!(dy, 150.0);
}

#[test]
fn zoom_scroll_delta_is_negative_when_shrinking() {
    let (dx, dy) = zoom_scroll_delta((1600.0, 1200.0), (800.0, 600.0), Point::new(1.0, 1.0));
    assert_eq!(dx, -800.0);
    assert_eq!(dy, -600.0);
}

// --- StaticDocument ---

#[test]
fn static_document_reports_count_and_sizes() {
    let d = doc();
    assert_eq!(d.page_count(), 3);
    assert_eq!(d.page_size(3).unwrap(), PageSize { width: 800.0, height: 600.0 });
    assert!(matches!(d.page_size(4), Err(RenderError::Page { page: 4, .. })));
}

#[test]
fn unavailable_document_reports_zero_pages() {
    let d = StaticDocument::unavailable();
    assert_eq!(d.page_count(), 0);
    assert!(matches!(d.page_size(1), Err(RenderError::DocumentUnavailable)));
}
