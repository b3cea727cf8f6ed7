//! Viewport transform properties.

use crate::helpers::{assert_close, pt};
use layerboard::constants::{MAX_SCALE, MIN_SCALE};
use layerboard::Viewport;

fn viewport(scale: f64, x: f64, y: f64) -> Viewport {
    Viewport {
        scale,
        offset_x: x,
        offset_y: y,
    }
}

#[test]
fn test_screen_logical_round_trip() {
    let vp = viewport(1.75, -40.0, 25.0);
    let logical = pt(123.0, -8.5);
    let back = vp.to_logical(vp.to_screen(logical));
    assert_close(back.x, logical.x);
    assert_close(back.y, logical.y);
}

#[test]
fn test_zoom_keeps_anchor_fixed_across_scales() {
    let anchor = pt(320.0, 180.0);
    for scale in [0.3, 0.5, 1.0, 1.3, 2.4, 2.5] {
        for delta in [-0.5, -0.1, 0.1, 0.5] {
            let vp = viewport(scale, 35.0, -60.0);
            let before = vp.to_logical(anchor);
            let zoomed = vp.zoom_at(delta, Some(anchor));
            let after = zoomed.to_logical(anchor);

            assert!(zoomed.scale >= MIN_SCALE && zoomed.scale <= MAX_SCALE);
            assert_close(after.x, before.x);
            assert_close(after.y, before.y);
        }
    }
}

#[test]
fn test_unanchored_zoom_keeps_offset() {
    let vp = viewport(1.0, 12.0, 34.0);
    let zoomed = vp.zoom_at(0.5, None);
    assert_close(zoomed.scale, 1.5);
    assert_eq!(zoomed.offset(), pt(12.0, 34.0));
}

#[test]
fn test_zoom_clamps_to_range() {
    let vp = Viewport::reset();
    assert_eq!(vp.zoom_at(10.0, None).scale, MAX_SCALE);
    assert_eq!(vp.zoom_at(-10.0, Some(pt(5.0, 5.0))).scale, MIN_SCALE);
}

#[test]
fn test_pan_ignores_scale() {
    let vp = viewport(2.0, 10.0, 10.0);
    let panned = vp.panned_by(pt(30.0, -20.0));
    assert_eq!(panned.offset(), pt(40.0, -10.0));
    assert_eq!(panned.scale, 2.0);
}
