use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use stream_scroll::anchor::{AnchorId, AnchorPosition, ScrollAnchorTo, Viewport};

use crate::helpers::{FakeSurface, manager, settle};

#[test]
fn restore_follows_the_anchor_when_content_shifts_above_it() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    surface.set_scroll_top(7.5);
    mgr.on_scroll(&surface);
    assert_eq!(mgr.scrolled_to().unwrap().id, AnchorId::from("m2"));

    // Two rows of 3 inserted above the anchor move m2 from offset 6 to 12.
    surface.insert_item(0, "sys-a", 3.0);
    surface.insert_item(0, "sys-b", 3.0);
    mgr.on_frame(&mut surface, Instant::now());

    assert_eq!(surface.scroll_top(), 13.5);
    assert_eq!(mgr.scrolled_to().unwrap().id, AnchorId::from("m2"));
}

#[test]
fn redundant_restore_writes_nothing() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    surface.set_scroll_top(7.5);
    mgr.on_scroll(&surface);
    mgr.on_frame(&mut surface, Instant::now());
    let writes = surface.scroll_writes;

    mgr.reset_scroll();
    mgr.on_frame(&mut surface, Instant::now());
    assert_eq!(surface.scroll_writes, writes);
    assert_eq!(surface.scroll_top(), 7.5);
}

#[test]
fn missing_anchor_falls_back_to_the_top() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    mgr.set_scrolled_to(Some(AnchorPosition::new(AnchorId::from("gone"), 0.0)));
    mgr.on_frame(&mut surface, Instant::now());

    assert_eq!(surface.scroll_top(), 0.0);
    // The anchor itself is kept; the row may be mounted again later.
    assert_eq!(mgr.scrolled_to().unwrap().id, AnchorId::from("gone"));
}

#[test]
fn restore_landing_in_slack_snaps_to_live_edge_and_drops_anchor() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    // Target 44 is within 10 rows of max scroll 50.
    mgr.set_scrolled_to(Some(AnchorPosition::new(AnchorId::from("m14"), 2.0)));
    mgr.on_frame(&mut surface, Instant::now());

    assert_eq!(surface.scroll_top(), 50.0);
    assert_eq!(mgr.scrolled_to(), None);
}

#[test]
fn live_edge_follows_growing_content() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);
    assert_eq!(surface.scroll_top(), 50.0);

    surface.push_item("m20", 3.0);
    surface.push_item("m21", 3.0);
    surface.push_item("m22", 3.0);
    mgr.reset_scroll();
    mgr.on_frame(&mut surface, Instant::now());
    assert_eq!(surface.scroll_top(), 59.0);
}

#[test]
fn bottom_direction_restores_relative_to_the_viewport_bottom() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Bottom);
    settle(&mut mgr, &mut surface);

    surface.set_scroll_top(20.0);
    mgr.on_scroll(&surface);
    assert_eq!(mgr.scrolled_to().unwrap().id, AnchorId::from("m10"));
    mgr.on_frame(&mut surface, Instant::now());

    surface.insert_item(0, "sys-a", 3.0);
    surface.insert_item(0, "sys-b", 3.0);
    mgr.reset_scroll();
    mgr.on_frame(&mut surface, Instant::now());

    // m10 now starts at 36; its top sits at the reference line, which is the
    // viewport bottom, so scroll_top is 36 - 10.
    assert_eq!(surface.scroll_top(), 26.0);
}

#[test]
fn smooth_request_animates_and_suppresses_until_settled() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);
    assert_eq!(surface.scroll_top(), 50.0);

    let t0 = Instant::now();
    mgr.request_next_update_smooth(t0);
    mgr.set_scrolled_to(Some(AnchorPosition::new(AnchorId::from("m2"), 1.5)));
    mgr.on_frame(&mut surface, t0);

    // First frame halves the distance to the 7.5 target.
    assert_eq!(surface.scroll_top(), 28.75);
    assert!(mgr.is_suppressed());

    let mut now = t0;
    for _ in 0..20 {
        if !mgr.is_suppressed() {
            break;
        }
        now += Duration::from_millis(16);
        mgr.on_frame(&mut surface, now);
    }
    assert!(!mgr.is_suppressed());
    assert_eq!(surface.scroll_top(), 7.5);
}

#[test]
fn smooth_request_expires_after_its_window() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    let t0 = Instant::now();
    mgr.request_next_update_smooth(t0);
    mgr.set_scrolled_to(Some(AnchorPosition::new(AnchorId::from("m2"), 1.5)));
    // The frame arrives past the 100ms window, so the jump is instant.
    mgr.on_frame(&mut surface, t0 + Duration::from_millis(150));

    assert_eq!(surface.scroll_top(), 7.5);
    assert!(!mgr.is_suppressed());
}

#[test]
fn smooth_request_is_one_shot() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    let t0 = Instant::now();
    mgr.request_next_update_smooth(t0);
    mgr.set_scrolled_to(Some(AnchorPosition::new(AnchorId::from("m2"), 1.5)));
    let mut now = t0;
    for _ in 0..20 {
        mgr.on_frame(&mut surface, now);
        now += Duration::from_millis(16);
    }
    assert_eq!(surface.scroll_top(), 7.5);

    // The next restore jumps: the request was consumed by the first one.
    mgr.set_scrolled_to(Some(AnchorPosition::new(AnchorId::from("m6"), 0.0)));
    mgr.on_frame(&mut surface, now);
    assert_eq!(surface.scroll_top(), 18.0);
    assert!(!mgr.is_suppressed());
}

#[test]
fn stale_animation_snaps_at_the_settle_deadline() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    let t0 = Instant::now();
    mgr.request_next_update_smooth(t0);
    mgr.set_scrolled_to(Some(AnchorPosition::new(AnchorId::from("m2"), 1.5)));
    mgr.on_frame(&mut surface, t0);
    assert!(mgr.is_suppressed());

    mgr.on_frame(&mut surface, t0 + Duration::from_secs(2));
    assert_eq!(surface.scroll_top(), 7.5);
    assert!(!mgr.is_suppressed());
}

#[test]
fn new_restore_supersedes_an_inflight_animation() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    let t0 = Instant::now();
    mgr.request_next_update_smooth(t0);
    mgr.set_scrolled_to(Some(AnchorPosition::new(AnchorId::from("m2"), 1.5)));
    mgr.on_frame(&mut surface, t0);
    assert!(mgr.is_suppressed());

    mgr.set_scrolled_to(Some(AnchorPosition::new(AnchorId::from("m12"), 0.0)));
    mgr.on_frame(&mut surface, t0 + Duration::from_millis(16));

    assert_eq!(surface.scroll_top(), 36.0);
    assert!(!mgr.is_suppressed());
}
