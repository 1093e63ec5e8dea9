use std::time::Instant;

use pretty_assertions::assert_eq;
use stream_scroll::anchor::{
    REASON_CONTENT_NOT_READY, REASON_DISCONNECTED, REASON_UPDATE_IN_PROGRESS, ScrollAnchorTo,
    Viewport,
};

use crate::helpers::{FakeSurface, manager, settle};

#[test]
fn resume_of_last_reason_schedules_a_restore_first() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    mgr.suppress(&mut surface, REASON_UPDATE_IN_PROGRESS);
    mgr.suppress(&mut surface, REASON_DISCONNECTED);

    mgr.resume(&mut surface, REASON_UPDATE_IN_PROGRESS, false);
    assert!(!mgr.has_pending_reset());
    assert!(mgr.is_suppressed());

    mgr.resume(&mut surface, REASON_DISCONNECTED, false);
    // The restore is scheduled while still suppressed, so the offset is back
    // in place before any scroll event can be recorded.
    assert!(mgr.has_pending_reset());
    assert!(mgr.is_suppressed());

    mgr.on_frame(&mut surface, Instant::now());
    assert!(!mgr.is_suppressed());
}

#[test]
fn interleaved_reasons_suppress_until_fully_balanced() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    mgr.suppress(&mut surface, REASON_UPDATE_IN_PROGRESS);
    mgr.suppress(&mut surface, REASON_DISCONNECTED);
    mgr.suppress(&mut surface, REASON_UPDATE_IN_PROGRESS);

    mgr.resume(&mut surface, REASON_DISCONNECTED, false);
    surface.set_scroll_top(7.5);
    mgr.on_scroll(&surface);
    assert_eq!(mgr.scrolled_to(), None);

    mgr.resume(&mut surface, REASON_UPDATE_IN_PROGRESS, false);
    mgr.on_scroll(&surface);
    assert_eq!(mgr.scrolled_to(), None);

    mgr.resume(&mut surface, REASON_UPDATE_IN_PROGRESS, false);
    mgr.on_frame(&mut surface, Instant::now());

    // Fully balanced again; a user scroll is captured.
    surface.set_scroll_top(7.5);
    mgr.on_scroll(&surface);
    assert!(mgr.scrolled_to().is_some());
}

#[test]
fn unbalanced_resume_clamps_at_zero() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    mgr.resume(&mut surface, REASON_DISCONNECTED, false);
    mgr.resume(&mut surface, REASON_DISCONNECTED, false);
    assert!(!mgr.is_suppressed());
    assert!(!mgr.has_pending_reset());

    // The counter is not poisoned: one push still suppresses, one pop clears.
    mgr.suppress(&mut surface, REASON_DISCONNECTED);
    assert!(mgr.is_suppressed());
    mgr.resume(&mut surface, REASON_DISCONNECTED, true);
    assert!(!mgr.is_suppressed());
}

#[test]
fn content_not_ready_hides_until_all_reasons_clear() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);

    mgr.suppress(&mut surface, REASON_CONTENT_NOT_READY);
    assert!(surface.is_hidden());

    mgr.suppress(&mut surface, REASON_UPDATE_IN_PROGRESS);
    mgr.resume(&mut surface, REASON_CONTENT_NOT_READY, true);
    assert!(surface.is_hidden());

    mgr.resume(&mut surface, REASON_UPDATE_IN_PROGRESS, true);
    assert!(!surface.is_hidden());
}

#[test]
fn skip_reset_resume_leaves_no_pending_restore() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    mgr.suppress(&mut surface, REASON_DISCONNECTED);
    mgr.resume(&mut surface, REASON_DISCONNECTED, true);
    assert!(!mgr.is_suppressed());
    assert!(!mgr.has_pending_reset());
}

#[test]
fn dispose_makes_entry_points_inert() {
    let mut surface = FakeSurface::with_items(20, 3.0, 80.0, 10.0);
    let mut mgr = manager(ScrollAnchorTo::Top);
    settle(&mut mgr, &mut surface);

    mgr.dispose();
    assert!(mgr.is_disposed());

    surface.set_scroll_top(7.5);
    mgr.on_scroll(&surface);
    assert_eq!(mgr.scrolled_to(), None);

    mgr.reset_scroll();
    assert!(!mgr.has_pending_reset());

    let writes = surface.scroll_writes;
    mgr.on_frame(&mut surface, Instant::now());
    assert_eq!(surface.scroll_writes, writes);

    mgr.dispose();
    assert!(mgr.is_disposed());
}
