// stream-scroll — scroll anchoring for terminal chat streams
// Copyright (C) 2025  stream-scroll contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Scroll anchoring for a continuously mutating chat stream.
//!
//! The stream's layout is invalidated by every insertion, removal, re-render
//! and resize, so there is no persistent coordinate system to scroll within.
//! [`StreamScrollManager`] instead tracks the user's reading position as an
//! [`AnchorPosition`] — the identity of the row under the scroll-reference
//! line plus a row depth into it — and reconciles it against the container
//! after each mutation. Suppression counting keeps the manager's own
//! programmatic scrolling (and the renderer's churn) from being mistaken for
//! user input.

mod capture;
pub mod config;
mod platform;
mod restore;
pub mod suppress;
mod types;

pub use config::AnchorConfig;
pub use platform::{AnchorLocator, Viewport};
pub use suppress::{
    REASON_CONTENT_NOT_READY, REASON_DISCONNECTED, REASON_UPDATE_IN_PROGRESS, SuppressionLedger,
};
pub use types::{AnchorEntry, AnchorId, AnchorPosition, ScrollAnchorTo, SizeSnapshot};

use std::time::Instant;

use restore::SmoothScroll;
use suppress::REASON_RESETTING;

/// Consumer write-back, invoked whenever the persisted anchor changes.
pub type AnchorChangedFn = Box<dyn FnMut(Option<&AnchorPosition>)>;

/// Tracks which visible row is the user's reading anchor and keeps the scroll
/// offset pointed at it across content mutations.
///
/// The manager is a single-threaded state machine. The host passes the
/// container surface `&mut` into each entry point and drives deferred work by
/// calling [`Self::on_frame`] once per render tick; everything between frame
/// boundaries runs to completion, so suppression counters are the only
/// reentrancy guard needed.
pub struct StreamScrollManager {
    config: AnchorConfig,
    anchor_to: ScrollAnchorTo,
    position: Option<AnchorPosition>,
    on_anchor_changed: Option<AnchorChangedFn>,
    suppression: SuppressionLedger,
    known_size: Option<SizeSnapshot>,
    reset_pending: bool,
    smooth_requested_at: Option<Instant>,
    smooth: Option<SmoothScroll>,
    disposed: bool,
}

impl StreamScrollManager {
    #[must_use]
    pub fn new(anchor_to: ScrollAnchorTo, config: AnchorConfig) -> Self {
        Self {
            config,
            anchor_to,
            position: None,
            on_anchor_changed: None,
            suppression: SuppressionLedger::default(),
            known_size: None,
            reset_pending: false,
            smooth_requested_at: None,
            smooth: None,
            disposed: false,
        }
    }

    /// Register the consumer write-back. Invoked only on real changes — the
    /// setter is equality-guarded.
    pub fn set_anchor_listener(&mut self, listener: impl FnMut(Option<&AnchorPosition>) + 'static) {
        self.on_anchor_changed = Some(Box::new(listener));
    }

    #[must_use]
    pub fn scrolled_to(&self) -> Option<&AnchorPosition> {
        self.position.as_ref()
    }

    /// Persist a new anchor (or `None` for "follow the live edge") and
    /// schedule a restoration. Identical `(identity, depth)` pairs are
    /// no-ops: no callback, no scroll.
    pub fn set_scrolled_to(&mut self, position: Option<AnchorPosition>) {
        if self.position == position {
            return;
        }
        self.position = position;
        if let Some(listener) = self.on_anchor_changed.as_mut() {
            listener(self.position.as_ref());
        }
        self.reset_scroll();
    }

    #[must_use]
    pub fn anchor_to(&self) -> ScrollAnchorTo {
        self.anchor_to
    }

    /// Switch which edge depth is measured from. The anchor is re-derived
    /// immediately under the new direction's semantics.
    pub fn set_anchor_to<S: Viewport + AnchorLocator>(
        &mut self,
        surface: &S,
        anchor_to: ScrollAnchorTo,
    ) {
        if self.anchor_to == anchor_to {
            return;
        }
        self.anchor_to = anchor_to;
        self.capture(surface);
    }

    /// One-shot request: animate the next restoration instead of jumping.
    /// Expires if no reset consumes it within the configured window.
    pub fn request_next_update_smooth(&mut self, now: Instant) {
        self.smooth_requested_at = Some(now);
    }

    /// Schedule a restoration of the scroll offset from the current anchor on
    /// the next frame. Repeated triggers before that frame coalesce into one
    /// pass. The internal "resetting" reason is held from the moment of
    /// scheduling, so no scroll event can be captured between a trigger and
    /// the deferred execution.
    pub fn reset_scroll(&mut self) {
        if self.disposed || self.reset_pending {
            return;
        }
        self.reset_pending = true;
        self.suppression.push(REASON_RESETTING);
    }

    /// Push a named suppression reason. While any reason is active, scroll
    /// events are ignored rather than captured.
    pub fn suppress<S: Viewport>(&mut self, surface: &mut S, reason: &str) {
        self.suppression.push(reason);
        if reason == REASON_CONTENT_NOT_READY {
            surface.set_hidden(true);
        }
        tracing::trace!(reason, total = self.suppression.total(), "suppressed");
    }

    /// Pop a named suppression reason; unbalanced pops clamp at zero. When
    /// this call would make the total reach zero and `skip_reset` is false, a
    /// reset is triggered first — while still suppressed — so the restored
    /// offset is in place before recording resumes. Visibility is restored
    /// once the total actually reaches zero.
    pub fn resume<S: Viewport>(&mut self, surface: &mut S, reason: &str, skip_reset: bool) {
        if !skip_reset && self.suppression.total() == 1 && self.suppression.count(reason) == 1 {
            self.reset_scroll();
        }
        let before = self.suppression.total();
        let total = self.suppression.pop(reason);
        if before > 0 && total == 0 {
            surface.set_hidden(false);
        }
        tracing::trace!(reason, total, "resumed");
    }

    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.suppression.is_active()
    }

    /// Whether a restoration is scheduled for the next frame.
    #[must_use]
    pub fn has_pending_reset(&self) -> bool {
        self.reset_pending
    }

    /// The container resized out from under us; the old offset is stale, so
    /// re-derive it from the anchor instead of reinterpreting it.
    pub fn on_resize(&mut self) {
        self.reset_scroll();
    }

    /// Detach from the container. Scroll and frame entry points become inert.
    /// Idempotent.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
