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

use std::time::Instant;

use super::StreamScrollManager;
use super::platform::{AnchorLocator, Viewport};
use super::suppress::{REASON_RESETTING, REASON_SMOOTH_SCROLL};
use super::types::{ScrollAnchorTo, SizeSnapshot};

/// An animated scroll in flight: chased once per frame until it reaches its
/// target or the settle deadline passes.
#[derive(Debug, Clone, Copy)]
pub(super) struct SmoothScroll {
    pub target: f64,
    pub deadline: Instant,
}

impl StreamScrollManager {
    /// Frame tick: run any deferred restoration, then advance an in-flight
    /// animated scroll.
    ///
    /// Restoration always re-reads current state at execution time rather
    /// than closing over values from the trigger, so a callback that became
    /// stale just ends up doing nothing.
    pub fn on_frame<S: Viewport + AnchorLocator>(&mut self, surface: &mut S, now: Instant) {
        if self.disposed {
            return;
        }
        if self.reset_pending {
            self.reset_pending = false;
            self.run_reset(surface, now);
        }
        self.step_smooth(surface, now);
    }

    /// Recompute the scroll offset from the current anchor and apply it.
    /// Runs with the "resetting" hold still in place (pushed at schedule
    /// time), so the scroll events this generates are never captured.
    fn run_reset<S: Viewport + AnchorLocator>(&mut self, surface: &mut S, now: Instant) {
        // A fresh reset supersedes any animated scroll still in flight.
        if self.smooth.take().is_some() {
            self.resume(surface, REASON_SMOOTH_SCROLL, true);
        }

        let client_height = surface.client_height();
        let scroll_height = surface.scroll_height();
        let max_scroll = (scroll_height - client_height).max(0.0);

        let mut target = match &self.position {
            Some(position) => match surface.anchor_offset(&position.id) {
                Some(offset_top) => {
                    let from_top = offset_top + position.depth;
                    match self.anchor_to {
                        ScrollAnchorTo::Top => from_top,
                        // Depth is distance from the viewport's bottom edge.
                        ScrollAnchorTo::Bottom => from_top - client_height,
                    }
                }
                // Anchor scrolled out of existence; default to the top.
                None => 0.0,
            },
            None => match self.anchor_to {
                ScrollAnchorTo::Top => max_scroll,
                ScrollAnchorTo::Bottom => 0.0,
            },
        };

        // Snap to the extreme when within slack of it.
        let mut at_live_edge = false;
        match self.anchor_to {
            ScrollAnchorTo::Top if target >= max_scroll - self.config.edge_slack => {
                target = max_scroll;
                at_live_edge = true;
            }
            ScrollAnchorTo::Bottom if target <= self.config.edge_slack => {
                target = 0.0;
                at_live_edge = true;
            }
            _ => {}
        }

        let current = surface.scroll_top();
        let smooth = self.take_smooth_request(now);
        if (target - current).abs() > self.config.min_scroll_delta {
            if smooth {
                self.suppression.push(REASON_SMOOTH_SCROLL);
                self.smooth =
                    Some(SmoothScroll { target, deadline: now + self.config.settle_timeout });
                tracing::debug!(current, target, "starting animated scroll");
            } else {
                tracing::debug!(current, target, "restoring scroll offset");
                surface.set_scroll_top(target);
            }
        }

        // Once the outermost reset lands on the live edge, drop the anchor so
        // future captures know we are following new content, not pinned to a
        // coincidentally matching offset.
        if at_live_edge && self.suppression.total() == 1 && self.position.is_some() {
            self.set_scrolled_to(None);
        }

        self.known_size = Some(SizeSnapshot {
            width: surface.client_width(),
            client_height,
            scroll_height,
        });

        self.resume(surface, REASON_RESETTING, true);
    }

    /// Consume the one-shot smooth request if it is still within its expiry
    /// window at execution time.
    fn take_smooth_request(&mut self, now: Instant) -> bool {
        match self.smooth_requested_at.take() {
            Some(requested_at) => now.duration_since(requested_at) <= self.config.smooth_expiry,
            None => false,
        }
    }

    /// Chase the animated-scroll target, halving the remaining distance each
    /// frame. Settles by snapping exactly onto the target once within the
    /// minimum scroll delta, or when the deadline passes.
    fn step_smooth<S: Viewport>(&mut self, surface: &mut S, now: Instant) {
        let Some(smooth) = self.smooth else {
            return;
        };
        let current = surface.scroll_top();
        let delta = smooth.target - current;
        if delta.abs() <= self.config.min_scroll_delta || now >= smooth.deadline {
            if delta != 0.0 {
                surface.set_scroll_top(smooth.target);
            }
            self.smooth = None;
            self.resume(surface, REASON_SMOOTH_SCROLL, true);
            tracing::debug!(target = smooth.target, "animated scroll settled");
            return;
        }
        surface.set_scroll_top(current + delta * 0.5);
    }
}
