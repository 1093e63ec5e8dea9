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

use super::StreamScrollManager;
use super::platform::{AnchorLocator, Viewport};
use super::types::{AnchorPosition, ScrollAnchorTo, SizeSnapshot};

impl StreamScrollManager {
    /// Native scroll event entry point.
    ///
    /// Only a scroll whose measured dimensions match the last known snapshot
    /// is user input worth capturing. A mismatch means the layout changed out
    /// from under the offset, so the correct recovery is a reset, never a
    /// capture.
    pub fn on_scroll<S: Viewport + AnchorLocator>(&mut self, surface: &S) {
        if self.disposed || self.suppression.is_active() {
            return;
        }
        let Some(known) = self.known_size else {
            // No baseline yet; the offset is not comparable.
            self.reset_scroll();
            return;
        };
        let measured = SizeSnapshot {
            width: surface.client_width(),
            client_height: surface.client_height(),
            scroll_height: surface.scroll_height(),
        };
        if measured != known {
            tracing::debug!(?known, ?measured, "scroll during layout change, resetting");
            self.reset_scroll();
            return;
        }
        self.capture(surface);
    }

    /// Derive the reading anchor from the current scroll offset.
    pub(super) fn capture<S: Viewport + AnchorLocator>(&mut self, surface: &S) {
        let (client_height, scroll_height) = match self.known_size {
            Some(known) => (known.client_height, known.scroll_height),
            None => (surface.client_height(), surface.scroll_height()),
        };
        let raw_pos = match self.anchor_to {
            ScrollAnchorTo::Top => surface.scroll_top(),
            ScrollAnchorTo::Bottom => surface.scroll_top() + client_height,
        };

        // Within slack of the live edge the anchor is dropped entirely, so
        // the view snaps back to following new content.
        let max_scroll = (scroll_height - client_height).max(0.0);
        let at_live_edge = match self.anchor_to {
            ScrollAnchorTo::Top => raw_pos >= max_scroll - self.config.edge_slack,
            ScrollAnchorTo::Bottom => raw_pos <= client_height + self.config.edge_slack,
        };
        if at_live_edge {
            tracing::trace!(raw_pos, "at live edge, dropping anchor");
            self.set_scrolled_to(None);
            return;
        }

        let mut anchors = surface.visible_anchors();
        if anchors.is_empty() {
            self.set_scrolled_to(None);
            return;
        }
        anchors.sort_by(|a, b| a.offset_top.total_cmp(&b.offset_top));

        // Last row starting at or above the reference line; the first row is
        // the fallback when every offset exceeds it.
        let mut candidate = &anchors[0];
        for entry in &anchors {
            if entry.offset_top <= raw_pos {
                candidate = entry;
            } else {
                break;
            }
        }

        let position = AnchorPosition::new(candidate.id.clone(), raw_pos - candidate.offset_top);
        tracing::trace!(id = %position.id, depth = position.depth, "captured anchor");
        self.set_scrolled_to(Some(position));
    }
}
