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

use super::types::{AnchorEntry, AnchorId};

/// The scrollable container as the engine sees it.
///
/// Current layout is the only source of truth: implementations answer every
/// call from live state, since any mutation invalidates previous answers.
/// Units are rows, carried as `f64` so depth and slack arithmetic behave the
/// same as pixel offsets.
pub trait Viewport {
    fn scroll_top(&self) -> f64;

    /// Apply a new scroll offset. Implementations clamp to the valid range
    /// the way a DOM container clamps `scrollTop`.
    fn set_scroll_top(&mut self, offset: f64);

    fn client_width(&self) -> f64;

    fn client_height(&self) -> f64;

    /// Total content height; at least `client_height`.
    fn scroll_height(&self) -> f64;

    /// Collapse or restore the container's visibility. Collapsed while the
    /// first render is pending so unscrolled content never flashes.
    fn set_hidden(&mut self, hidden: bool);
}

/// Renderer-maintained side table mapping item identity to live rows.
pub trait AnchorLocator {
    /// Enumerate the rows currently mounted in the container, in any order.
    /// Must reflect current state on each call, never a cached list.
    fn visible_anchors(&self) -> Vec<AnchorEntry>;

    /// Top offset of the row with the given identity, or `None` once the item
    /// has scrolled out of existence.
    fn anchor_offset(&self, id: &AnchorId) -> Option<f64>;
}
