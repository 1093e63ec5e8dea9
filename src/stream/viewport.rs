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

use crate::anchor::{AnchorEntry, AnchorId, AnchorLocator, Viewport};

use super::StreamMessage;
use super::layout;

/// One message's place in the current layout.
#[derive(Debug, Clone)]
struct LayoutRow {
    id: AnchorId,
    offset_top: f64,
    lines: Vec<String>,
}

/// A terminal chat pane: wrapped message lines stacked top to bottom, with a
/// scroll offset in rows. Implements the container contract the anchoring
/// engine consumes. The layout table is rebuilt from scratch on every
/// relayout; nothing survives a mutation.
#[derive(Debug)]
pub struct ChatViewport {
    width: f64,
    height: f64,
    scroll_top: f64,
    hidden: bool,
    rows: Vec<LayoutRow>,
    total_height: f64,
}

impl ChatViewport {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
            scroll_top: 0.0,
            hidden: false,
            rows: Vec::new(),
            total_height: 0.0,
        }
    }

    /// Rebuild the layout table from the current message list. The scroll
    /// offset is re-clamped the way a DOM container clamps `scrollTop` when
    /// content shrinks.
    pub fn relayout(&mut self, messages: &[StreamMessage]) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let width = self.width.max(1.0) as usize;
        let mut offset = 0.0;
        self.rows = messages
            .iter()
            .map(|message| {
                let lines = layout::message_lines(message, width);
                let row = LayoutRow { id: message.id.clone(), offset_top: offset, lines };
                offset += row.lines.len() as f64;
                row
            })
            .collect();
        self.total_height = offset;
        self.scroll_top = self.scroll_top.clamp(0.0, self.max_scroll());
    }

    pub fn resize(&mut self, width: u16, height: u16, messages: &[StreamMessage]) {
        self.width = f64::from(width);
        self.height = f64::from(height);
        self.relayout(messages);
    }

    /// Move the scroll offset by a signed number of rows (wheel / key input).
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_top(self.scroll_top + delta);
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The wrapped lines currently inside the viewport, top to bottom.
    #[must_use]
    pub fn visible_lines(&self) -> Vec<&str> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let first = self.scroll_top.floor().max(0.0) as usize;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = self.height.max(0.0) as usize;
        self.rows
            .iter()
            .flat_map(|row| row.lines.iter().map(String::as_str))
            .skip(first)
            .take(count)
            .collect()
    }

    fn max_scroll(&self) -> f64 {
        (self.scroll_height() - self.height).max(0.0)
    }
}

impl Viewport for ChatViewport {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset: f64) {
        self.scroll_top = offset.clamp(0.0, self.max_scroll());
    }

    fn client_width(&self) -> f64 {
        self.width
    }

    fn client_height(&self) -> f64 {
        self.height
    }

    fn scroll_height(&self) -> f64 {
        self.total_height.max(self.height)
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

impl AnchorLocator for ChatViewport {
    fn visible_anchors(&self) -> Vec<AnchorEntry> {
        self.rows
            .iter()
            .map(|row| AnchorEntry { id: row.id.clone(), offset_top: row.offset_top })
            .collect()
    }

    fn anchor_offset(&self, id: &AnchorId) -> Option<f64> {
        self.rows.iter().find(|row| row.id == *id).map(|row| row.offset_top)
    }
}
