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

//! Message-stream integration: owns the message list, the chat viewport and
//! the anchoring engine, and keeps the three consistent. Every content
//! mutation is bracketed with begin/end update suppression so the engine
//! never mistakes render churn for user scrolling.

pub mod layout;
mod viewport;

pub use viewport::ChatViewport;

use std::time::Instant;

use crate::anchor::{
    AnchorConfig, AnchorId, AnchorPosition, REASON_CONTENT_NOT_READY, REASON_UPDATE_IN_PROGRESS,
    ScrollAnchorTo, StreamScrollManager,
};

/// One chat message. The id doubles as the anchor identity, so it must be
/// unique and stable for the lifetime of the message.
#[derive(Debug, Clone)]
pub struct StreamMessage {
    pub id: AnchorId,
    pub author: String,
    pub body: String,
}

impl StreamMessage {
    /// New message with a random unique id.
    #[must_use]
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), author, body)
    }

    #[must_use]
    pub fn with_id(
        id: impl Into<AnchorId>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self { id: id.into(), author: author.into(), body: body.into() }
    }
}

/// A scroll-anchored message stream.
///
/// Starts gated behind "content not ready" (viewport hidden); the gate drops
/// permanently — for this mount cycle — after the first completed update.
pub struct MessageStream {
    messages: Vec<StreamMessage>,
    viewport: ChatViewport,
    manager: StreamScrollManager,
    ready: bool,
}

impl MessageStream {
    #[must_use]
    pub fn new(anchor_to: ScrollAnchorTo, config: AnchorConfig, width: u16, height: u16) -> Self {
        let mut manager = StreamScrollManager::new(anchor_to, config);
        let mut viewport = ChatViewport::new(width, height);
        manager.suppress(&mut viewport, REASON_CONTENT_NOT_READY);
        Self { messages: Vec::new(), viewport, manager, ready: false }
    }

    #[must_use]
    pub fn messages(&self) -> &[StreamMessage] {
        &self.messages
    }

    #[must_use]
    pub fn viewport(&self) -> &ChatViewport {
        &self.viewport
    }

    #[must_use]
    pub fn manager(&self) -> &StreamScrollManager {
        &self.manager
    }

    /// Mutate the message list inside a balanced begin/end update bracket.
    /// The bracket is applied even when the closure changes nothing.
    pub fn update(&mut self, mutate: impl FnOnce(&mut Vec<StreamMessage>)) {
        self.begin_update();
        mutate(&mut self.messages);
        self.end_update();
    }

    /// Append one message (bracketed).
    pub fn push(&mut self, message: StreamMessage) {
        self.update(|messages| messages.push(message));
    }

    fn begin_update(&mut self) {
        self.manager.suppress(&mut self.viewport, REASON_UPDATE_IN_PROGRESS);
    }

    fn end_update(&mut self) {
        self.viewport.relayout(&self.messages);
        self.manager.resume(&mut self.viewport, REASON_UPDATE_IN_PROGRESS, false);
        self.mark_ready();
    }

    /// One-way readiness latch: the first completed update releases the
    /// "content not ready" gate; later calls are no-ops until [`Self::detach`]
    /// re-arms it.
    pub fn mark_ready(&mut self) {
        if !self.ready {
            self.ready = true;
            self.manager.resume(&mut self.viewport, REASON_CONTENT_NOT_READY, false);
        }
    }

    /// Tear the view down: hide the pane and re-arm the readiness gate so a
    /// remount goes through the same first-render sequence.
    pub fn detach(&mut self) {
        if self.ready {
            self.ready = false;
            self.manager.suppress(&mut self.viewport, REASON_CONTENT_NOT_READY);
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The pane was resized; the old offset is stale, so the engine re-derives
    /// it from the anchor instead of capturing it.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport.resize(width, height, &self.messages);
        self.manager.on_resize();
    }

    /// User scroll input, in signed rows. Mutates the offset and feeds the
    /// resulting scroll event to the engine, mirroring how a DOM container
    /// moves first and notifies second.
    pub fn scroll_by(&mut self, delta: f64) {
        self.viewport.scroll_by(delta);
        self.manager.on_scroll(&self.viewport);
    }

    /// Frame tick: runs deferred restorations and advances animated scrolls.
    pub fn on_frame(&mut self, now: Instant) {
        self.manager.on_frame(&mut self.viewport, now);
    }

    #[must_use]
    pub fn scrolled_to(&self) -> Option<&AnchorPosition> {
        self.manager.scrolled_to()
    }

    /// Restore a previously persisted anchor (e.g. when switching back to a
    /// channel).
    pub fn set_scrolled_to(&mut self, position: Option<AnchorPosition>) {
        self.manager.set_scrolled_to(position);
    }

    /// Drop the anchor and follow the live edge again.
    pub fn jump_to_live_edge(&mut self) {
        self.manager.set_scrolled_to(None);
    }

    /// Flip the anchor direction, re-deriving the anchor under the new
    /// semantics.
    pub fn toggle_anchor_direction(&mut self) {
        let next = match self.manager.anchor_to() {
            ScrollAnchorTo::Top => ScrollAnchorTo::Bottom,
            ScrollAnchorTo::Bottom => ScrollAnchorTo::Top,
        };
        self.manager.set_anchor_to(&self.viewport, next);
    }

    /// Animate the next restoration instead of jumping.
    pub fn request_next_update_smooth(&mut self, now: Instant) {
        self.manager.request_next_update_smooth(now);
    }

    /// True while the user is pinned to history, i.e. new content accumulates
    /// out of sight past the live edge.
    #[must_use]
    pub fn reading_history(&self) -> bool {
        self.manager.scrolled_to().is_some()
    }
}
