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

use tokio::sync::mpsc;

use crate::anchor::{AnchorConfig, ScrollAnchorTo};
use crate::stream::{MessageStream, StreamMessage};

/// Events from the background feed task.
#[derive(Debug)]
pub enum FeedEvent {
    Message(StreamMessage),
}

pub struct App {
    pub stream: MessageStream,
    pub should_quit: bool,
    /// When set, each feed append animates the follow-up restoration.
    pub smooth_updates: bool,
    /// Incoming feed messages are dropped while paused.
    pub feed_paused: bool,
    pub event_tx: mpsc::UnboundedSender<FeedEvent>,
    pub event_rx: mpsc::UnboundedReceiver<FeedEvent>,
}

impl App {
    #[must_use]
    pub fn new(anchor_to: ScrollAnchorTo, config: AnchorConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            // Sized on the first rendered frame.
            stream: MessageStream::new(anchor_to, config, 0, 0),
            should_quit: false,
            smooth_updates: false,
            feed_paused: false,
            event_tx,
            event_rx,
        }
    }
}
