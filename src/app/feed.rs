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

use std::time::Duration;

use tokio::sync::mpsc;

use super::state::FeedEvent;
use crate::stream::StreamMessage;

/// Scripted chatter, looped forever. Long and short bodies are mixed on
/// purpose so wrapped heights vary and the anchoring actually gets exercised.
const SCRIPT: &[(&str, &str)] = &[
    ("nova", "anyone around? the staging deploy just went out"),
    ("kit", "here. dashboards look clean so far"),
    ("nova", "cool. watch the p99, last time it crept up about ten minutes in"),
    ("sol", "side note: the retry queue metric is mislabeled, it counts batches not items, which is why the graph looked flat all week while the queue was quietly growing"),
    ("kit", "…that explains a lot"),
    ("nova", "filed it"),
    ("sol", "thanks. also bumped the connection pool to 32, the old ceiling was from the single-region days"),
    ("kit", "p99 steady"),
    ("nova", "fifteen minutes, still green. calling it good"),
    ("sol", "nice. who is taking the incident review doc from last week? it still has the raw timeline pasted in and needs an actual summary before thursday"),
    ("kit", "mine, will finish tomorrow morning"),
    ("nova", "ok, logging off"),
];

/// Spawn the background feed: one scripted message per interval until the
/// receiver goes away.
pub fn start_feed(tx: mpsc::UnboundedSender<FeedEvent>, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut index = 0usize;
        loop {
            ticker.tick().await;
            let (author, body) = SCRIPT[index % SCRIPT.len()];
            if tx.send(FeedEvent::Message(StreamMessage::new(author, body))).is_err() {
                tracing::debug!("feed receiver dropped, stopping");
                break;
            }
            index += 1;
        }
    });
}

/// Messages shown immediately at startup so the pane is never empty.
pub fn seed_messages() -> Vec<StreamMessage> {
    vec![
        StreamMessage::new("system", "connected to #ops"),
        StreamMessage::new("system", "scroll up to read history; End follows the live edge"),
    ]
}
