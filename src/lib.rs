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

pub mod anchor;
pub mod app;
pub mod error;
pub mod stream;
pub mod ui;

use std::time::Duration;

use clap::Parser;

use anchor::config::{DEFAULT_EDGE_SLACK, DEFAULT_MIN_SCROLL_DELTA};
use anchor::{AnchorConfig, ScrollAnchorTo};

#[derive(Parser, Debug)]
#[command(name = "stream-scroll", about = "Terminal chat stream with scroll anchoring")]
pub struct Cli {
    /// Which viewport edge anchor depth is measured from (the live edge is
    /// the opposite end)
    #[arg(long, value_enum, default_value_t = ScrollAnchorTo::Top)]
    pub anchor_to: ScrollAnchorTo,

    /// Milliseconds between scripted feed messages
    #[arg(long, default_value_t = 900)]
    pub feed_interval_ms: u64,

    /// Rows of slack around the live edge before the anchor drops
    #[arg(long, default_value_t = DEFAULT_EDGE_SLACK)]
    pub edge_slack: f64,

    /// Scroll deltas at or below this many rows are never re-applied
    #[arg(long, default_value_t = DEFAULT_MIN_SCROLL_DELTA)]
    pub min_scroll_delta: f64,

    /// Lifetime of a one-shot smooth-scroll request, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub smooth_expiry_ms: u64,

    /// Upper bound on an animated scroll settling, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub settle_timeout_ms: u64,

    /// Write tracing output to this file
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (falls back to RUST_LOG, then "info")
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}

impl Cli {
    #[must_use]
    pub fn anchor_config(&self) -> AnchorConfig {
        AnchorConfig {
            edge_slack: self.edge_slack,
            min_scroll_delta: self.min_scroll_delta,
            smooth_expiry: Duration::from_millis(self.smooth_expiry_ms),
            settle_timeout: Duration::from_millis(self.settle_timeout_ms),
        }
    }
}
