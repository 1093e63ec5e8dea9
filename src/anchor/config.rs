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

use crate::error::ConfigError;

pub const DEFAULT_EDGE_SLACK: f64 = 10.0;
pub const DEFAULT_MIN_SCROLL_DELTA: f64 = 2.0;
pub const DEFAULT_SMOOTH_EXPIRY: Duration = Duration::from_millis(100);
pub const DEFAULT_SETTLE_TIMEOUT: Duration = Duration::from_millis(1000);

/// Tolerance policy for the anchoring engine.
///
/// The defaults are empirically chosen and display-density dependent, so every
/// value is adjustable rather than hard-coded.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorConfig {
    /// Slack around the live edge: within this many rows of the extreme, the
    /// view snaps exactly to it and the anchor is dropped.
    pub edge_slack: f64,
    /// Scroll deltas at or below this are never re-applied, so redundant
    /// restores cannot retrigger the scroll listener.
    pub min_scroll_delta: f64,
    /// How long a one-shot smooth-scroll request stays valid before the next
    /// reset consumes it.
    pub smooth_expiry: Duration,
    /// Upper bound on waiting for an animated scroll to settle.
    pub settle_timeout: Duration,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            edge_slack: DEFAULT_EDGE_SLACK,
            min_scroll_delta: DEFAULT_MIN_SCROLL_DELTA,
            smooth_expiry: DEFAULT_SMOOTH_EXPIRY,
            settle_timeout: DEFAULT_SETTLE_TIMEOUT,
        }
    }
}

impl AnchorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("edge-slack", self.edge_slack)?;
        check("min-scroll-delta", self.min_scroll_delta)?;
        Ok(())
    }
}

fn check(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTolerance { name, value })
    }
}
