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

use std::collections::HashMap;

/// The container's children are not rendered yet. Pushing this reason also
/// collapses the container's visibility so unscrolled content never flashes.
pub const REASON_CONTENT_NOT_READY: &str = "content not ready";
/// The renderer is mutating the container's children.
pub const REASON_UPDATE_IN_PROGRESS: &str = "update in progress";
/// The stream is not attached to a live view.
pub const REASON_DISCONNECTED: &str = "disconnected";
/// A deferred restoration is scheduled or executing.
pub(crate) const REASON_RESETTING: &str = "resetting";
/// An animated scroll is in flight and has not settled.
pub(crate) const REASON_SMOOTH_SCROLL: &str = "smooth scroll";

/// Multiset of named suppression reasons with a running total.
///
/// Recording is suppressed iff the total is non-zero. Each reason counts
/// independently and reentrantly, so nested pushes from independent call
/// sites never prematurely resume each other. This is not a lock — it never
/// blocks anyone; it only gates whether scroll events are interpreted.
#[derive(Debug, Default)]
pub struct SuppressionLedger {
    counts: HashMap<String, u32>,
    total: u32,
}

impl SuppressionLedger {
    /// Increment `reason` and the running total. Returns the new total.
    pub fn push(&mut self, reason: &str) -> u32 {
        *self.counts.entry(reason.to_owned()).or_insert(0) += 1;
        self.total += 1;
        self.total
    }

    /// Decrement `reason` and the running total. Popping a reason that has no
    /// outstanding pushes is a no-op: both counters floor at zero, never go
    /// negative, never panic. Returns the new total.
    pub fn pop(&mut self, reason: &str) -> u32 {
        if let Some(count) = self.counts.get_mut(reason)
            && *count > 0
        {
            *count -= 1;
            self.total = self.total.saturating_sub(1);
        }
        self.total
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.total > 0
    }

    #[must_use]
    pub fn count(&self, reason: &str) -> u32 {
        self.counts.get(reason).copied().unwrap_or(0)
    }
}
