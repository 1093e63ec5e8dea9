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

use std::fmt;

/// Stable identity of a renderable item in the stream (e.g. a message id).
///
/// Survives re-renders of the same logical item even though the row it maps to
/// is rebuilt on every layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(String);

impl AnchorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AnchorId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AnchorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The persisted reading anchor: which item the user is pinned to, and how far
/// past its leading edge the scroll-reference line sits, in rows.
///
/// `depth` is usually small and bounded by the item's height, but negative
/// values are legal (the fallback candidate can start below the reference
/// line). The absence of a position (`None` at the call sites) means "no
/// anchor — follow the live edge".
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPosition {
    pub id: AnchorId,
    pub depth: f64,
}

impl AnchorPosition {
    pub fn new(id: impl Into<AnchorId>, depth: f64) -> Self {
        Self { id: id.into(), depth }
    }
}

/// Which viewport edge is the semantic "start" that `depth` is measured from.
///
/// The opposite end is the live edge: where new content appears when no
/// anchor is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ScrollAnchorTo {
    /// Depth measured from the top; the live edge is the bottom.
    #[default]
    Top,
    /// Depth measured from the bottom; the live edge is the top.
    Bottom,
}

impl fmt::Display for ScrollAnchorTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        })
    }
}

/// Dimensions recorded after each scroll reset.
///
/// A scroll event whose measured dimensions differ from this snapshot was
/// caused by a layout change rather than the user, and must trigger a reset
/// instead of a capture — the offset is not comparable across layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSnapshot {
    pub width: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl SizeSnapshot {
    /// Largest valid scroll offset for these dimensions.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// A live row of the container: identity plus its current top offset.
///
/// Produced fresh by enumeration each time capture runs, never cached across
/// mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorEntry {
    pub id: AnchorId,
    pub offset_top: f64,
}

impl AnchorEntry {
    pub fn new(id: impl Into<AnchorId>, offset_top: f64) -> Self {
        Self { id: id.into(), offset_top }
    }
}
