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

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("tolerance `{name}` must be a finite, non-negative number of rows (got {value})")]
    InvalidTolerance { name: &'static str, value: f64 },
}

impl ConfigError {
    pub const INVALID_CONFIG_EXIT_CODE: i32 = 20;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidTolerance { .. } => Self::INVALID_CONFIG_EXIT_CODE,
        }
    }
}
