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

use unicode_width::UnicodeWidthChar;

use super::StreamMessage;

/// Lines a message occupies at the given pane width: `author: body`, greedy
/// word wrap, display-cell aware.
pub fn message_lines(message: &StreamMessage, width: usize) -> Vec<String> {
    wrap_text(&format!("{}: {}", message.author, message.body), width)
}

/// Greedy word wrap at `width` display columns. Words wider than the pane are
/// hard-broken so a single long token cannot blow out the layout. Always
/// yields at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in text.split_whitespace() {
        for piece in break_word(word, width) {
            let piece_width = display_width(&piece);
            let sep = usize::from(line_width > 0);
            if line_width + sep + piece_width <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(&piece);
                line_width += sep + piece_width;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(&piece);
                line_width = piece_width;
            }
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Split a single word into chunks no wider than `width` columns.
fn break_word(word: &str, width: usize) -> Vec<String> {
    if display_width(word) <= width {
        return vec![word.to_owned()];
    }
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0usize;
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if chunk_width + ch_width > width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(ch);
        chunk_width += ch_width;
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

fn display_width(text: &str) -> usize {
    text.chars().map(|ch| ch.width().unwrap_or(0)).sum()
}
