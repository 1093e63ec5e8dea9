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

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

use super::state::{App, FeedEvent};
use crate::anchor::Viewport;

const MOUSE_SCROLL_ROWS: f64 = 3.0;

pub fn handle_terminal_event(app: &mut App, event: &Event) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => match (key.code, key.modifiers) {
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
            }
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => app.should_quit = true,
            (KeyCode::Up, _) => app.stream.scroll_by(-1.0),
            (KeyCode::Down, _) => app.stream.scroll_by(1.0),
            (KeyCode::PageUp, _) => {
                let page = app.stream.viewport().client_height();
                app.stream.scroll_by(-page);
            }
            (KeyCode::PageDown, _) => {
                let page = app.stream.viewport().client_height();
                app.stream.scroll_by(page);
            }
            // Follow the live edge again.
            (KeyCode::End, _) => app.stream.jump_to_live_edge(),
            (KeyCode::Home, _) => {
                let to_top = -app.stream.viewport().scroll_top();
                app.stream.scroll_by(to_top);
            }
            (KeyCode::Char('t'), _) => app.stream.toggle_anchor_direction(),
            (KeyCode::Char('s'), _) => app.smooth_updates = !app.smooth_updates,
            (KeyCode::Char('p'), _) => app.feed_paused = !app.feed_paused,
            _ => {}
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => app.stream.scroll_by(-MOUSE_SCROLL_ROWS),
            MouseEventKind::ScrollDown => app.stream.scroll_by(MOUSE_SCROLL_ROWS),
            _ => {}
        },
        // Resize is picked up by the renderer comparing pane dimensions.
        _ => {}
    }
}

pub fn handle_feed_event(app: &mut App, event: FeedEvent) {
    match event {
        FeedEvent::Message(message) => {
            if app.feed_paused {
                return;
            }
            if app.smooth_updates {
                app.stream.request_next_update_smooth(Instant::now());
            }
            app.stream.push(message);
        }
    }
}
