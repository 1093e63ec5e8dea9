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

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::anchor::Viewport;
use crate::app::App;
use crate::ui::theme;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    // Keep the engine's container dimensions in sync with the layout; a real
    // size change defers a scroll restoration to the next frame.
    let viewport = app.stream.viewport();
    if viewport.client_width() != f64::from(area.width)
        || viewport.client_height() != f64::from(area.height)
    {
        app.stream.resize(area.width, area.height);
    }

    // Collapsed until the first completed update has been scrolled into place.
    if app.stream.viewport().is_hidden() {
        return;
    }

    let lines: Vec<Line> = app
        .stream
        .viewport()
        .visible_lines()
        .into_iter()
        .map(|text| Line::from(styled_message_line(text)))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    // Reading history: new content is accumulating past the live edge.
    if app.stream.reading_history() && area.height > 0 {
        let notice = Line::from(Span::styled(
            " ▼ new messages — End to follow ",
            Style::default().fg(theme::NOTICE).add_modifier(Modifier::REVERSED),
        ));
        let notice_area =
            Rect { x: area.x, y: area.y + area.height - 1, width: area.width, height: 1 };
        frame.render_widget(Paragraph::new(notice), notice_area);
    }
}

/// Dim the `author:` prefix on lines that start one.
fn styled_message_line(text: &str) -> Vec<Span<'static>> {
    if let Some(colon) = text.find(": ") {
        let (author, rest) = text.split_at(colon + 1);
        vec![Span::styled(author.to_owned(), Style::default().fg(theme::ACCENT)), Span::raw(rest.to_owned())]
    } else {
        vec![Span::raw(text.to_owned())]
    }
}
