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

use crate::anchor::ScrollAnchorTo;
use crate::app::App;
use crate::ui::theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let anchor_to = match app.stream.manager().anchor_to() {
        ScrollAnchorTo::Top => "top",
        ScrollAnchorTo::Bottom => "bottom",
    };
    let position = match app.stream.scrolled_to() {
        Some(position) => format!("pinned {}+{:.0}", short_id(position.id.as_str()), position.depth),
        None => "live".to_owned(),
    };

    let mut spans = vec![
        Span::styled("#ops ", Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(format!("anchor:{anchor_to} "), Style::default().fg(theme::DIM)),
        Span::styled(position, Style::default().fg(theme::NOTICE)),
    ];
    if app.smooth_updates {
        spans.push(Span::styled(" smooth", Style::default().fg(theme::DIM)));
    }
    if app.feed_paused {
        spans.push(Span::styled(" paused", Style::default().fg(theme::DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}
