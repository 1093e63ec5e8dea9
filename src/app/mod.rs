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

mod events;
mod feed;
mod state;

pub use state::{App, FeedEvent};

use std::time::{Duration, Instant};

use futures::{FutureExt as _, StreamExt as _};

use crate::Cli;

/// Build the app from CLI options and seed the opening messages.
#[must_use]
pub fn create_app(cli: &Cli) -> App {
    let mut app = App::new(cli.anchor_to, cli.anchor_config());
    app.stream.update(|messages| messages.extend(feed::seed_messages()));
    app
}

/// Start the scripted background feed.
pub fn start_feed(app: &App, cli: &Cli) {
    feed::start_feed(app.event_tx.clone(), Duration::from_millis(cli.feed_interval_ms));
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Mouse capture for wheel scrolling (ignore error on unsupported terminals)
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture);

    let mut events = crossterm::event::EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                events::handle_terminal_event(app, &event);
            }
            Some(event) = app.event_rx.recv() => {
                events::handle_feed_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            // Terminal events first (keeps input responsive)
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                events::handle_terminal_event(app, &event);
                continue;
            }
            match app.event_rx.try_recv() {
                Ok(event) => events::handle_feed_event(app, event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            break;
        }

        // Phase 3: frame tick, then render once
        app.stream.on_frame(Instant::now());
        terminal.draw(|f| crate::ui::render(f, app))?;
        last_render = Instant::now();
    }

    // Restore terminal
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
    ratatui::restore();

    Ok(())
}
