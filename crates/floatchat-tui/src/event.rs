//! Terminal event loop.
//!
//! Draws, waits up to one tick for input, and advances the application on
//! each tick so due scripted replies get delivered.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::app::{Action, App};
use crate::ui;

pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App, tick_rate: Duration) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = app.handle_key(key) {
                        app.update(action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.update(Action::Tick);
            last_tick = Instant::now();
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
