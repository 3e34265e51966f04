//! Rendering of the explorer views.
//!
//! Pure read-side: every widget is rebuilt from the current state on each
//! draw. The chat sidebar takes 40% of the body when open, narrowing
//! whichever panel is active.

mod chat;
mod dashboard;
mod map;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::block::Title;
use ratatui::widgets::{Block, Paragraph, Tabs};
use ratatui::Frame;

use floatchat_core::map::ColorBucket;
use floatchat_core::view::Panel;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(frame.size());

    render_header(frame, chunks[0], app);
    render_body(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let selected = match app.view.active_panel() {
        Panel::Dashboard => 0,
        Panel::Map => 1,
    };
    let tabs = Tabs::new(vec!["Dashboard", "Map View"])
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::bordered()
                .title("FloatChat-AI Ocean Data Explorer")
                .title(
                    Title::from(Line::styled(
                        "≈ Live Data Active ",
                        Style::default().fg(Color::Cyan),
                    ))
                    .alignment(Alignment::Right),
                ),
        );
    frame.render_widget(tabs, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let panel_area = if app.view.chat_open() {
        let columns =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
        chat::render(frame, columns[1], app);
        columns[0]
    } else {
        area
    };

    match app.view.active_panel() {
        Panel::Dashboard => dashboard::render(frame, panel_area),
        Panel::Map => map::render(frame, panel_area, app),
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.view.chat_open() {
        " Esc close chat • Enter send"
    } else {
        " q quit • d/m/Tab panel • c chat • l layer • n/p marker • x clear • +/- zoom • 0 reset"
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

/// Display color for a marker's bucket under the active layer.
pub(crate) fn bucket_color(bucket: ColorBucket) -> Color {
    match bucket {
        ColorBucket::Low => Color::Green,
        ColorBucket::Medium => Color::Yellow,
        ColorBucket::High => Color::Red,
    }
}
