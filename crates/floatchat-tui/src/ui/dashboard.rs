//! Metrics dashboard panel.
//!
//! Renders the fixed sample snapshot: headline metric cards, the
//! temperature trend chart, ocean coverage, daily sensor activity, current
//! patterns, and the recent-datasets table.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, BarChart, Block, Cell, Chart, Dataset, Gauge, GraphType, Paragraph, Row, Table,
};
use ratatui::Frame;

use floatchat_core::data::{
    DatasetStatus, Trend, CURRENT_PATTERNS, DAILY_ACTIVITY, OCEAN_COVERAGE, OCEAN_METRICS,
    RECENT_DATASETS, TEMPERATURE_TREND,
};

const REGION_COLORS: [Color; 4] = [Color::Blue, Color::Cyan, Color::Magenta, Color::Green];

pub fn render(frame: &mut Frame, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(5),
        Constraint::Percentage(35),
        Constraint::Percentage(30),
        Constraint::Min(6),
    ])
    .split(area);

    render_metric_cards(frame, rows[0]);
    render_trend_row(frame, rows[1]);
    render_activity_row(frame, rows[2]);
    render_recent_datasets(frame, rows[3]);
}

fn render_metric_cards(frame: &mut Frame, area: Rect) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for (metric, column) in OCEAN_METRICS.iter().zip(columns.iter()) {
        let (arrow, change_color) = match metric.trend {
            Trend::Up => ("▲", Color::Green),
            Trend::Down => ("▼", Color::Red),
        };
        let card = Paragraph::new(vec![
            Line::styled(metric.value, Style::default().add_modifier(Modifier::BOLD)),
            Line::from(vec![
                Span::styled(
                    format!("{arrow} {}", metric.change),
                    Style::default().fg(change_color),
                ),
                Span::styled(" from last week", Style::default().fg(Color::DarkGray)),
            ]),
        ])
        .block(Block::bordered().title(metric.title));
        frame.render_widget(card, *column);
    }
}

fn render_trend_row(frame: &mut Frame, area: Rect) {
    let columns =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).split(area);

    // Two series over the same six months, indexed by position.
    let observed: Vec<(f64, f64)> = TEMPERATURE_TREND
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.observed))
        .collect();
    let average: Vec<(f64, f64)> = TEMPERATURE_TREND
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.average))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("observed")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&observed),
        Dataset::default()
            .name("average")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&average),
    ];

    let month_labels: Vec<Span> = TEMPERATURE_TREND
        .iter()
        .map(|p| Span::raw(p.month))
        .collect();

    let chart = Chart::new(datasets)
        .block(Block::bordered().title("Ocean Temperature Trends"))
        .x_axis(
            Axis::default()
                .bounds([0.0, (TEMPERATURE_TREND.len() - 1) as f64])
                .labels(month_labels),
        )
        .y_axis(
            Axis::default()
                .bounds([20.0, 30.0])
                .labels(vec![Span::raw("20°C"), Span::raw("25°C"), Span::raw("30°C")]),
        );
    frame.render_widget(chart, columns[0]);

    render_coverage(frame, columns[1]);
}

fn render_coverage(frame: &mut Frame, area: Rect) {
    let block = Block::bordered().title("Ocean Coverage");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1); 4]).split(inner);
    for ((region, row), color) in OCEAN_COVERAGE.iter().zip(rows.iter()).zip(REGION_COLORS) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(f64::from(region.share) / 100.0)
            .label(format!("{} {}%", region.region, region.share));
        frame.render_widget(gauge, *row);
    }
}

fn render_activity_row(frame: &mut Frame, area: Rect) {
    let columns =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    let sensors: Vec<(&str, u64)> = DAILY_ACTIVITY.iter().map(|b| (b.hour, b.sensors)).collect();
    let alerts: u64 = DAILY_ACTIVITY.iter().map(|b| b.alerts).sum();
    let activity = BarChart::default()
        .block(Block::bordered().title(format!("Daily Activity ({alerts} alerts / 24h)")))
        .data(&sensors)
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(activity, columns[0]);

    let rows: Vec<Row> = CURRENT_PATTERNS
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.region),
                Cell::from(format!("{:.1} kn", p.speed_kn)),
                Cell::from(p.direction),
            ])
        })
        .collect();
    let currents = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(Row::new(vec!["Region", "Speed", "Direction"]).style(Style::default().bold()))
    .block(Block::bordered().title("Current Patterns"));
    frame.render_widget(currents, columns[1]);
}

fn render_recent_datasets(frame: &mut Frame, area: Rect) {
    let rows: Vec<Row> = RECENT_DATASETS
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.name),
                Cell::from(entry.status.to_string()).style(status_style(entry.status)),
                Cell::from(entry.last_updated),
                Cell::from(entry.size),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45),
            Constraint::Percentage(15),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(
        Row::new(vec!["Dataset", "Status", "Last Updated", "Size"])
            .style(Style::default().bold()),
    )
    .block(Block::bordered().title("Recent Datasets"));
    frame.render_widget(table, area);
}

fn status_style(status: DatasetStatus) -> Style {
    match status {
        DatasetStatus::Active => Style::default().fg(Color::Cyan),
        DatasetStatus::Processing => Style::default().fg(Color::Yellow),
        DatasetStatus::Complete => Style::default().fg(Color::Green),
    }
}
