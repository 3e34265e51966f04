//! Simulated map panel.
//!
//! Draws the world outline on a canvas with one point per marker, colored
//! by the active layer's bucket. The zoom level narrows the canvas bounds
//! around the selected marker (or the meridian when nothing is selected).

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use floatchat_core::data::Marker;
use floatchat_core::map::{bucket, layer_value, ColorBucket, MapLayer};

use crate::app::App;
use crate::ui::bucket_color;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let columns =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).split(area);

    render_canvas(frame, columns[0], app);

    let side = Layout::vertical([Constraint::Min(4), Constraint::Length(10)]).split(columns[1]);
    render_station_list(frame, side[0], app);
    render_detail(frame, side[1], app);
}

fn render_canvas(frame: &mut Frame, area: Rect, app: &App) {
    let layer = app.map.active_layer();
    let title = format!("Ocean Map: {} layer (zoom {})", layer, app.map.zoom());

    let zoom = f64::from(app.map.zoom());
    let half_width = 180.0 / zoom;
    let half_height = 90.0 / zoom;
    let (center_lon, center_lat) = match app.map.selected_marker() {
        Some(marker) => (
            marker.lon.clamp(-180.0 + half_width, 180.0 - half_width),
            marker.lat.clamp(-90.0 + half_height, 90.0 - half_height),
        ),
        None => (0.0, 0.0),
    };

    let canvas = Canvas::default()
        .block(Block::bordered().title(title))
        .marker(symbols::Marker::Braille)
        .x_bounds([center_lon - half_width, center_lon + half_width])
        .y_bounds([center_lat - half_height, center_lat + half_height])
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            for marker in app.map.markers() {
                let color = bucket_color(bucket(marker, layer));
                let coords = [(marker.lon, marker.lat)];
                ctx.draw(&Points {
                    coords: &coords,
                    color,
                });
                if app.map.selected_id() == Some(marker.id) {
                    ctx.print(
                        marker.lon,
                        marker.lat,
                        Line::styled(
                            format!("◉ {}", marker.name),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }
        });
    frame.render_widget(canvas, area);
}

fn render_station_list(frame: &mut Frame, area: Rect, app: &App) {
    let layer = app.map.active_layer();
    let rows: Vec<Row> = app
        .map
        .markers()
        .iter()
        .map(|marker| {
            let level = bucket(marker, layer);
            let row = Row::new(vec![
                Cell::from(marker.name),
                Cell::from(format_value(marker, layer)),
                Cell::from(level_label(level)).style(Style::default().fg(bucket_color(level))),
            ]);
            if app.map.selected_id() == Some(marker.id) {
                row.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(55),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
        ],
    )
    .header(Row::new(vec!["Station", layer_header(layer), "Level"]).style(Style::default().bold()))
    .block(Block::bordered().title("Stations"));
    frame.render_widget(table, area);
}

fn render_detail(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match app.map.selected_marker() {
        Some(marker) => vec![
            Line::styled(marker.name, Style::default().add_modifier(Modifier::BOLD)),
            Line::from(format!("{}", marker.kind)),
            Line::from(format!("Lat {:.1}  Lon {:.1}", marker.lat, marker.lon)),
            Line::from(format!("Temperature  {:.1}°C", marker.temperature_c)),
            Line::from(format!("Wave height  {:.1}m", marker.wave_height_m)),
            Line::from(format!("Wind speed   {:.1} kn", marker.wind_speed_kn)),
            Line::from(format!("Visibility   {:.1} km", marker.visibility_km)),
        ],
        None => vec![Line::styled(
            "No station selected (press n)",
            Style::default().fg(Color::DarkGray),
        )],
    };
    let detail = Paragraph::new(lines).block(Block::bordered().title("Station Detail"));
    frame.render_widget(detail, area);
}

fn format_value(marker: &Marker, layer: MapLayer) -> String {
    let value = layer_value(marker, layer);
    match layer {
        MapLayer::Temperature => format!("{value:.1}°C"),
        MapLayer::WaveHeight => format!("{value:.1}m"),
        MapLayer::WindSpeed => format!("{value:.1} kn"),
    }
}

fn layer_header(layer: MapLayer) -> &'static str {
    match layer {
        MapLayer::Temperature => "Temp",
        MapLayer::WaveHeight => "Waves",
        MapLayer::WindSpeed => "Wind",
    }
}

fn level_label(level: ColorBucket) -> &'static str {
    match level {
        ColorBucket::Low => "low",
        ColorBucket::Medium => "med",
        ColorBucket::High => "high",
    }
}
