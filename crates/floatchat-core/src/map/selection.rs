//! Map selection state: active data layer, selected marker, zoom level.

use strum::Display;

use crate::data::Marker;

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 10;
pub const DEFAULT_ZOOM: u8 = 6;

/// Which numeric field of a marker drives its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum MapLayer {
    #[default]
    Temperature,
    #[strum(serialize = "Wave Height")]
    WaveHeight,
    #[strum(serialize = "Wind Speed")]
    WindSpeed,
}

/// Selection state over the fixed marker set.
///
/// The selected marker id, when present, always refers to an entry of the
/// marker set; unknown ids are rejected at the boundary so the reference
/// can never dangle.
#[derive(Debug, Clone)]
pub struct MapSelection {
    markers: &'static [Marker],
    active_layer: MapLayer,
    selected: Option<&'static str>,
    zoom: u8,
    default_zoom: u8,
}

impl MapSelection {
    /// Creates a selection over `markers` starting at `default_zoom`
    /// (clamped to the valid range), with no marker selected.
    pub fn new(markers: &'static [Marker], default_zoom: u8) -> Self {
        let default_zoom = default_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        Self {
            markers,
            active_layer: MapLayer::default(),
            selected: None,
            zoom: default_zoom,
            default_zoom,
        }
    }

    pub fn markers(&self) -> &'static [Marker] {
        self.markers
    }

    pub fn active_layer(&self) -> MapLayer {
        self.active_layer
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn selected_id(&self) -> Option<&'static str> {
        self.selected
    }

    /// The selected marker, looked up in the fixed set.
    pub fn selected_marker(&self) -> Option<&'static Marker> {
        self.selected
            .and_then(|id| self.markers.iter().find(|m| m.id == id))
    }

    /// Sets the active layer. Always succeeds.
    pub fn select_layer(&mut self, layer: MapLayer) {
        self.active_layer = layer;
    }

    /// Cycles to the next layer in declaration order.
    pub fn cycle_layer(&mut self) {
        self.active_layer = match self.active_layer {
            MapLayer::Temperature => MapLayer::WaveHeight,
            MapLayer::WaveHeight => MapLayer::WindSpeed,
            MapLayer::WindSpeed => MapLayer::Temperature,
        };
    }

    /// Selects the marker with the given id, if it exists in the fixed
    /// set. Unknown ids leave the selection unchanged.
    pub fn select_marker(&mut self, id: &str) {
        match self.markers.iter().find(|m| m.id == id) {
            Some(marker) => self.selected = Some(marker.id),
            None => tracing::debug!(id, "ignoring unknown marker id"),
        }
    }

    /// Clears the selection.
    pub fn clear_marker(&mut self) {
        self.selected = None;
    }

    /// Moves the selection to the next marker, wrapping around. With no
    /// current selection, selects the first marker.
    pub fn select_next(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        let next = match self.selected_index() {
            Some(i) => (i + 1) % self.markers.len(),
            None => 0,
        };
        self.selected = Some(self.markers[next].id);
    }

    /// Moves the selection to the previous marker, wrapping around. With
    /// no current selection, selects the last marker.
    pub fn select_prev(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        let prev = match self.selected_index() {
            Some(0) | None => self.markers.len() - 1,
            Some(i) => i - 1,
        };
        self.selected = Some(self.markers[prev].id);
    }

    /// Increments the zoom level, clamped to the valid range.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    /// Decrements the zoom level, clamped to the valid range.
    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Resets the zoom level to its default.
    pub fn reset_zoom(&mut self) {
        self.zoom = self.default_zoom;
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
            .and_then(|id| self.markers.iter().position(|m| m.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MARKERS;

    fn selection() -> MapSelection {
        MapSelection::new(MARKERS, DEFAULT_ZOOM)
    }

    #[test]
    fn test_initial_state() {
        let map = selection();
        assert_eq!(map.active_layer(), MapLayer::Temperature);
        assert_eq!(map.zoom(), 6);
        assert!(map.selected_id().is_none());
    }

    #[test]
    fn test_unknown_marker_id_leaves_selection_unchanged() {
        let mut map = selection();
        map.select_marker("stn-01");
        map.select_marker("no-such-station");
        assert_eq!(map.selected_id(), Some("stn-01"));
    }

    #[test]
    fn test_clear_marker_never_dangles() {
        let mut map = selection();
        map.select_marker("stn-02");
        map.clear_marker();
        assert!(map.selected_id().is_none());
        assert!(map.selected_marker().is_none());
    }

    #[test]
    fn test_selected_marker_resolves_to_fixed_entry() {
        let mut map = selection();
        map.select_marker("stn-04");
        let marker = map.selected_marker().unwrap();
        assert_eq!(marker.name, "Banda Sea Buoy 2");
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut map = selection();
        for _ in 0..20 {
            map.zoom_in();
        }
        assert_eq!(map.zoom(), MAX_ZOOM);
        for _ in 0..20 {
            map.zoom_out();
        }
        assert_eq!(map.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_reset_zoom_yields_default() {
        let mut map = selection();
        map.zoom_in();
        map.zoom_in();
        map.reset_zoom();
        assert_eq!(map.zoom(), 6);
    }

    #[test]
    fn test_out_of_range_default_zoom_is_clamped_at_construction() {
        let map = MapSelection::new(MARKERS, 99);
        assert_eq!(map.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_marker_cycling_wraps() {
        let mut map = selection();
        map.select_next();
        assert_eq!(map.selected_id(), Some(MARKERS[0].id));
        map.select_prev();
        assert_eq!(map.selected_id(), Some(MARKERS[MARKERS.len() - 1].id));
        map.select_next();
        assert_eq!(map.selected_id(), Some(MARKERS[0].id));
    }

    #[test]
    fn test_cycle_layer_covers_all_layers() {
        let mut map = selection();
        map.cycle_layer();
        assert_eq!(map.active_layer(), MapLayer::WaveHeight);
        map.cycle_layer();
        assert_eq!(map.active_layer(), MapLayer::WindSpeed);
        map.cycle_layer();
        assert_eq!(map.active_layer(), MapLayer::Temperature);
    }
}
