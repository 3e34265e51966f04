//! Layer-driven color bucketing for map markers.
//!
//! Pure and stateless: the bucket is recomputed from the marker's numeric
//! field for the active layer on every read. The marker set is tiny, so
//! there is nothing worth caching.

use super::selection::MapLayer;
use crate::data::Marker;

/// Display color bucket for a marker under the active layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBucket {
    Low,
    Medium,
    High,
}

/// Two fixed thresholds per layer: strictly above the first is `High`,
/// strictly above the second is `Medium`, anything else is `Low`.
fn thresholds(layer: MapLayer) -> (f64, f64) {
    match layer {
        MapLayer::Temperature => (24.0, 22.0),
        MapLayer::WaveHeight => (2.0, 1.5),
        MapLayer::WindSpeed => (15.0, 12.0),
    }
}

/// The marker field the given layer reads.
pub fn layer_value(marker: &Marker, layer: MapLayer) -> f64 {
    match layer {
        MapLayer::Temperature => marker.temperature_c,
        MapLayer::WaveHeight => marker.wave_height_m,
        MapLayer::WindSpeed => marker.wind_speed_kn,
    }
}

/// Computes the color bucket for `marker` under `layer`.
pub fn bucket(marker: &Marker, layer: MapLayer) -> ColorBucket {
    let value = layer_value(marker, layer);
    let (high, medium) = thresholds(layer);
    if value > high {
        ColorBucket::High
    } else if value > medium {
        ColorBucket::Medium
    } else {
        ColorBucket::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StationKind;

    fn marker(temperature_c: f64, wave_height_m: f64, wind_speed_kn: f64) -> Marker {
        Marker {
            id: "test",
            name: "Test Station",
            lat: 0.0,
            lon: 0.0,
            temperature_c,
            wave_height_m,
            wind_speed_kn,
            visibility_km: 10.0,
            kind: StationKind::Buoy,
        }
    }

    #[test]
    fn test_temperature_above_high_threshold() {
        let m = marker(24.3, 0.0, 0.0);
        assert_eq!(bucket(&m, MapLayer::Temperature), ColorBucket::High);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Exactly on a threshold falls into the lower bucket
        let m = marker(24.0, 2.0, 15.0);
        assert_eq!(bucket(&m, MapLayer::Temperature), ColorBucket::Medium);
        assert_eq!(bucket(&m, MapLayer::WaveHeight), ColorBucket::Medium);
        assert_eq!(bucket(&m, MapLayer::WindSpeed), ColorBucket::Medium);
    }

    #[test]
    fn test_switching_layer_recomputes_from_the_other_field() {
        // High on the temperature layer, but its wave height of 1.8m only
        // reaches the medium bucket
        let m = marker(24.3, 1.8, 0.0);
        assert_eq!(bucket(&m, MapLayer::Temperature), ColorBucket::High);
        assert_eq!(bucket(&m, MapLayer::WaveHeight), ColorBucket::Medium);
    }

    #[test]
    fn test_wave_and_wind_high_buckets_start_above_two_and_fifteen() {
        let m = marker(0.0, 2.1, 16.0);
        assert_eq!(bucket(&m, MapLayer::WaveHeight), ColorBucket::High);
        assert_eq!(bucket(&m, MapLayer::WindSpeed), ColorBucket::High);
    }

    #[test]
    fn test_low_buckets() {
        let m = marker(3.2, 1.1, 8.4);
        assert_eq!(bucket(&m, MapLayer::Temperature), ColorBucket::Low);
        assert_eq!(bucket(&m, MapLayer::WaveHeight), ColorBucket::Low);
        assert_eq!(bucket(&m, MapLayer::WindSpeed), ColorBucket::Low);
    }

    #[test]
    fn test_layer_value_reads_matching_field() {
        let m = marker(21.0, 1.6, 13.0);
        assert_eq!(layer_value(&m, MapLayer::Temperature), 21.0);
        assert_eq!(layer_value(&m, MapLayer::WaveHeight), 1.6);
        assert_eq!(layer_value(&m, MapLayer::WindSpeed), 13.0);
    }
}
