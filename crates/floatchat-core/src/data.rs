//! Fixed sample datasets.
//!
//! Everything the explorer displays comes from the read-only tables in this
//! module. Nothing here is fetched or generated; the values are the sample
//! snapshot the dashboard and map render.

use strum::Display;

/// Kind of observation station behind a map marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StationKind {
    Buoy,
    #[strum(serialize = "Research Vessel")]
    ResearchVessel,
    #[strum(serialize = "Coastal Station")]
    CoastalStation,
}

/// One fixed sample data point rendered on the map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub temperature_c: f64,
    pub wave_height_m: f64,
    pub wind_speed_kn: f64,
    pub visibility_km: f64,
    pub kind: StationKind,
}

/// The fixed marker set. Read-only; selection state refers to it by id.
pub const MARKERS: &[Marker] = &[
    Marker {
        id: "stn-01",
        name: "Coral Sea Buoy 14",
        lat: -18.2,
        lon: 152.6,
        temperature_c: 24.3,
        wave_height_m: 2.1,
        wind_speed_kn: 14.0,
        visibility_km: 15.2,
        kind: StationKind::Buoy,
    },
    Marker {
        id: "stn-02",
        name: "North Atlantic Drifter 3",
        lat: 41.7,
        lon: -49.9,
        temperature_c: 18.4,
        wave_height_m: 3.2,
        wind_speed_kn: 22.5,
        visibility_km: 9.8,
        kind: StationKind::Buoy,
    },
    Marker {
        id: "stn-03",
        name: "RV Thalassa",
        lat: 35.1,
        lon: -140.8,
        temperature_c: 21.9,
        wave_height_m: 1.8,
        wind_speed_kn: 11.2,
        visibility_km: 18.0,
        kind: StationKind::ResearchVessel,
    },
    Marker {
        id: "stn-04",
        name: "Banda Sea Buoy 2",
        lat: -5.6,
        lon: 126.4,
        temperature_c: 28.9,
        wave_height_m: 0.9,
        wind_speed_kn: 8.4,
        visibility_km: 20.1,
        kind: StationKind::Buoy,
    },
    Marker {
        id: "stn-05",
        name: "Agulhas Coastal Station",
        lat: -34.0,
        lon: 25.6,
        temperature_c: 22.7,
        wave_height_m: 2.8,
        wind_speed_kn: 17.9,
        visibility_km: 12.4,
        kind: StationKind::CoastalStation,
    },
    Marker {
        id: "stn-06",
        name: "Fram Strait Buoy 7",
        lat: 78.9,
        lon: 2.1,
        temperature_c: 3.2,
        wave_height_m: 1.1,
        wind_speed_kn: 19.6,
        visibility_km: 6.5,
        kind: StationKind::Buoy,
    },
];

/// Week-over-week direction of a headline metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// One headline metric card on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

pub const OCEAN_METRICS: &[MetricCard] = &[
    MetricCard {
        title: "Sea Surface Temperature",
        value: "24.3°C",
        change: "+0.8°C",
        trend: Trend::Up,
    },
    MetricCard {
        title: "Wave Height",
        value: "2.1m",
        change: "-0.3m",
        trend: Trend::Down,
    },
    MetricCard {
        title: "Visibility",
        value: "15.2km",
        change: "+2.1km",
        trend: Trend::Up,
    },
    MetricCard {
        title: "Data Points",
        value: "1.2M",
        change: "+156K",
        trend: Trend::Up,
    },
];

/// One month of the temperature trend chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperaturePoint {
    pub month: &'static str,
    pub observed: f64,
    pub average: f64,
}

pub const TEMPERATURE_TREND: &[TemperaturePoint] = &[
    TemperaturePoint { month: "Jan", observed: 22.1, average: 21.8 },
    TemperaturePoint { month: "Feb", observed: 23.2, average: 22.5 },
    TemperaturePoint { month: "Mar", observed: 24.8, average: 23.9 },
    TemperaturePoint { month: "Apr", observed: 26.1, average: 25.2 },
    TemperaturePoint { month: "May", observed: 27.3, average: 26.8 },
    TemperaturePoint { month: "Jun", observed: 28.9, average: 28.1 },
];

/// Share of collected data per ocean region, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionShare {
    pub region: &'static str,
    pub share: u8,
}

pub const OCEAN_COVERAGE: &[RegionShare] = &[
    RegionShare { region: "Atlantic", share: 35 },
    RegionShare { region: "Pacific", share: 45 },
    RegionShare { region: "Indian", share: 15 },
    RegionShare { region: "Arctic", share: 5 },
];

/// Sensor activity within one four-hour bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityBucket {
    pub hour: &'static str,
    pub sensors: u64,
    pub alerts: u64,
}

pub const DAILY_ACTIVITY: &[ActivityBucket] = &[
    ActivityBucket { hour: "00", sensors: 1200, alerts: 2 },
    ActivityBucket { hour: "04", sensors: 1150, alerts: 1 },
    ActivityBucket { hour: "08", sensors: 1300, alerts: 4 },
    ActivityBucket { hour: "12", sensors: 1450, alerts: 3 },
    ActivityBucket { hour: "16", sensors: 1380, alerts: 2 },
    ActivityBucket { hour: "20", sensors: 1250, alerts: 1 },
];

/// Current speed and direction for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentPattern {
    pub region: &'static str,
    pub speed_kn: f64,
    pub direction: &'static str,
}

pub const CURRENT_PATTERNS: &[CurrentPattern] = &[
    CurrentPattern { region: "North Atlantic", speed_kn: 2.3, direction: "NE" },
    CurrentPattern { region: "Pacific", speed_kn: 1.8, direction: "W" },
    CurrentPattern { region: "Indian Ocean", speed_kn: 2.1, direction: "SW" },
    CurrentPattern { region: "Arctic", speed_kn: 0.9, direction: "E" },
];

/// Processing status of a sample dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DatasetStatus {
    Active,
    Processing,
    Complete,
}

/// One row of the recent-datasets table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetEntry {
    pub name: &'static str,
    pub status: DatasetStatus,
    pub last_updated: &'static str,
    pub size: &'static str,
}

pub const RECENT_DATASETS: &[DatasetEntry] = &[
    DatasetEntry {
        name: "Pacific Ocean Temperature Grid",
        status: DatasetStatus::Active,
        last_updated: "2 min ago",
        size: "2.3 GB",
    },
    DatasetEntry {
        name: "Atlantic Current Patterns",
        status: DatasetStatus::Processing,
        last_updated: "15 min ago",
        size: "1.8 GB",
    },
    DatasetEntry {
        name: "Coral Reef Health Monitoring",
        status: DatasetStatus::Complete,
        last_updated: "1 hour ago",
        size: "945 MB",
    },
    DatasetEntry {
        name: "Deep Sea Pressure Readings",
        status: DatasetStatus::Active,
        last_updated: "5 min ago",
        size: "3.1 GB",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_ids_are_unique() {
        for (i, a) in MARKERS.iter().enumerate() {
            for b in &MARKERS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_marker_coordinates_are_in_range() {
        for marker in MARKERS {
            assert!((-90.0..=90.0).contains(&marker.lat), "{}", marker.id);
            assert!((-180.0..=180.0).contains(&marker.lon), "{}", marker.id);
        }
    }

    #[test]
    fn test_coverage_shares_sum_to_full() {
        let total: u8 = OCEAN_COVERAGE.iter().map(|r| r.share).sum();
        assert_eq!(total, 100);
    }
}
