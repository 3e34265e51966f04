//! Map domain module.
//!
//! - `selection`: layer, marker and zoom state (`MapSelection`, `MapLayer`)
//! - `color`: layer-driven color bucketing for markers

mod color;
mod selection;

// Re-export public API
pub use color::{bucket, layer_value, ColorBucket};
pub use selection::{MapLayer, MapSelection, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
