//! Common types shared across the climate heat-map crates.

pub mod color;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod month;
pub mod scale;

pub use color::{Color, HEAT_PALETTE};
pub use dataset::{Dataset, TemperatureRecord};
pub use error::{HeatmapError, HeatmapResult};
pub use geometry::{CellGeometry, ChartLayout};
pub use month::MonthIndex;
pub use scale::{LinearScale, QuantizeScale};
