//! SVG rendering for the climate heat map.
//!
//! Produces a standalone document: one rectangle per record, year and month
//! axes, an eleven-swatch legend with boundary labels, and an embedded hover
//! tooltip.

pub mod axis;
pub mod chart;
pub mod legend;
pub mod raster;
pub mod tooltip;

pub use chart::render_chart;

use thiserror::Error;

/// Errors raised while building or rasterizing the chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Dataset(#[from] heatmap_common::HeatmapError),

    #[error("Markup formatting failed: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Rasterization failed: {0}")]
    Raster(String),
}
