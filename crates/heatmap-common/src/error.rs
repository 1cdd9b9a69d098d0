//! Error types for the heat-map crates.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for dataset and chart operations.
#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error("Dataset contains no monthly records")]
    EmptyDataset,

    #[error("Record for year {year} has month {month}, expected 1-12")]
    MonthOutOfRange { year: i32, month: u8 },

    #[error("Record for {year}-{month:02} has a non-finite variance")]
    NonFiniteVariance { year: i32, month: u8 },
}
