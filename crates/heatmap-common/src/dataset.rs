//! Wire-format dataset model.
//!
//! The upstream JSON document is shaped as
//! `{ "baseTemperature": f64, "monthlyVariance": [{year, month, variance}] }`.
//! Loaded once per run and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};
use crate::month::MonthIndex;

/// One (year, month) temperature reading, stored as the deviation from the
/// dataset's base temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub year: i32,
    pub month: u8,
    pub variance: f64,
}

impl TemperatureRecord {
    /// Absolute temperature: dataset base plus this record's variance.
    pub fn absolute_temp(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }

    /// Zero-based placement index for this record's month.
    pub fn month_index(&self) -> HeatmapResult<MonthIndex> {
        MonthIndex::from_calendar(self.month).ok_or(HeatmapError::MonthOutOfRange {
            year: self.year,
            month: self.month,
        })
    }
}

/// The loaded dataset: a base temperature and one record per (year, month).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<TemperatureRecord>,
}

impl Dataset {
    /// Parse a dataset from its JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject datasets the renderer cannot place: empty record lists,
    /// out-of-range months, non-finite variances.
    pub fn validate(&self) -> HeatmapResult<()> {
        if self.monthly_variance.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }
        for record in &self.monthly_variance {
            record.month_index()?;
            if !record.variance.is_finite() {
                return Err(HeatmapError::NonFiniteVariance {
                    year: record.year,
                    month: record.month,
                });
            }
        }
        Ok(())
    }

    pub fn record_count(&self) -> usize {
        self.monthly_variance.len()
    }

    /// Inclusive `[min, max]` span of record years. `(0, 0)` when empty.
    pub fn year_domain(&self) -> (i32, i32) {
        let min = self.monthly_variance.iter().map(|r| r.year).min();
        let max = self.monthly_variance.iter().map(|r| r.year).max();
        match (min, max) {
            (Some(min), Some(max)) => (min, max),
            _ => (0, 0),
        }
    }

    /// Inclusive `[min, max]` span of absolute temperatures. `(0.0, 0.0)`
    /// when empty.
    pub fn temp_domain(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in &self.monthly_variance {
            let temp = record.absolute_temp(self.base_temperature);
            min = min.min(temp);
            max = max.max(temp);
        }
        if min > max {
            (0.0, 0.0)
        } else {
            (min, max)
        }
    }
}
