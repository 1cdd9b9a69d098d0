//! Chart layout and geometry derived from the dataset.

use crate::dataset::Dataset;
use crate::month::MonthIndex;
use crate::scale::{LinearScale, QuantizeScale};

/// Fixed logical dimensions of the drawing surface.
#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1300.0,
            height: 620.0,
            padding: 100.0,
        }
    }
}

/// Derived, read-only geometry: cell size and data domains.
///
/// Computed once from the dataset; pure and deterministic.
#[derive(Debug, Clone, Copy)]
pub struct CellGeometry {
    pub cell_width: f64,
    pub cell_height: f64,
    pub year_domain: (i32, i32),
    pub temp_domain: (f64, f64),
}

impl CellGeometry {
    /// Plan cell sizes and domains for a dataset on the given surface.
    ///
    /// Twelve records share each year column, so the column width is spread
    /// over the padded graph width; a 1px gutter keeps cells distinct.
    pub fn plan(layout: &ChartLayout, dataset: &Dataset) -> Self {
        let records = dataset.record_count() as f64;
        let columns = f64::from(MonthIndex::COUNT);
        Self {
            cell_width: (layout.width - layout.padding * 2.0) / records * columns - 1.0,
            cell_height: (layout.height - layout.padding - 10.0) / columns - 1.0,
            year_domain: dataset.year_domain(),
            temp_domain: dataset.temp_domain(),
        }
    }

    /// Year → x pixel: the year domain spread across the padded width.
    pub fn x_scale(&self, layout: &ChartLayout) -> LinearScale {
        LinearScale::new(
            (self.year_domain.0 as f64, self.year_domain.1 as f64),
            (layout.padding, layout.width - layout.padding),
        )
    }

    /// Month index → y pixel. Cells grow downward from the mapped y, so the
    /// range stops one cell height above the x axis.
    pub fn y_scale(&self, layout: &ChartLayout) -> LinearScale {
        LinearScale::new(
            (0.0, 11.0),
            (10.0, layout.height - layout.padding - self.cell_height),
        )
    }

    /// Absolute temperature → palette bucket.
    pub fn temp_scale(&self) -> QuantizeScale {
        QuantizeScale::new(self.temp_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::TemperatureRecord;

    fn two_year_dataset() -> Dataset {
        let mut records = Vec::new();
        for year in [1990, 1991] {
            for month in 1..=12 {
                records.push(TemperatureRecord {
                    year,
                    month,
                    variance: 0.0,
                });
            }
        }
        Dataset {
            base_temperature: 8.0,
            monthly_variance: records,
        }
    }

    #[test]
    fn test_cell_sizes_for_default_layout() {
        let layout = ChartLayout::default();
        let geometry = CellGeometry::plan(&layout, &two_year_dataset());

        // 24 records: (1300 - 200) / 24 * 12 - 1
        assert!((geometry.cell_width - 549.0).abs() < 1e-9);
        // (620 - 100 - 10) / 12 - 1
        assert!((geometry.cell_height - 41.5).abs() < 1e-9);
    }

    #[test]
    fn test_scale_endpoints() {
        let layout = ChartLayout::default();
        let geometry = CellGeometry::plan(&layout, &two_year_dataset());

        let x = geometry.x_scale(&layout);
        assert_eq!(x.map(1990.0), layout.padding);
        assert_eq!(x.map(1991.0), layout.width - layout.padding);

        let y = geometry.y_scale(&layout);
        assert_eq!(y.map(0.0), 10.0);
        assert_eq!(y.map(11.0), layout.height - layout.padding - geometry.cell_height);
    }
}
