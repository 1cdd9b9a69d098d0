//! Scales mapping data space onto chart space.
//!
//! Two kinds are enough for the heat map: a continuous linear scale for axis
//! placement and a quantize scale that buckets temperatures onto the fixed
//! palette.

use crate::color::{Color, HEAT_PALETTE};

/// Linear interpolation from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to its range position. A collapsed domain maps
    /// everything to the start of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < f64::EPSILON {
            return r0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Round-valued tick positions inside the domain, roughly `count` of
    /// them, stepped on a 1/2/5 ladder.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 || (d1 - d0).abs() < f64::EPSILON {
            return vec![d0];
        }
        let step = tick_step(d0, d1, count);
        let start = (d0 / step).ceil();
        let stop = (d1 / step).floor();
        let mut ticks = Vec::new();
        let mut i = start;
        while i <= stop {
            ticks.push(i * step);
            i += 1.0;
        }
        ticks
    }
}

/// Pick a 1/2/5-ladder step so the domain yields about `count` ticks.
fn tick_step(d0: f64, d1: f64, count: usize) -> f64 {
    let raw = (d1 - d0).abs() / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

/// Quantized bucketing of a continuous domain onto the fixed heat palette.
///
/// Buckets are equal width and upper-bound exclusive, except the last which
/// is closed above. A value sitting exactly on a boundary takes the hotter
/// bucket.
#[derive(Debug, Clone, Copy)]
pub struct QuantizeScale {
    domain: (f64, f64),
}

impl QuantizeScale {
    /// Number of output buckets (one per palette color).
    pub const BUCKETS: usize = HEAT_PALETTE.len();

    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Bucket index in `0..11` for a value. Out-of-domain values clamp to the
    /// end buckets; a collapsed domain maps everything to the coldest bucket.
    pub fn bucket(&self, value: f64) -> usize {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span <= 0.0 {
            return 0;
        }
        let scaled = (value - d0) / span * Self::BUCKETS as f64;
        scaled.floor().clamp(0.0, (Self::BUCKETS - 1) as f64) as usize
    }

    /// Palette color for a value.
    pub fn color(&self, value: f64) -> Color {
        HEAT_PALETTE[self.bucket(value)]
    }

    /// The twelve boundary values separating the buckets, coldest first.
    /// Used to label the legend axis.
    pub fn boundaries(&self) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let width = (d1 - d0) / Self::BUCKETS as f64;
        (0..=Self::BUCKETS).map(|i| d0 + i as f64 * width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_resolves_to_hotter_bucket() {
        // Domain [0, 11] gives bucket width exactly 1.
        let scale = QuantizeScale::new((0.0, 11.0));
        assert_eq!(scale.bucket(0.999), 0);
        assert_eq!(scale.bucket(1.0), 1);
        assert_eq!(scale.bucket(10.0), 10);
        // Top of domain stays in the last bucket.
        assert_eq!(scale.bucket(11.0), 10);
    }

    #[test]
    fn test_collapsed_domain() {
        let scale = QuantizeScale::new((5.0, 5.0));
        assert_eq!(scale.bucket(5.0), 0);
        assert_eq!(scale.bucket(100.0), 0);
    }

    #[test]
    fn test_collapsed_linear_domain() {
        let scale = LinearScale::new((3.0, 3.0), (10.0, 20.0));
        assert_eq!(scale.map(3.0), 10.0);
    }

    #[test]
    fn test_tick_step_ladder() {
        assert_eq!(tick_step(0.0, 100.0, 10), 10.0);
        assert_eq!(tick_step(0.0, 100.0, 5), 20.0);
        assert_eq!(tick_step(1753.0, 2015.0, 20), 20.0);
    }
}
