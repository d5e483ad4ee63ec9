// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale utilities.
//!
//! These types provide the coordinate mapping behavior shared by the chart
//! builders: a linear value scale fitted to a series, and a discrete band
//! scale for category row placement.

extern crate alloc;

use alloc::vec::Vec;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a scale mapping `domain` values to `range` values.
    ///
    /// A degenerate domain (`d1 == d0`) is widened to span 1 so that
    /// [`ScaleLinear::map`] never divides by zero. This is an explicit
    /// policy for all-equal series, not a silent fallback.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, d1) = domain;
        let domain = if d1 == d0 { (d0, d0 + 1.0) } else { domain };
        Self { domain, range }
    }

    /// Fits a scale to a series of values.
    ///
    /// Non-finite entries are ignored (upstream data may contain
    /// placeholders). With `zero_floor`, the domain minimum is clamped to
    /// `min(0, actual_min)` so bar-style charts keep a zero baseline. A
    /// series with no finite values gets the unit domain `(0, 1)`.
    pub fn fit(values: &[f64], range: (f64, f64), zero_floor: bool) -> Self {
        let (mut d0, d1) = infer_domain(values).unwrap_or((0.0, 1.0));
        if zero_floor {
            d0 = d0.min(0.0);
        }
        Self::new((d0, d1), range)
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = (x - d0) / (d1 - d0);
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the effective domain.
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the effective domain.
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns `count + 1` evenly spaced domain values, from `domain_max`
    /// down to `domain_min`, for gridline and tick-label placement.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 {
            return alloc::vec![d1];
        }
        let step = (d1 - d0) / count as f64;
        (0..=count).map(|i| d1 - step * i as f64).collect()
    }
}

/// A discrete band scale for categorical charts.
///
/// Bands are laid out along `range` with proportional inner/outer padding,
/// the usual d3/Vega band-scale arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the position of the band at `index`.
    pub fn position(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }
}

/// Infers a `(min, max)` domain from a series.
///
/// Non-finite values are ignored. Returns `None` if no finite values are
/// present.
pub fn infer_domain(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn map_is_monotonic_over_the_series() {
        let values = [3.0, -1.0, 7.5, 7.5, 0.0];
        let s = ScaleLinear::fit(&values, (0.0, 100.0), false);
        let mut sorted = values;
        sorted.sort_by(f64::total_cmp);
        for pair in sorted.windows(2) {
            assert!(
                s.map(pair[0]) <= s.map(pair[1]),
                "projection must preserve order"
            );
        }
    }

    #[test]
    fn degenerate_domain_is_widened_to_unit_span() {
        let s = ScaleLinear::fit(&[5.0, 5.0, 5.0], (0.0, 10.0), false);
        assert_eq!(s.domain_min(), 5.0);
        assert_eq!(s.domain_max(), 6.0);
        // All-equal values land on the range start rather than NaN.
        assert_eq!(s.map(5.0), 0.0);
    }

    #[test]
    fn zero_floor_clamps_the_domain_minimum() {
        let s = ScaleLinear::fit(&[10.0, 20.0], (0.0, 1.0), true);
        assert_eq!(s.domain_min(), 0.0);
        // A negative minimum is kept as-is.
        let s = ScaleLinear::fit(&[-4.0, 20.0], (0.0, 1.0), true);
        assert_eq!(s.domain_min(), -4.0);
    }

    #[test]
    fn non_finite_values_are_ignored_when_fitting() {
        let s = ScaleLinear::fit(&[f64::NAN, 2.0, f64::INFINITY, 8.0], (0.0, 1.0), false);
        assert_eq!(s.domain_min(), 2.0);
        assert_eq!(s.domain_max(), 8.0);
        assert_eq!(infer_domain(&[f64::NAN]), None);
    }

    #[test]
    fn ticks_run_from_max_down_to_min() {
        let s = ScaleLinear::new((0.0, 100.0), (0.0, 1.0));
        let ticks = s.ticks(4);
        assert_eq!(ticks, alloc::vec![100.0, 75.0, 50.0, 25.0, 0.0]);
    }

    #[test]
    fn band_positions_are_monotonic() {
        let band = ScaleBand::new((0.0, 100.0), 5);
        assert!(band.position(0) < band.position(1));
        assert!(band.position(1) < band.position(2));
        assert!(band.band_width() > 0.0);
    }
}
