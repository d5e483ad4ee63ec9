// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart geometry.
//!
//! Bars run horizontally: a label gutter on the left, the bar track in the
//! middle, and a compact value label after each bar. Lengths are
//! proportional to the largest value in view, with a minimum visible length
//! so zero and near-zero categories stay visible and clickable.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use glimt_core::{Primitive, RectPrim, TextAnchor, TextBaseline, TextPrim};
use peniko::color::palette::css;

use crate::format::{MAX_LABEL_CHARS, format_magnitude, truncate};
use crate::measure::TextMeasurer;
use crate::palette::Palette;
use crate::scale::ScaleBand;
use crate::z_order;

/// Minimum bar length as a fraction of the track.
pub const MIN_BAR_FRACTION: f64 = 0.08;

/// Gap between the label gutter and the track, and between a bar end and
/// its value label.
const TRACK_GAP: f64 = 8.0;

/// A bar chart (one horizontal bar per category).
#[derive(Clone, Debug)]
pub struct BarChartSpec<'a> {
    /// Category labels, one per value.
    pub labels: &'a [String],
    /// Series values, one per label.
    pub values: &'a [f64],
    /// Plot rectangle the rows are laid out in.
    pub plot: Rect,
    /// Categorical color assignment.
    pub palette: Palette,
    /// Minimum bar length as a fraction of the track.
    pub min_fraction: f64,
    /// Font size for category and value labels.
    pub font_size: f64,
}

impl<'a> BarChartSpec<'a> {
    /// Creates a bar chart spec with default styling.
    pub fn new(labels: &'a [String], values: &'a [f64], plot: Rect) -> Self {
        Self {
            labels,
            values,
            plot,
            palette: Palette::ANALYTICS,
            min_fraction: MIN_BAR_FRACTION,
            font_size: 10.0,
        }
    }

    /// Sets the color palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the minimum visible bar fraction.
    pub fn with_min_fraction(mut self, min_fraction: f64) -> Self {
        self.min_fraction = min_fraction.clamp(0.0, 1.0);
        self
    }

    /// Generates primitives for every category row.
    ///
    /// The measurer sizes the label gutter and the value column; the track
    /// occupies whatever width remains.
    pub fn primitives(&self, measurer: &dyn TextMeasurer) -> Vec<Primitive> {
        let n = self.labels.len().min(self.values.len());
        if n == 0 {
            return Vec::new();
        }

        let display: Vec<String> = self.labels[..n]
            .iter()
            .map(|l| truncate(l, MAX_LABEL_CHARS))
            .collect();
        let value_text: Vec<String> = self.values[..n]
            .iter()
            .map(|&v| format_magnitude(if v.is_finite() { v } else { 0.0 }))
            .collect();

        let label_gutter = display
            .iter()
            .map(|l| measurer.measure(l, self.font_size).0)
            .fold(0.0, f64::max);
        let value_gutter = value_text
            .iter()
            .map(|t| measurer.measure(t, self.font_size).0)
            .fold(0.0, f64::max);

        let track_x0 = self.plot.x0 + label_gutter + TRACK_GAP;
        let track = (self.plot.x1 - value_gutter - TRACK_GAP - track_x0).max(0.0);

        let max = self
            .values[..n]
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);

        let band = ScaleBand::new((self.plot.y0, self.plot.y1), n).with_padding(0.25, 0.1);
        let bw = band.band_width();

        let mut out = Vec::with_capacity(n * 3);
        for i in 0..n {
            let y = band.position(i);
            let mid_y = y + bw * 0.5;

            // Proportional length against the max in view, clamped so small
            // values stay visible; an all-zero (or negative) series renders
            // every bar at the minimum length.
            let fraction = if max > 0.0 {
                let v = self.values[i];
                let v = if v.is_finite() { v.max(0.0) } else { 0.0 };
                (v / max).clamp(self.min_fraction, 1.0)
            } else {
                self.min_fraction
            };
            let len = fraction * track;

            out.push(Primitive::Text(TextPrim {
                pos: Point::new(track_x0 - TRACK_GAP, mid_y),
                text: display[i].clone(),
                font_size: self.font_size,
                fill: css::BLACK.into(),
                anchor: TextAnchor::End,
                baseline: TextBaseline::Middle,
                z_index: z_order::AXIS_LABELS,
            }));
            out.push(Primitive::Rect(RectPrim {
                rect: Rect::new(track_x0, y, track_x0 + len, y + bw),
                fill: self.palette.color(i).into(),
                z_index: z_order::SERIES_FILL,
            }));
            out.push(Primitive::Text(TextPrim {
                pos: Point::new(track_x0 + len + TRACK_GAP, mid_y),
                text: value_text[i].clone(),
                font_size: self.font_size,
                fill: css::DIM_GRAY.into(),
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
                z_index: z_order::VALUE_LABELS,
            }));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    fn plot() -> Rect {
        Rect::new(0.0, 0.0, 320.0, 200.0)
    }

    fn bar_widths(labels: &[&str], values: &[f64]) -> Vec<f64> {
        let labels: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        let prims = BarChartSpec::new(&labels, values, plot()).primitives(&HeuristicTextMeasurer);
        prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect(r) => Some(r.rect.width()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn larger_values_get_strictly_longer_bars() {
        let widths = bar_widths(&["Smartphones", "Laptops"], &[11_649.84, 14_599.89]);
        assert_eq!(widths.len(), 2);
        assert!(widths[1] > widths[0]);
    }

    #[test]
    fn the_max_value_fills_the_track() {
        // Same labels, so both charts share gutter widths and track length.
        let alone = bar_widths(&["X", "Y"], &[5.0, 5.0]);
        let spread = bar_widths(&["X", "Y"], &[5.0, 40.0]);
        assert_eq!(alone[0], spread[1]);
        // 5/40 = 12.5% of the track, above the minimum clamp.
        assert!((spread[0] / spread[1] - 0.125).abs() < 1e-9);
    }

    #[test]
    fn small_values_clamp_to_the_minimum_fraction() {
        let widths = bar_widths(&["a", "b"], &[0.0, 100.0]);
        assert!((widths[0] / widths[1] - MIN_BAR_FRACTION).abs() < 1e-9);
    }

    #[test]
    fn all_zero_series_renders_minimum_length_bars() {
        let widths = bar_widths(&["a", "b", "c"], &[0.0, 0.0, 0.0]);
        assert_eq!(widths.len(), 3);
        assert!(widths[0] > 0.0);
        assert!((widths[0] - widths[1]).abs() < 1e-9);
        assert!((widths[1] - widths[2]).abs() < 1e-9);
    }

    #[test]
    fn empty_series_renders_nothing() {
        assert!(bar_widths(&[], &[]).is_empty());
    }
}
