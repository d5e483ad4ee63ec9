// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend entry derivation and swatch layout.
//!
//! Legend math is shared by every chart family so percentages, colors, and
//! truncation can never drift between a slice and its legend row. Entries
//! are recomputed on every render; the engine caches nothing.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use glimt_core::{LegendEntry, Primitive, RectPrim, TextAnchor, TextBaseline, TextPrim};

use crate::format::{format_magnitude, truncate};
use crate::palette::Palette;
use crate::z_order;

/// Default glyph budget for legend labels.
pub const MAX_LEGEND_CHARS: usize = 18;

/// The share of `total` contributed by `value`.
///
/// Negative and non-finite values contribute nothing, matching the sector
/// builder's angle math, so legend percentages and slice sweeps always
/// agree.
pub(crate) fn fraction_of(value: f64, total: f64) -> f64 {
    if total <= 0.0 || !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    value / total
}

/// Sums a series for percentage/angle math.
///
/// Non-finite entries are treated as 0 and negative entries are clamped to
/// 0; a chart share cannot be negative.
pub(crate) fn series_total(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0))
        .sum()
}

/// Builds one legend entry per category.
///
/// Labels are truncated to [`MAX_LEGEND_CHARS`]; colors come from the same
/// palette assignment as the chart body. A zero (or degenerate) total yields
/// `percent_of_total = 0.0` for every entry rather than `NaN`.
pub fn build_legend(labels: &[impl AsRef<str>], values: &[f64], palette: &Palette) -> Vec<LegendEntry> {
    let total = series_total(values);
    labels
        .iter()
        .zip(values.iter().copied())
        .enumerate()
        .map(|(i, (label, value))| LegendEntry {
            color: palette.color(i),
            label: truncate(label.as_ref(), MAX_LEGEND_CHARS),
            value,
            percent_of_total: fraction_of(value, total) * 100.0,
        })
        .collect()
}

/// A vertical list of color swatches with label and value text.
///
/// This is the engine-side layout for hosts that want legends painted from
/// primitives rather than from the raw [`LegendEntry`] data.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendSwatches {
    /// Legend origin (top-left).
    pub origin: Point,
    /// Total row width; value text is right-aligned to it.
    pub width: f64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
}

impl LegendSwatches {
    /// Creates a legend layout at the given origin with default styling.
    pub fn new(origin: Point, width: f64) -> Self {
        Self {
            origin,
            width,
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            font_size: 10.0,
            text_fill: css::BLACK.into(),
        }
    }

    /// Height consumed by `count` legend rows.
    pub fn height(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let row_height = self.swatch_size.max(self.font_size);
        count as f64 * row_height + (count - 1) as f64 * self.row_gap
    }

    /// Generates primitives (swatch rect, label text, value text per row).
    pub fn primitives(&self, entries: &[LegendEntry]) -> Vec<Primitive> {
        let row_height = self.swatch_size.max(self.font_size);
        let mut out = Vec::with_capacity(entries.len() * 3);

        for (i, entry) in entries.iter().enumerate() {
            let y = self.origin.y + i as f64 * (row_height + self.row_gap);
            let swatch_y = y + (row_height - self.swatch_size) * 0.5;
            let mid_y = y + row_height * 0.5;

            out.push(Primitive::Rect(RectPrim {
                rect: Rect::new(
                    self.origin.x,
                    swatch_y,
                    self.origin.x + self.swatch_size,
                    swatch_y + self.swatch_size,
                ),
                fill: entry.color.into(),
                z_index: z_order::LEGEND_SWATCHES,
            }));
            out.push(Primitive::Text(TextPrim {
                pos: Point::new(self.origin.x + self.swatch_size + self.label_dx, mid_y),
                text: entry.label.clone(),
                font_size: self.font_size,
                fill: self.text_fill.clone(),
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
                z_index: z_order::LEGEND_LABELS,
            }));
            out.push(Primitive::Text(TextPrim {
                pos: Point::new(self.origin.x + self.width, mid_y),
                text: format!(
                    "{} ({:.1}%)",
                    format_magnitude(entry.value),
                    entry.percent_of_total
                ),
                font_size: self.font_size,
                fill: self.text_fill.clone(),
                anchor: TextAnchor::End,
                baseline: TextBaseline::Middle,
                z_index: z_order::LEGEND_LABELS,
            }));
        }
        out
    }
}
