// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render tree handed to host renderers.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::error::ChartError;
use crate::primitive::Primitive;

/// A width/height pair in scene coordinate units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
}

/// Overall direction of a line series, judged from its endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trend {
    /// Last value is greater than the first.
    Rising,
    /// Last value is less than the first.
    Falling,
    /// Endpoints are exactly equal (or there are fewer than two points).
    Flat,
}

/// One legend row: swatch color, display label, raw value, share of total.
///
/// Entries are derived from the full series, including slices too small to
/// draw, so the legend never under-reports a category.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Swatch color, identical to the matching slice/bar color.
    pub color: Color,
    /// Display label (already truncated).
    pub label: String,
    /// Raw series value.
    pub value: f64,
    /// `value / total * 100`; `0.0` when the series total is zero.
    pub percent_of_total: f64,
}

/// Footer metadata describing the rendered chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Footer {
    /// Human-readable chart family name ("Bar chart", ...).
    pub chart_type_label: &'static str,
    /// Number of data points in the source series.
    pub data_point_count: usize,
    /// Endpoint trend, present for line charts only.
    pub trend: Option<Trend>,
}

/// The complete output of one render pass.
///
/// Built fresh per call and fully value-comparable: composing the same chart
/// specification twice yields trees that compare equal.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderTree {
    /// Chart title text (never empty; a generic fallback is substituted).
    pub title: String,
    /// Body drawing instructions in plot coordinates.
    pub body: Vec<Primitive>,
    /// Legend entries; empty when the chart family shows no legend.
    pub legend: Vec<LegendEntry>,
    /// Footer metadata.
    pub footer: Footer,
    /// Validation failure, if the specification was malformed. The rest of
    /// the tree is an empty chart so hosts can render a fallback message.
    pub error: Option<ChartError>,
}
