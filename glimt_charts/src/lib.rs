// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic chart geometry over `glimt_core`.
//!
//! This crate turns abstract chart specifications (labels, values, a chart
//! kind, and a few options) into flat lists of `glimt_core` primitives:
//! - **Builders** generate the body geometry for each chart family (bars,
//!   pie/doughnut sectors, line paths).
//! - **Scales** map data values into plot coordinates.
//! - The **composer** validates a specification, dispatches to the right
//!   builder, and bundles the result with title, legend, and footer data.
//!
//! The same specification always composes to the same tree; there is no
//! clock, no randomness, and no platform-dependent measurement. Text shaping
//! is out of scope; text primitives store unshaped strings and hosts (or the
//! [`TextMeasurer`] they supply) decide how wide glyphs really are.

#![no_std]

extern crate alloc;

mod bar;
mod compose;
mod format;
mod legend;
mod line;
mod measure;
mod palette;
mod scale;
mod sector;
mod z_order;

pub use bar::{BarChartSpec, MIN_BAR_FRACTION};
pub use compose::{
    ChartKind, ChartOptions, ChartSpec, DEFAULT_TITLE, DOUGHNUT_INNER_RATIO, compose,
    compose_with,
};
pub use format::{MAX_LABEL_CHARS, format_magnitude, truncate};
pub use legend::{LegendSwatches, MAX_LEGEND_CHARS, build_legend};
pub use line::{GRID_TICK_COUNT, LineChartSpec, RANGE_PAD_FRACTION, classify_trend};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use palette::Palette;
pub use scale::{ScaleBand, ScaleLinear, infer_domain};
pub use sector::{MIN_VISIBLE_FRACTION, ROTATION_OFFSET, SectorChartSpec};
pub use z_order::*;
