// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated primitives.
//!
//! Primitives carry an explicit `z_index` for render ordering. The chart
//! layer sets z-indexes consistently so callers don't have to hand-tune
//! paint order per chart family.
//!
//! These values are intentionally coarse. Renderers should sort stably by
//! `z_index` so emission order provides a deterministic tie-break.

/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Filled series primitives (bars, sectors).
pub const SERIES_FILL: i32 = 0;
/// Stroked series primitives (lines).
pub const SERIES_STROKE: i32 = 10;
/// Point glyphs drawn above lines.
pub const SERIES_POINTS: i32 = 20;

/// Category and tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Per-bar value labels.
pub const VALUE_LABELS: i32 = 50;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
/// Chart-level titles and annotations.
pub const TITLES: i32 = 80;
