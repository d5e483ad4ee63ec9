// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for layout.
//!
//! Text shaping stays downstream of the engine, so builders that need label
//! extents (the bar chart's label gutter) accept a measurer callback for
//! rough bounds estimation.

/// A minimal text measurement interface used by geometry builders.
///
/// Callers can plug in a real text measurement backend (e.g. based on
/// shaping), or use [`HeuristicTextMeasurer`]. Whatever is supplied must be
/// deterministic for identical inputs, or render trees stop being
/// reproducible.
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same coordinate system as the
    /// primitives.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}
