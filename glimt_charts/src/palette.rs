// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic categorical color assignment.
//!
//! Every chart family and its legend draw colors from the same palette by
//! category index, so a slice and its legend swatch can never disagree. The
//! assignment is pure: `color(i) = colors[i % len]`, with no per-render
//! state.

use peniko::Color;

/// An ordered, fixed color palette cycled by category index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    colors: &'static [Color],
}

/// The default analytics palette: blue, green, amber, red, purple, pink.
const ANALYTICS_COLORS: [Color; 6] = [
    Color::from_rgb8(59, 130, 246),
    Color::from_rgb8(16, 185, 129),
    Color::from_rgb8(245, 158, 11),
    Color::from_rgb8(239, 68, 68),
    Color::from_rgb8(147, 51, 234),
    Color::from_rgb8(236, 72, 153),
];

impl Palette {
    /// The default six-color analytics palette.
    pub const ANALYTICS: Self = Self {
        colors: &ANALYTICS_COLORS,
    };

    /// Creates a palette over a caller-provided color list.
    ///
    /// Panics in debug builds if `colors` is empty; an empty palette has no
    /// meaningful assignment.
    pub const fn new(colors: &'static [Color]) -> Self {
        debug_assert!(!colors.is_empty(), "palette must have at least one color");
        Self { colors }
    }

    /// Returns the color for the category at `index`, cycling when the
    /// index exceeds the palette length.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Returns the number of distinct colors before cycling.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette is empty (never true for built-in palettes).
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ANALYTICS
    }
}
