// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The primitive instruction set emitted by chart builders.
//!
//! Primitives are descriptive only: geometry in scene coordinates (y grows
//! downward), paint as [`peniko::Brush`], and a `z_index` rendering-order
//! hint. Renderers should sort by `z_index` with a stable sort so emission
//! order breaks ties deterministically.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

/// A paint + width pair for stroked paths (lines, gridlines, outlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Horizontal text anchoring relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The position is the start (left edge for LTR text).
    Start,
    /// The position is the horizontal center.
    Middle,
    /// The position is the end (right edge for LTR text).
    End,
}

/// Vertical text baseline relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The position is the vertical midline.
    Middle,
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the top (hanging baseline).
    Hanging,
}

/// A filled axis-aligned rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPrim {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

/// A filled circular sector (pie slice) or annulus wedge (doughnut slice).
///
/// Angles are in radians. `0` points along +x; angles increase toward +y,
/// which sweeps **clockwise** on screen (y grows downward). Builders start
/// the first slice at `-PI/2` so it opens from the top of the disk.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorPrim {
    /// Center in scene coordinates.
    pub center: Point,
    /// Inner radius; `0` for a full wedge-to-center pie slice.
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians. Always `>= start_angle`.
    pub end_angle: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl SectorPrim {
    /// The swept angle in radians (`end_angle - start_angle`).
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whether an SVG-style arc command for this sector needs the
    /// large-arc flag (sweep greater than a half turn).
    pub fn large_arc(&self) -> bool {
        self.sweep() > core::f64::consts::PI
    }

    /// Whether this sector is an annulus wedge rather than a full wedge.
    pub fn is_annulus(&self) -> bool {
        self.inner_radius > 0.0
    }
}

/// A stroked (and optionally filled) free-form path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPrim {
    /// Path in scene coordinates.
    pub path: BezPath,
    /// Fill paint; transparent for stroke-only paths.
    pub fill: Brush,
    /// Stroke paint and width.
    pub stroke: StrokeStyle,
    /// Rendering order hint.
    pub z_index: i32,
}

/// A filled circle (data-point glyph).
#[derive(Clone, Debug, PartialEq)]
pub struct CirclePrim {
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

/// A text label (unshaped; shaping/layout is the renderer's job).
#[derive(Clone, Debug, PartialEq)]
pub struct TextPrim {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Rendering order hint.
    pub z_index: i32,
}

/// A single drawing instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A filled rectangle.
    Rect(RectPrim),
    /// A pie/doughnut sector.
    Sector(SectorPrim),
    /// A stroked path.
    Path(PathPrim),
    /// A filled circle.
    Circle(CirclePrim),
    /// A text label.
    Text(TextPrim),
}

impl Primitive {
    /// Returns the rendering order hint for this instruction.
    pub fn z_index(&self) -> i32 {
        match self {
            Self::Rect(p) => p.z_index,
            Self::Sector(p) => p.z_index,
            Self::Path(p) => p.z_index,
            Self::Circle(p) => p.z_index,
            Self::Text(p) => p.z_index,
        }
    }
}
