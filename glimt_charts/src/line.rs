// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line chart geometry.
//!
//! Points are spaced evenly along x; the y-scale is fitted to the series
//! with symmetric padding so extreme points don't sit on the plot boundary.
//! The connecting path is either straight segments or a Catmull-Rom-derived
//! cubic construction that passes exactly through every data point while
//! staying slope-continuous at interior knots.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use peniko::color::palette::css;

use glimt_core::{
    CirclePrim, PathPrim, Primitive, StrokeStyle, TextAnchor, TextBaseline, TextPrim, Trend,
};

use crate::format::{format_magnitude, truncate};
use crate::palette::Palette;
use crate::scale::{ScaleLinear, infer_domain};
use crate::z_order;

/// Number of divisions between horizontal gridlines (producing one more
/// line than this).
pub const GRID_TICK_COUNT: usize = 5;

/// Fraction of the value span added above and below the fitted domain.
pub const RANGE_PAD_FRACTION: f64 = 0.10;

/// Glyph budget for x-axis category labels (tighter than bar rows; the
/// labels sit side by side).
const X_LABEL_CHARS: usize = 10;

/// A line chart over one series.
#[derive(Clone, Debug)]
pub struct LineChartSpec<'a> {
    /// Category labels placed under the points.
    pub labels: &'a [String],
    /// Series values, one per label.
    pub values: &'a [f64],
    /// Plot rectangle.
    pub plot: Rect,
    /// Categorical color assignment; the series stroke uses color 0.
    pub palette: Palette,
    /// Whether to smooth the path (straight segments otherwise).
    pub smooth: bool,
    /// Data-point glyph radius.
    pub point_radius: f64,
    /// Series stroke width.
    pub stroke_width: f64,
    /// Label font size.
    pub font_size: f64,
}

impl<'a> LineChartSpec<'a> {
    /// Creates a line chart spec with default styling.
    pub fn new(labels: &'a [String], values: &'a [f64], plot: Rect) -> Self {
        Self {
            labels,
            values,
            plot,
            palette: Palette::ANALYTICS,
            smooth: true,
            point_radius: 3.0,
            stroke_width: 2.0,
            font_size: 9.0,
        }
    }

    /// Sets the color palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Enables or disables path smoothing.
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Generates gridlines, tick labels, the series path, point glyphs, and
    /// category labels.
    ///
    /// Non-finite values get no point; the path connects the finite points
    /// that remain. An empty series emits nothing at all.
    pub fn primitives(&self) -> Vec<Primitive> {
        let n = self.labels.len().min(self.values.len());
        if n == 0 {
            return Vec::new();
        }

        let domain = padded_domain(&self.values[..n]);
        // Inverted pixel range: larger values sit higher on screen.
        let y_scale = ScaleLinear::new(domain, (self.plot.y1, self.plot.y0));
        let step = self.plot.width() / (n - 1).max(1) as f64;

        let mut out = Vec::new();
        self.push_grid(&mut out, &y_scale);

        let series_color = self.palette.color(0);
        let points: Vec<Point> = (0..n)
            .filter(|&i| self.values[i].is_finite())
            .map(|i| {
                Point::new(
                    self.plot.x0 + i as f64 * step,
                    y_scale.map(self.values[i]),
                )
            })
            .collect();

        if points.len() >= 2 {
            let path = if self.smooth {
                smooth_path(&points)
            } else {
                straight_path(&points)
            };
            out.push(Primitive::Path(PathPrim {
                path,
                fill: Color::TRANSPARENT.into(),
                stroke: StrokeStyle::solid(series_color, self.stroke_width),
                z_index: z_order::SERIES_STROKE,
            }));
        }
        for p in &points {
            out.push(Primitive::Circle(CirclePrim {
                center: *p,
                radius: self.point_radius,
                fill: series_color.into(),
                z_index: z_order::SERIES_POINTS,
            }));
        }

        // Category labels, thinned when there are too many to sit side by
        // side.
        let stride = n.div_ceil(8);
        for i in (0..n).step_by(stride) {
            out.push(Primitive::Text(TextPrim {
                pos: Point::new(self.plot.x0 + i as f64 * step, self.plot.y1 + 12.0),
                text: truncate(&self.labels[i], X_LABEL_CHARS),
                font_size: self.font_size,
                fill: css::BLACK.into(),
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
                z_index: z_order::AXIS_LABELS,
            }));
        }
        out
    }

    fn push_grid(&self, out: &mut Vec<Primitive>, y_scale: &ScaleLinear) {
        let grid_stroke = StrokeStyle::solid(css::BLACK.with_alpha(40.0 / 255.0), 1.0);
        for tick in y_scale.ticks(GRID_TICK_COUNT) {
            let y = y_scale.map(tick);
            let mut p = BezPath::new();
            p.move_to((self.plot.x0, y));
            p.line_to((self.plot.x1, y));
            out.push(Primitive::Path(PathPrim {
                path: p,
                fill: Color::TRANSPARENT.into(),
                stroke: grid_stroke.clone(),
                z_index: z_order::GRID_LINES,
            }));
            out.push(Primitive::Text(TextPrim {
                pos: Point::new(self.plot.x0 - 6.0, y),
                text: format_magnitude(tick),
                font_size: self.font_size,
                fill: css::DIM_GRAY.into(),
                anchor: TextAnchor::End,
                baseline: TextBaseline::Middle,
                z_index: z_order::AXIS_LABELS,
            }));
        }
    }
}

/// Fits a y-domain to the series, padded [`RANGE_PAD_FRACTION`] outward on
/// both sides so the extreme points aren't clipped at the plot boundary.
///
/// A degenerate span (all values equal, a single point, or no finite values
/// at all) is widened to 1, centered on the value.
pub(crate) fn padded_domain(values: &[f64]) -> (f64, f64) {
    let (min, max) = infer_domain(values).unwrap_or((0.0, 1.0));
    let span = max - min;
    if span == 0.0 {
        return (min - 0.5, max + 0.5);
    }
    let pad = span * RANGE_PAD_FRACTION;
    (min - pad, max + pad)
}

/// Classifies the overall direction of a series from its first and last
/// finite values. Strict equality means [`Trend::Flat`]; so does a series
/// with fewer than two finite points.
pub fn classify_trend(values: &[f64]) -> Trend {
    let first = values.iter().copied().find(|v| v.is_finite());
    let last = values.iter().rev().copied().find(|v| v.is_finite());
    match (first, last) {
        (Some(a), Some(b)) if b > a => Trend::Rising,
        (Some(a), Some(b)) if b < a => Trend::Falling,
        _ => Trend::Flat,
    }
}

fn straight_path(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    for (i, pt) in points.iter().enumerate() {
        if i == 0 {
            p.move_to(*pt);
        } else {
            p.line_to(*pt);
        }
    }
    p
}

/// Builds a cubic path through every point using Catmull-Rom-style control
/// points (tangent at each knot parallel to the chord between its
/// neighbors), so the curve interpolates the data exactly.
fn smooth_path(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    let n = points.len();
    if n == 0 {
        return p;
    }
    p.move_to(points[0]);
    for i in 0..n - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(n - 1)];
        let c1 = p1 + (p2 - p0) / 6.0;
        let c2 = p2 - (p3 - p1) / 6.0;
        p.curve_to(c1, c2, p2);
    }
    p
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec::Vec;
    use kurbo::PathEl;

    use super::*;

    fn chart(labels: &[&str], values: &[f64]) -> Vec<Primitive> {
        let labels: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        LineChartSpec::new(&labels, values, Rect::new(0.0, 0.0, 320.0, 200.0)).primitives()
    }

    fn point_centers(prims: &[Primitive]) -> Vec<Point> {
        prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Circle(c) => Some(c.center),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn trend_follows_the_endpoints() {
        assert_eq!(classify_trend(&[1.0, 5.0, 3.0]), Trend::Rising);
        assert_eq!(classify_trend(&[5.0, 9.0, 1.0]), Trend::Falling);
        assert_eq!(classify_trend(&[100.0, 100.0, 100.0]), Trend::Flat);
        assert_eq!(classify_trend(&[f64::NAN, 2.0, 7.0, f64::NAN]), Trend::Rising);
        assert_eq!(classify_trend(&[]), Trend::Flat);
        assert_eq!(classify_trend(&[4.0]), Trend::Flat);
    }

    #[test]
    fn all_equal_series_yields_collinear_midline_points() {
        let prims = chart(&["Jan", "Feb", "Mar"], &[100.0, 100.0, 100.0]);
        let centers = point_centers(&prims);
        assert_eq!(centers.len(), 3);
        // Degenerate span is widened to 1 centered on the value, so every
        // point projects to the middle of the plot.
        for c in &centers {
            assert!((c.y - 100.0).abs() < 1e-9);
        }
        assert!(centers[0].x < centers[1].x && centers[1].x < centers[2].x);
    }

    #[test]
    fn degenerate_domain_has_unit_width() {
        assert_eq!(padded_domain(&[100.0, 100.0]), (99.5, 100.5));
        assert_eq!(padded_domain(&[7.0]), (6.5, 7.5));
        assert_eq!(padded_domain(&[]), (-0.5, 1.5));
    }

    #[test]
    fn padding_keeps_extremes_inside_the_plot() {
        let prims = chart(&["a", "b", "c"], &[0.0, 50.0, 100.0]);
        let plot = Rect::new(0.0, 0.0, 320.0, 200.0);
        for c in point_centers(&prims) {
            assert!(c.y > plot.y0 && c.y < plot.y1);
        }
    }

    #[test]
    fn smooth_path_passes_through_every_data_point() {
        let prims = chart(&["a", "b", "c", "d"], &[1.0, 9.0, 2.0, 8.0]);
        let centers = point_centers(&prims);
        let path = prims
            .iter()
            .find_map(|p| match p {
                Primitive::Path(pp) if pp.z_index == z_order::SERIES_STROKE => Some(&pp.path),
                _ => None,
            })
            .expect("series path");
        let mut knots = Vec::new();
        for el in path.elements() {
            match el {
                PathEl::MoveTo(p) => knots.push(*p),
                PathEl::CurveTo(_, _, p) => knots.push(*p),
                other => panic!("unexpected element {other:?}"),
            }
        }
        assert_eq!(knots, centers);
    }

    #[test]
    fn single_point_renders_a_glyph_but_no_line() {
        let prims = chart(&["only"], &[42.0]);
        assert_eq!(point_centers(&prims).len(), 1);
        let has_series_path = prims
            .iter()
            .any(|p| matches!(p, Primitive::Path(pp) if pp.z_index == z_order::SERIES_STROKE));
        assert!(!has_series_path);
    }

    #[test]
    fn grid_emits_one_more_line_than_the_tick_count() {
        let prims = chart(&["a", "b"], &[1.0, 2.0]);
        let grid_lines = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Path(pp) if pp.z_index == z_order::GRID_LINES))
            .count();
        assert_eq!(grid_lines, GRID_TICK_COUNT + 1);
    }

    #[test]
    fn empty_series_emits_nothing() {
        assert!(chart(&[], &[]).is_empty());
    }
}
