// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition: one chart specification in, one render tree out.
//!
//! The composer is the only entry point hosts need. It validates the
//! specification, dispatches to the matching geometry builder, and bundles
//! the result with the title, legend entries, and footer metadata. It never
//! panics on malformed input: a length mismatch comes back as an empty
//! chart annotated with the error, so hosts can paint a fallback message.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use glimt_core::{ChartError, Footer, RenderTree, Size};

use crate::bar::BarChartSpec;
use crate::legend::build_legend;
use crate::line::{LineChartSpec, classify_trend};
use crate::measure::{HeuristicTextMeasurer, TextMeasurer};
use crate::palette::Palette;
use crate::sector::{MIN_VISIBLE_FRACTION, SectorChartSpec};

/// Title substituted when the specification carries none.
pub const DEFAULT_TITLE: &str = "Analytics Chart";

/// Doughnut hole size as a fraction of the outer radius.
pub const DOUGHNUT_INNER_RATIO: f64 = 0.55;

/// The four chart families the engine renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Horizontal category bars.
    #[default]
    Bar,
    /// Full-disk proportional slices.
    Pie,
    /// Annulus (ring) proportional slices.
    Doughnut,
    /// Evenly spaced points joined by a path.
    Line,
}

impl ChartKind {
    /// Resolves a chart-type name from an upstream payload.
    ///
    /// Unknown or empty names fall back to [`ChartKind::Bar`]. This is the
    /// one place the "default to bar" recovery policy lives; everything
    /// downstream dispatches exhaustively on the enum.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("pie") {
            Self::Pie
        } else if name.eq_ignore_ascii_case("doughnut") {
            Self::Doughnut
        } else if name.eq_ignore_ascii_case("line") {
            Self::Line
        } else {
            Self::Bar
        }
    }

    /// Human-readable family name for footers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bar => "Bar chart",
            Self::Pie => "Pie chart",
            Self::Doughnut => "Doughnut chart",
            Self::Line => "Line chart",
        }
    }

    /// Whether this family shows a legend unless the host overrides it.
    ///
    /// Proportional charts need the legend to be readable; bar and line
    /// charts label their categories inline.
    fn legend_by_default(&self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut)
    }
}

/// Rendering hints carried alongside the data.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Legend visibility override; `None` uses the per-family default.
    pub legend_visible: Option<bool>,
    /// Whether line charts smooth their path.
    pub smooth: bool,
    /// Sector visibility threshold as a fraction of the series total.
    pub min_visible_fraction: f64,
    /// Plot body size in scene units.
    pub plot_size: Size,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            legend_visible: None,
            smooth: true,
            min_visible_fraction: MIN_VISIBLE_FRACTION,
            plot_size: Size {
                width: 320.0,
                height: 200.0,
            },
        }
    }
}

/// An abstract chart specification, as handed over by the query layer.
///
/// Invariant: `labels` and `values` must have equal length. Zero-length
/// specifications are valid and render an empty chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSpec {
    /// Chart family.
    pub kind: ChartKind,
    /// Ordered category names.
    pub labels: Vec<String>,
    /// Ordered series values, one per label.
    pub values: Vec<f64>,
    /// Optional chart title.
    pub title: Option<String>,
    /// Rendering hints.
    pub options: ChartOptions,
}

impl ChartSpec {
    /// Creates a specification with default options and no title.
    pub fn new(kind: ChartKind, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            kind,
            labels,
            values,
            title: None,
            options: ChartOptions::default(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the rendering options.
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }
}

/// Composes a render tree using the built-in heuristic text measurer.
pub fn compose(spec: &ChartSpec) -> RenderTree {
    compose_with(spec, &HeuristicTextMeasurer)
}

/// Composes a render tree with a caller-supplied text measurer.
///
/// The measurer only influences the bar chart's label gutter; it must be
/// deterministic for render trees to stay reproducible.
pub fn compose_with(spec: &ChartSpec, measurer: &dyn TextMeasurer) -> RenderTree {
    let title = spec
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| String::from(DEFAULT_TITLE));

    if spec.labels.len() != spec.values.len() {
        return RenderTree {
            title,
            body: Vec::new(),
            legend: Vec::new(),
            footer: Footer {
                chart_type_label: spec.kind.label(),
                data_point_count: 0,
                trend: None,
            },
            error: Some(ChartError::ShapeMismatch {
                labels: spec.labels.len(),
                values: spec.values.len(),
            }),
        };
    }

    let plot = Rect::new(
        0.0,
        0.0,
        spec.options.plot_size.width.max(0.0),
        spec.options.plot_size.height.max(0.0),
    );
    let palette = Palette::ANALYTICS;

    let body = match spec.kind {
        ChartKind::Bar => BarChartSpec::new(&spec.labels, &spec.values, plot)
            .with_palette(palette)
            .primitives(measurer),
        ChartKind::Pie | ChartKind::Doughnut => {
            let center = Point::new(plot.center().x, plot.center().y);
            let outer = (plot.width().min(plot.height()) * 0.5 - 4.0).max(0.0);
            let inner = if spec.kind == ChartKind::Doughnut {
                outer * DOUGHNUT_INNER_RATIO
            } else {
                0.0
            };
            SectorChartSpec::doughnut(&spec.values, center, outer, inner)
                .with_palette(palette)
                .with_min_visible_fraction(spec.options.min_visible_fraction)
                .primitives()
        }
        ChartKind::Line => LineChartSpec::new(&spec.labels, &spec.values, plot)
            .with_palette(palette)
            .with_smooth(spec.options.smooth)
            .primitives(),
    };

    let legend_visible = spec
        .options
        .legend_visible
        .unwrap_or_else(|| spec.kind.legend_by_default());
    let legend = if legend_visible {
        build_legend(&spec.labels, &spec.values, &palette)
    } else {
        Vec::new()
    };

    let trend = match spec.kind {
        ChartKind::Line => Some(classify_trend(&spec.values)),
        _ => None,
    };

    RenderTree {
        title,
        body,
        legend,
        footer: Footer {
            chart_type_label: spec.kind.label(),
            data_point_count: spec.values.len(),
            trend,
        },
        error: None,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec;

    use glimt_core::{Primitive, Trend};

    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn rect_widths(tree: &RenderTree) -> Vec<f64> {
        tree.body
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect(r) if p.z_index() == crate::z_order::SERIES_FILL => {
                    Some(r.rect.width())
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn composition_is_deterministic() {
        let spec = ChartSpec::new(
            ChartKind::Pie,
            labels(&["A", "B", "C"]),
            vec![1.0, 2.0, 3.0],
        )
        .with_title("Shares");
        assert_eq!(compose(&spec), compose(&spec));

        let spec = ChartSpec::new(ChartKind::Line, labels(&["a", "b"]), vec![2.0, 9.0]);
        assert_eq!(compose(&spec), compose(&spec));
    }

    #[test]
    fn bar_scenario_orders_lengths_and_omits_the_legend() {
        let spec = ChartSpec::new(
            ChartKind::Bar,
            labels(&["Smartphones", "Laptops"]),
            vec![11_649.84, 14_599.89],
        );
        let tree = compose(&spec);
        let widths = rect_widths(&tree);
        assert_eq!(widths.len(), 2);
        assert!(widths[1] > widths[0], "Laptops bar must be strictly longer");
        assert!(tree.legend.is_empty(), "bar charts carry no legend");
        assert_eq!(tree.footer.data_point_count, 2);
        assert_eq!(tree.footer.chart_type_label, "Bar chart");
        assert!(tree.error.is_none());
    }

    #[test]
    fn pie_scenario_has_four_equal_quarters() {
        let spec = ChartSpec::new(
            ChartKind::Pie,
            labels(&["A", "B", "C", "D"]),
            vec![25.0, 25.0, 25.0, 25.0],
        );
        let tree = compose(&spec);
        let sectors: Vec<_> = tree
            .body
            .iter()
            .filter_map(|p| match p {
                Primitive::Sector(s) => Some(s),
                _ => None,
            })
            .collect();
        assert_eq!(sectors.len(), 4);
        for s in &sectors {
            assert!((s.sweep() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
            assert_eq!(s.inner_radius, 0.0);
        }
        assert_eq!(tree.legend.len(), 4);
        for e in &tree.legend {
            assert_eq!(e.percent_of_total, 25.0);
        }
    }

    #[test]
    fn empty_doughnut_renders_an_empty_tree_without_error() {
        let spec = ChartSpec::new(ChartKind::Doughnut, Vec::new(), Vec::new());
        let tree = compose(&spec);
        assert!(tree.body.is_empty());
        assert!(tree.legend.is_empty());
        assert!(tree.error.is_none());
        assert_eq!(tree.footer.data_point_count, 0);
    }

    #[test]
    fn flat_line_scenario_is_classified_flat() {
        let spec = ChartSpec::new(
            ChartKind::Line,
            labels(&["Jan", "Feb", "Mar"]),
            vec![100.0, 100.0, 100.0],
        );
        let tree = compose(&spec);
        assert_eq!(tree.footer.trend, Some(Trend::Flat));
        let ys: Vec<f64> = tree
            .body
            .iter()
            .filter_map(|p| match p {
                Primitive::Circle(c) => Some(c.center.y),
                _ => None,
            })
            .collect();
        assert_eq!(ys.len(), 3);
        assert!(ys.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-12));
    }

    #[test]
    fn unknown_type_names_fall_back_to_bar() {
        assert_eq!(ChartKind::from_name("unknown"), ChartKind::Bar);
        assert_eq!(ChartKind::from_name(""), ChartKind::Bar);
        assert_eq!(ChartKind::from_name(" PIE "), ChartKind::Pie);
        assert_eq!(ChartKind::from_name("Doughnut"), ChartKind::Doughnut);
        assert_eq!(ChartKind::from_name("line"), ChartKind::Line);

        let spec = ChartSpec::new(ChartKind::from_name("unknown"), labels(&["X"]), vec![5.0]);
        let tree = compose(&spec);
        assert_eq!(rect_widths(&tree).len(), 1);
        assert_eq!(tree.footer.chart_type_label, "Bar chart");
        // An explicit bar spec with the same data composes identically.
        let explicit = ChartSpec::new(ChartKind::Bar, labels(&["X"]), vec![5.0]);
        assert_eq!(tree, compose(&explicit));
    }

    #[test]
    fn length_mismatch_reports_an_error_instead_of_panicking() {
        let spec = ChartSpec {
            kind: ChartKind::Bar,
            labels: labels(&["a", "b", "c"]),
            values: vec![1.0, 2.0],
            title: None,
            options: ChartOptions::default(),
        };
        let tree = compose(&spec);
        assert_eq!(
            tree.error,
            Some(ChartError::ShapeMismatch {
                labels: 3,
                values: 2
            })
        );
        assert!(tree.body.is_empty());
        assert_eq!(tree.footer.data_point_count, 0);
    }

    #[test]
    fn missing_title_falls_back_to_the_generic_label() {
        let spec = ChartSpec::new(ChartKind::Bar, labels(&["a"]), vec![1.0]);
        assert_eq!(compose(&spec).title, DEFAULT_TITLE);
        let spec = spec.with_title("  ");
        assert_eq!(compose(&spec).title, DEFAULT_TITLE);
        let spec = spec.with_title("Revenue by Category");
        assert_eq!(compose(&spec).title, "Revenue by Category");
    }

    #[test]
    fn legend_override_applies_to_any_family() {
        let shown = ChartOptions {
            legend_visible: Some(true),
            ..ChartOptions::default()
        };
        let spec = ChartSpec::new(ChartKind::Bar, labels(&["a", "b"]), vec![1.0, 3.0])
            .with_options(shown);
        assert_eq!(compose(&spec).legend.len(), 2);

        let hidden = ChartOptions {
            legend_visible: Some(false),
            ..ChartOptions::default()
        };
        let spec = ChartSpec::new(ChartKind::Pie, labels(&["a", "b"]), vec![1.0, 3.0])
            .with_options(hidden);
        assert!(compose(&spec).legend.is_empty());
    }

    #[test]
    fn equal_length_input_never_errors() {
        // Shape invariant: any labels/values pair of equal length composes
        // cleanly, across every family.
        let cases: &[Vec<f64>] = &[
            vec![],
            vec![0.0],
            vec![0.0, 0.0, 0.0],
            vec![-5.0, 3.0],
            vec![f64::NAN, 1.0, f64::INFINITY],
            vec![1e12, 2e-9, 3.5],
        ];
        for kind in [
            ChartKind::Bar,
            ChartKind::Pie,
            ChartKind::Doughnut,
            ChartKind::Line,
        ] {
            for values in cases {
                let names: Vec<String> =
                    (0..values.len()).map(|i| format!("c{i}")).collect();
                let tree = compose(&ChartSpec::new(kind, names, values.clone()));
                assert!(tree.error.is_none(), "{kind:?} {values:?}");
            }
        }
    }
}
