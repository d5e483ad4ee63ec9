// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `glimt_charts_demo`.

use kurbo::{Point, Rect};
use peniko::Brush;

use glimt_core::{Primitive, RenderTree, SectorPrim, TextAnchor, TextBaseline};

/// Vertical space reserved above the plot for the title.
const TITLE_BAND: f64 = 28.0;

/// Gap between the plot and the legend column, and around the footer line.
const SECTION_GAP: f64 = 12.0;

/// Renders a composed tree as a standalone SVG document.
///
/// The tree's body sits in plot coordinates starting at the origin; this
/// writer stacks a title band above it, a legend column below it, and a
/// footer line at the bottom. Primitives are sorted by `z_index` with
/// insertion order as the tiebreak, so equal layers keep series order.
pub(crate) fn render_tree_to_svg(tree: &RenderTree, plot: Rect) -> String {
    let mut prims: Vec<Primitive> = Vec::new();

    prims.push(Primitive::Text(glimt_core::TextPrim {
        pos: Point::new(plot.center().x, -TITLE_BAND * 0.5),
        text: tree.title.clone(),
        font_size: 14.0,
        fill: peniko::color::palette::css::BLACK.into(),
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Middle,
        z_index: glimt_charts::TITLES,
    }));

    if let Some(err) = &tree.error {
        prims.push(Primitive::Text(glimt_core::TextPrim {
            pos: Point::new(plot.center().x, plot.center().y),
            text: format!("cannot render: {err}"),
            font_size: 11.0,
            fill: peniko::color::palette::css::CRIMSON.into(),
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
            z_index: glimt_charts::TITLES,
        }));
    }
    prims.extend(tree.body.iter().cloned());

    let legend_layout = glimt_charts::LegendSwatches::new(
        Point::new(plot.x0, plot.y1 + SECTION_GAP),
        plot.width(),
    );
    let legend_height = legend_layout.height(tree.legend.len());
    prims.extend(legend_layout.primitives(&tree.legend));

    let footer_y = plot.y1 + SECTION_GAP + legend_height + SECTION_GAP;
    let trend = match tree.footer.trend {
        Some(glimt_core::Trend::Rising) => ", trending up",
        Some(glimt_core::Trend::Falling) => ", trending down",
        Some(glimt_core::Trend::Flat) => ", flat",
        None => "",
    };
    prims.push(Primitive::Text(glimt_core::TextPrim {
        pos: Point::new(plot.x0, footer_y),
        text: format!(
            "{} - {} data points{}",
            tree.footer.chart_type_label, tree.footer.data_point_count, trend
        ),
        font_size: 9.0,
        fill: peniko::color::palette::css::DIM_GRAY.into(),
        anchor: TextAnchor::Start,
        baseline: TextBaseline::Hanging,
        z_index: glimt_charts::TITLES,
    }));

    // Stable sort keeps insertion order inside each layer.
    prims.sort_by_key(|p| p.z_index());

    let pad = 10.0;
    let view = Rect::new(
        plot.x0 - pad,
        -TITLE_BAND - pad,
        plot.x1 + pad,
        footer_y + 12.0 + pad,
    );

    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    ));
    out.push('\n');

    for prim in &prims {
        write_primitive(&mut out, prim);
    }

    out.push_str("</svg>\n");
    out
}

fn write_primitive(out: &mut String, prim: &Primitive) {
    match prim {
        Primitive::Rect(r) => {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            ));
            write_paint_attr(out, "fill", &r.fill);
            out.push_str("/>\n");
        }
        Primitive::Sector(s) => {
            let d = sector_path_data(s);
            out.push_str(&format!(r#"<path d="{d}""#));
            write_paint_attr(out, "fill", &s.fill);
            out.push_str("/>\n");
        }
        Primitive::Path(p) => {
            let d = p.path.to_svg();
            out.push_str(&format!(r#"<path d="{d}""#));
            write_paint_attr(out, "fill", &p.fill);
            if p.stroke.stroke_width > 0.0 {
                write_paint_attr(out, "stroke", &p.stroke.brush);
                out.push_str(&format!(r#" stroke-width="{}""#, p.stroke.stroke_width));
            }
            out.push_str("/>\n");
        }
        Primitive::Circle(c) => {
            out.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}""#,
                c.center.x, c.center.y, c.radius
            ));
            write_paint_attr(out, "fill", &c.fill);
            out.push_str("/>\n");
        }
        Primitive::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
            };
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                t.pos.x, t.pos.y, t.font_size, baseline
            ));
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_paint_attr(out, "fill", &t.fill);
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
        }
    }
}

/// Path data for a sector.
///
/// Angles increase clockwise in SVG's y-down coordinates, so the outer arc
/// uses sweep flag 1 and the inner return arc (for annulus sectors) uses 0.
fn sector_path_data(s: &SectorPrim) -> String {
    let at = |radius: f64, angle: f64| {
        Point::new(
            s.center.x + radius * angle.cos(),
            s.center.y + radius * angle.sin(),
        )
    };
    let large = i32::from(s.large_arc());
    let outer_start = at(s.outer_radius, s.start_angle);
    let outer_end = at(s.outer_radius, s.end_angle);

    if s.is_annulus() {
        let inner_end = at(s.inner_radius, s.end_angle);
        let inner_start = at(s.inner_radius, s.start_angle);
        format!(
            "M{} {} A{} {} 0 {} 1 {} {} L{} {} A{} {} 0 {} 0 {} {} Z",
            outer_start.x,
            outer_start.y,
            s.outer_radius,
            s.outer_radius,
            large,
            outer_end.x,
            outer_end.y,
            inner_end.x,
            inner_end.y,
            s.inner_radius,
            s.inner_radius,
            large,
            inner_start.x,
            inner_start.y,
        )
    } else {
        format!(
            "M{} {} L{} {} A{} {} 0 {} 1 {} {} Z",
            s.center.x,
            s.center.y,
            outer_start.x,
            outer_start.y,
            s.outer_radius,
            s.outer_radius,
            large,
            outer_end.x,
            outer_end.y,
        )
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                return ("none".to_string(), None);
            }
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn dominant_sector_sets_the_large_arc_flag() {
        let s = SectorPrim {
            center: Point::new(0.0, 0.0),
            inner_radius: 0.0,
            outer_radius: 10.0,
            start_angle: -FRAC_PI_2,
            end_angle: -FRAC_PI_2 + 1.5 * PI,
            fill: peniko::color::palette::css::BLACK.into(),
            z_index: 0,
        };
        let d = sector_path_data(&s);
        assert!(d.contains(" 1 1 "), "expected large-arc flag in {d}");
    }

    #[test]
    fn annulus_path_closes_through_the_inner_arc() {
        let s = SectorPrim {
            center: Point::new(0.0, 0.0),
            inner_radius: 5.0,
            outer_radius: 10.0,
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
            fill: peniko::color::palette::css::BLACK.into(),
            z_index: 0,
        };
        let d = sector_path_data(&s);
        assert_eq!(d.matches('A').count(), 2);
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
