// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart demos for `glimt_charts`.
mod html;
mod svg;

use kurbo::Rect;

use glimt_charts::{ChartKind, ChartOptions, ChartSpec, compose};

fn main() {
    let sections = vec![
        bar_demo(),
        pie_demo(),
        doughnut_demo(),
        line_demo(),
        straight_line_demo(),
        tiny_slice_demo(),
        mismatch_demo(),
    ];

    let html = html::render_report("Glimt charts demo", &sections);
    std::fs::write("glimt_charts_demo.html", html).expect("write glimt_charts_demo.html");
    println!("wrote glimt_charts_demo.html");
}

fn render_section(title: &str, note: &str, spec: &ChartSpec) -> html::HtmlSection {
    let tree = compose(spec);
    let plot = Rect::new(
        0.0,
        0.0,
        spec.options.plot_size.width,
        spec.options.plot_size.height,
    );
    html::HtmlSection {
        title: title.to_string(),
        note: note.to_string(),
        svg: svg::render_tree_to_svg(&tree, plot),
    }
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn bar_demo() -> html::HtmlSection {
    let spec = ChartSpec::new(
        ChartKind::Bar,
        labels(&["Smartphones", "Laptops", "Headphones", "Monitors"]),
        vec![11_649.84, 14_599.89, 3_205.50, 7_420.00],
    )
    .with_title("Revenue by Category");
    render_section(
        "Bar",
        "Horizontal bars scaled against the largest value, with compacted value labels.",
        &spec,
    )
}

fn pie_demo() -> html::HtmlSection {
    let spec = ChartSpec::new(
        ChartKind::Pie,
        labels(&["North", "South", "East", "West"]),
        vec![25.0, 25.0, 25.0, 25.0],
    )
    .with_title("Orders by Region");
    render_section(
        "Pie",
        "Four equal slices, each a quarter turn starting at the top of the disk.",
        &spec,
    )
}

fn doughnut_demo() -> html::HtmlSection {
    let spec = ChartSpec::new(
        ChartKind::Doughnut,
        labels(&["Returning", "New", "Guest"]),
        vec![6_410.0, 2_850.0, 980.0],
    )
    .with_title("Customers by Segment");
    render_section(
        "Doughnut",
        "Same angle walk as the pie, drawn as annulus wedges.",
        &spec,
    )
}

fn line_demo() -> html::HtmlSection {
    let spec = ChartSpec::new(
        ChartKind::Line,
        labels(&["Jan", "Feb", "Mar", "Apr", "May", "Jun"]),
        vec![4_200.0, 4_950.0, 4_600.0, 5_800.0, 5_500.0, 6_900.0],
    )
    .with_title("Monthly Revenue");
    render_section(
        "Line (smoothed)",
        "Smoothed path through every data point, with gridlines and a rising trend.",
        &spec,
    )
}

fn straight_line_demo() -> html::HtmlSection {
    let options = ChartOptions {
        smooth: false,
        ..ChartOptions::default()
    };
    let spec = ChartSpec::new(
        ChartKind::Line,
        labels(&["Q1", "Q2", "Q3", "Q4"]),
        vec![100.0, 100.0, 100.0, 100.0],
    )
    .with_title("Flat Series")
    .with_options(options);
    render_section(
        "Line (straight, flat)",
        "An all-equal series renders on the plot midline and classifies as flat.",
        &spec,
    )
}

fn tiny_slice_demo() -> html::HtmlSection {
    let spec = ChartSpec::new(
        ChartKind::Pie,
        labels(&["Alpha", "Sliver", "Beta"]),
        vec![999.0, 1.0, 1000.0],
    )
    .with_title("Visibility Threshold");
    render_section(
        "Pie with a suppressed slice",
        "The 0.05% sliver is dropped from the body but keeps its legend row, and the \
         remaining slices keep their exact positions.",
        &spec,
    )
}

fn mismatch_demo() -> html::HtmlSection {
    let spec = ChartSpec {
        kind: ChartKind::Bar,
        labels: labels(&["a", "b", "c"]),
        values: vec![1.0, 2.0],
        title: Some("Broken Payload".to_string()),
        options: ChartOptions::default(),
    };
    render_section(
        "Shape mismatch",
        "A labels/values length mismatch never panics; the tree carries the error instead.",
        &spec,
    )
}
