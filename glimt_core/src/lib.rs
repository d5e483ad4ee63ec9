// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive drawing instructions for the glimt chart engine.
//!
//! This crate is the shared vocabulary between the chart geometry engine
//! (`glimt_charts`) and whatever paints the result:
//! - **Primitives** are plain geometry + style records (rects, sectors,
//!   paths, circles, text). They carry no behavior beyond small read-only
//!   helpers, so any backend (SVG, canvas, terminal, PDF) can consume them.
//! - A **render tree** bundles the primitives with the chart title, legend
//!   entries, and footer metadata for one render pass.
//!
//! Nothing here holds state between renders; every tree is built fresh and
//! compares by value, so callers can diff or memoize renders safely.

#![no_std]

extern crate alloc;

mod error;
mod primitive;
mod tree;

pub use error::ChartError;
pub use primitive::{
    CirclePrim, PathPrim, Primitive, RectPrim, SectorPrim, StrokeStyle, TextAnchor, TextBaseline,
    TextPrim,
};
pub use tree::{Footer, LegendEntry, RenderTree, Size, Trend};
