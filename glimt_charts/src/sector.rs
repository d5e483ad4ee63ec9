// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie and doughnut geometry.
//!
//! Both families share one cumulative-angle walk, parameterized only by the
//! inner radius (0 for pie, positive for doughnut). The first slice opens at
//! the top of the disk and slices sweep clockwise in series order.

extern crate alloc;

use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::Point;

use glimt_core::{Primitive, SectorPrim};

use crate::legend::{fraction_of, series_total};
use crate::palette::Palette;
use crate::z_order;

/// Angle at which the first slice starts: the top of the disk.
pub const ROTATION_OFFSET: f64 = -FRAC_PI_2;

/// Default visibility threshold as a fraction of the series total.
///
/// Slices below this share still participate in legend and percentage math
/// but are suppressed from the drawn body to avoid degenerate zero-length
/// arc paths. Hosts with dense datasets can lower it via
/// [`SectorChartSpec::with_min_visible_fraction`].
pub const MIN_VISIBLE_FRACTION: f64 = 0.005;

/// A pie or doughnut chart (one sector per category).
#[derive(Clone, Debug)]
pub struct SectorChartSpec<'a> {
    /// Series values, one per category.
    pub values: &'a [f64],
    /// Disk center in plot coordinates.
    pub center: Point,
    /// Outer radius.
    pub outer_radius: f64,
    /// Inner radius; 0 renders a pie, positive renders a doughnut.
    pub inner_radius: f64,
    /// Categorical color assignment.
    pub palette: Palette,
    /// Visibility threshold as a fraction of the total.
    pub min_visible_fraction: f64,
}

impl<'a> SectorChartSpec<'a> {
    /// Creates a pie chart spec (inner radius 0).
    pub fn pie(values: &'a [f64], center: Point, outer_radius: f64) -> Self {
        Self {
            values,
            center,
            outer_radius,
            inner_radius: 0.0,
            palette: Palette::ANALYTICS,
            min_visible_fraction: MIN_VISIBLE_FRACTION,
        }
    }

    /// Creates a doughnut chart spec.
    pub fn doughnut(values: &'a [f64], center: Point, outer_radius: f64, inner_radius: f64) -> Self {
        Self {
            inner_radius,
            ..Self::pie(values, center, outer_radius)
        }
    }

    /// Sets the color palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the visibility threshold.
    pub fn with_min_visible_fraction(mut self, fraction: f64) -> Self {
        self.min_visible_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Generates one sector per visible slice.
    ///
    /// A zero-total series emits nothing (all slice angles are 0; there is
    /// no division). The running angle advances for suppressed slices too,
    /// so the drawn slices keep their exact positions.
    pub fn primitives(&self) -> Vec<Primitive> {
        let total = series_total(self.values);
        if total <= 0.0 {
            return Vec::new();
        }

        let mut out = Vec::with_capacity(self.values.len());
        let mut current = ROTATION_OFFSET;
        for (i, &value) in self.values.iter().enumerate() {
            let fraction = fraction_of(value, total);
            let sweep = fraction * TAU;
            let start = current;
            current += sweep;

            if fraction < self.min_visible_fraction {
                continue;
            }
            out.push(Primitive::Sector(SectorPrim {
                center: self.center,
                inner_radius: self.inner_radius,
                outer_radius: self.outer_radius,
                start_angle: start,
                end_angle: current,
                fill: self.palette.color(i).into(),
                z_index: z_order::SERIES_FILL,
            }));
        }
        out
    }
}
