// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart validation errors.
//!
//! The engine recovers from malformed input instead of panicking: the
//! composer reports the error inside the render tree alongside an empty
//! chart, so a host can paint a fallback message.

use core::fmt;

/// A chart specification that cannot be rendered as given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartError {
    /// `labels` and `values` have different lengths.
    ShapeMismatch {
        /// Number of category labels supplied.
        labels: usize,
        /// Number of series values supplied.
        values: usize,
    },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { labels, values } => write!(
                f,
                "labels/series length mismatch: {labels} labels, {values} values"
            ),
        }
    }
}

impl core::error::Error for ChartError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn shape_mismatch_names_both_lengths() {
        let e = ChartError::ShapeMismatch {
            labels: 3,
            values: 2,
        };
        assert_eq!(
            e.to_string(),
            "labels/series length mismatch: 3 labels, 2 values"
        );
    }
}
