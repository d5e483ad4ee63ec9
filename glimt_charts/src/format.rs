// Copyright 2026 the Glimt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label truncation and numeric display formatting.
//!
//! Everything here is presentational: the underlying series values are never
//! altered, only their display strings. No locale handling beyond plain
//! character counting.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

/// Default glyph budget for category labels.
pub const MAX_LABEL_CHARS: usize = 16;

/// Truncates `label` to at most `max_chars` glyphs.
///
/// Labels over budget keep their first `max_chars - 3` characters and gain a
/// `"..."` suffix; shorter labels pass through unchanged. The operation is
/// idempotent: truncating an already-truncated label is a no-op.
pub fn truncate(label: &str, max_chars: usize) -> String {
    let count = label.chars().count();
    if count <= max_chars {
        return label.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = label.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Formats a magnitude for compact display.
///
/// Values of a million and up render as `"1.2M"`, thousands as `"1.2K"`
/// (one decimal each); smaller values render with grouped thousands in the
/// integer part and two decimals when fractional. Non-finite placeholder
/// values render as `"0"`.
pub fn format_magnitude(value: f64) -> String {
    if !value.is_finite() {
        return String::from("0");
    }
    let (sign, v) = if value < 0.0 {
        ("-", -value)
    } else {
        ("", value)
    };
    if v >= 1_000_000.0 {
        return format!("{sign}{:.1}M", v / 1_000_000.0);
    }
    if v >= 1_000.0 {
        return format!("{sign}{:.1}K", v / 1_000.0);
    }

    // Round to display precision first so the carry (e.g. 12.999 -> 13.00)
    // lands in the integer part, then regroup that part.
    let fixed = format!("{v:.2}");
    let (int_str, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(int_str.parse().unwrap_or(0));
    if frac == "00" {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

fn group_thousands(mut n: u64) -> String {
    if n == 0 {
        return String::from("0");
    }
    let mut groups: [u64; 7] = [0; 7];
    let mut count = 0;
    while n > 0 {
        groups[count] = n % 1000;
        n /= 1000;
        count += 1;
    }
    let mut out = groups[count - 1].to_string();
    for i in (0..count - 1).rev() {
        out.push_str(&format!(",{:03}", groups[i]));
    }
    out
}
