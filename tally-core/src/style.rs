//! Deterministic line styling for renderers.
//!
//! Each function maps `(index, count)` to a value, so a renderer can restart
//! or index into the cycle freely. With more than
//! [`PRIMARY_THRESHOLD`] series the palette is walked twice and line styles
//! alternate by half; above [`SECONDARY_THRESHOLD`] the palette is walked four
//! times and every quarter of the series gets its own line style.

use serde::{Deserialize, Serialize};

/// Series count above which the palette repeats and dash-dot lines appear.
pub const PRIMARY_THRESHOLD: usize = 25;
/// Series count above which all four line styles are used.
pub const SECONDARY_THRESHOLD: usize = 50;
/// Maximum legend rows before another column is added.
pub const LEGEND_MAX_ROWS: usize = 12;

/// Line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStyle {
    /// `:`
    Dotted,
    /// `-.`
    DashDot,
    /// `--`
    Dashed,
    /// `-`
    Solid,
}

impl LineStyle {
    /// Matplotlib-style shorthand.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dotted => ":",
            Self::DashDot => "-.",
            Self::Dashed => "--",
            Self::Solid => "-",
        }
    }
}

/// Line style of series `index` out of `count`.
#[must_use]
pub const fn linestyle_for(index: usize, count: usize) -> LineStyle {
    let many = count > SECONDARY_THRESHOLD;
    if many && index < count / 4 {
        LineStyle::Dotted
    } else if count > PRIMARY_THRESHOLD && index < count / 2 {
        LineStyle::DashDot
    } else if many && index < 3 * count / 4 {
        LineStyle::Dashed
    } else {
        LineStyle::Solid
    }
}

/// Position in `[0, 1)` along a continuous color map for series `index` out of `count`.
///
/// Returns `0.0` when `count` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn color_position(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let mut laps = 1.0;
    if count > PRIMARY_THRESHOLD {
        laps *= 2.0;
    }
    if count > SECONDARY_THRESHOLD {
        laps *= 2.0;
    }
    (index as f64 * laps / count as f64).rem_euclid(1.0)
}

/// Number of legend columns for `count` series; at least one.
#[must_use]
pub const fn legend_columns(count: usize) -> usize {
    let cols = count / LEGEND_MAX_ROWS;
    if cols == 0 { 1 } else { cols }
}
