//! Proportional split of a total duration and HH:MM rendering of each share.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the minutes part is rounded when rendering a share as `HH:MM`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClockRounding {
    /// Round `minutes % 60` on its own. A value such as 59.6 renders as `:60`
    /// and is never carried into the hours.
    #[default]
    Legacy,
    /// Round the whole amount first, then split into hours and minutes.
    Carry,
}

/// One computed share: the raw fractional minutes plus the clock string.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Allocation {
    pub raw: f64,
    pub formatted: String,
}

/// Split `total_minutes` across `weights` proportionally.
///
/// Returns an empty vector when there is nothing to distribute: the weights sum
/// to zero or the total is not positive. Raw minutes keep their fractional part,
/// so the formatted values may not add up exactly to the total.
pub fn compute_allocations(total_minutes: f64, weights: &[f64]) -> Vec<Allocation> {
    compute_allocations_with(total_minutes, weights, ClockRounding::Legacy)
}

pub fn compute_allocations_with(
    total_minutes: f64,
    weights: &[f64],
    rounding: ClockRounding,
) -> Vec<Allocation> {
    let total_weight: f64 = weights.iter().sum();

    let distributable = total_weight > 0.0 && total_minutes.is_finite() && total_minutes > 0.0;
    if !distributable {
        return Vec::new();
    }

    weights
        .iter()
        .map(|w| {
            let minutes = (w / total_weight) * total_minutes;
            Allocation {
                raw: minutes,
                formatted: format_clock_with(minutes, rounding),
            }
        })
        .collect()
}

/// Render minutes as a zero-padded `HH:MM` string (legacy rounding).
///
/// ```
/// use rtimesplit::core::allocator::format_as_clock;
/// assert_eq!(format_as_clock(83.0), "01:23");
/// assert_eq!(format_as_clock(125.6), "02:06");
/// ```
pub fn format_as_clock(minutes: f64) -> String {
    format_clock_with(minutes, ClockRounding::Legacy)
}

pub fn format_clock_with(minutes: f64, rounding: ClockRounding) -> String {
    let (hours, mins) = match rounding {
        ClockRounding::Legacy => {
            let h = (minutes / 60.0).floor() as i64;
            let m = (minutes % 60.0).round() as i64;
            (h, m)
        }
        ClockRounding::Carry => {
            let total = minutes.round() as i64;
            (total.div_euclid(60), total.rem_euclid(60))
        }
    };

    format!("{:02}:{:02}", hours, mins)
}
