//! Fundraising progress math and CAD currency formatting.
//!
//! Everything here is pure: the donation card view model and the CLI both
//! derive their numbers from [`compute_progress`] and [`format_cad`].
//!
//! Negative `raised`/`goal` values are a caller error and are not validated.

use serde::Serialize;

/// Width at or below which the bar is too narrow to paint its own label.
pub const BAR_LABEL_MIN_PERCENT: f64 = 15.0;

/// Percentages derived from a raised/goal pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    /// Bar width, capped at 100
    pub visual_percent: f64,
    /// Rounded percentage shown in text; may exceed 100 when over-funded
    pub display_percent: i64,
    /// Unrounded, uncapped percentage
    pub actual_percent: f64,
}

impl Progress {
    /// Value exposed as `aria-valuenow`, clamped to the progressbar range.
    pub fn aria_value(&self) -> u8 {
        self.display_percent.clamp(0, 100) as u8
    }

    /// Whether the percentage label fits inside the filled bar segment.
    pub fn shows_bar_label(&self) -> bool {
        self.visual_percent > BAR_LABEL_MIN_PERCENT
    }

    /// CSS width for the filled segment, e.g. `"16.67%"`.
    pub fn bar_width(&self) -> String {
        let rounded = (self.visual_percent * 100.0).round() / 100.0;
        format!("{}%", rounded)
    }
}

/// Compute bar and label percentages for a raised/goal pair.
///
/// A goal of zero never divides: the card reports 0% both in text and in
/// the bar, whatever has been raised.
pub fn compute_progress(raised: f64, goal: f64) -> Progress {
    let has_goal = goal > 0.0;
    let safe_goal = if has_goal { goal } else { 1.0 };
    let actual_percent = raised / safe_goal * 100.0;

    let (visual_percent, display_percent) = if has_goal {
        (actual_percent.min(100.0), actual_percent.round() as i64)
    } else {
        (0.0, 0)
    };

    Progress {
        visual_percent,
        display_percent,
        actual_percent,
    }
}

/// Format an amount as a whole-dollar en-CA CAD string.
///
/// ```
/// use yres_core::progress::format_cad;
///
/// assert_eq!(format_cad(2500.0), "$2,500");
/// assert_eq!(format_cad(-1234.5), "-$1,235");
/// ```
pub fn format_cad(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}$∞", sign);
    }

    // f64::round is half-away-from-zero, matching the en-CA currency rounding.
    // `{:.0}` prints every integer digit, so no width limit applies.
    let whole = format!("{:.0}", amount.abs().round());
    format!("{}${}", sign, group_thousands(&whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
