//! Number rounding and text rendering
//!
//! Two renderings exist: [`display_number`] is the exact value as it
//! appears inside step traces, [`format_number`] is the 4-decimal form
//! shown to users for results.

use alloc::format;
use alloc::string::{String, ToString};

/// Scale used to suppress floating-point noise in computed cells
pub const PRECISION_SCALE: f64 = 1e10;

/// Scale used by [`format_number`] (4 decimal places)
pub const DISPLAY_SCALE: f64 = 1e4;

/// Round to 10 decimal places, half away from zero
pub fn round_to_precision(value: f64) -> f64 {
    libm::round(value * PRECISION_SCALE) / PRECISION_SCALE
}

/// Positional notation is used for magnitudes in `EXP_BELOW..EXP_FROM`
const EXP_BELOW: f64 = 1e-6;
const EXP_FROM: f64 = 1e21;

fn is_integer(value: f64) -> bool {
    value.is_finite() && libm::trunc(value) == value
}

/// Render a number as it appears inside step traces
///
/// Shortest round-trip decimal form. Integral values print without a
/// fractional part, negative zero prints as `0`, and non-finite values
/// print as `Infinity`, `-Infinity` or `NaN`. Magnitudes below `1e-6` or
/// from `1e21` up switch to exponent form (`1e-7`, `1.5e+21`).
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = libm::fabs(value);
    if magnitude < EXP_BELOW {
        return format!("{value:e}");
    }
    if magnitude >= EXP_FROM {
        return format!("{value:e}").replacen('e', "e+", 1);
    }
    format!("{value}")
}

/// Render a result value for display
///
/// Integers render without a fractional part. Anything else is rounded
/// to 4 decimal places and rendered in its minimal decimal form, so
/// `2.5` stays `2.5` and `1/3` becomes `0.3333`.
pub fn format_number(value: f64) -> String {
    if is_integer(value) {
        return display_number(value);
    }
    display_number(libm::round(value * DISPLAY_SCALE) / DISPLAY_SCALE)
}
