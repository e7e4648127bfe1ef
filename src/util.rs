//! Decimal rounding policy shared by every vector operation.
use libm::{fabs, floor, fma, fmod, pow};

/// Decimal places kept by every constructed coordinate
pub(crate) const COORDINATE_PRECISION: i32 = 2;
/// Decimal places kept by the dot product
pub(crate) const DOT_PRECISION: i32 = 4;
/// Angles are reported in whole degrees
pub(crate) const ANGLE_PRECISION: i32 = 0;

// Beyond this every f64 is an even integer, so scaled values carry no
// fractional digits
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.;

/// Rounds `value` to `places` decimal places, ties to even.
///
/// Ties are judged on the exact binary value of `value`, so `2.675`
/// (stored just below the tie) rounds down to `2.67`.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        log::debug!("Rounding skipped for non-finite value: {}", value);
        return value;
    }
    let factor = pow(10., places as f64);
    let scaled = value * factor;
    if fabs(scaled) >= EXACT_INTEGER_LIMIT {
        log::debug!("Rounding skipped, {} has no digits past {} places", value, places);
        return value;
    }
    // `scaled + residual` is the exact product
    let residual = fma(value, factor, -scaled);
    let lower = floor(scaled);
    let fraction = scaled - lower;
    let rounded = if fraction > 0.5 {
        lower + 1.
    } else if fraction == 0.5 {
        if residual > 0. {
            lower + 1.
        } else if residual < 0. {
            lower
        } else {
            nearest_even(lower, lower + 1.)
        }
    } else if fraction == 0. && fabs(residual) == 0.5 {
        nearest_even(lower, lower + residual * 2.)
    } else {
        lower
    };
    rounded / factor
}

fn nearest_even(a: f64, b: f64) -> f64 {
    if fmod(a, 2.) == 0. {
        a
    } else {
        b
    }
}

/// Rounds to the precision of a vector coordinate.
#[inline(always)]
pub(crate) fn round_coordinate(value: f64) -> f64 {
    round_to(value, COORDINATE_PRECISION)
}
