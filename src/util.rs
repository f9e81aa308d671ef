use crate::complex::Complex;
use crate::consts::{NEGATIVE_ZERO_BITS, POSITIVE_ZERO_BITS, SIGN_MASK};
use float_cmp::{ApproxEq, F64Margin};

/// Exact equality of two doubles by bit pattern: every NaN equals every
/// other NaN with the same payload, and `+0.0 != -0.0`.
pub fn bits_eq(x: f64, y: f64) -> bool {
    x.to_bits() == y.to_bits()
}

/// Returns true if `x` and `y` are at most `max_ulps` representable
/// doubles apart. The distance is measured on the raw bit patterns, going
/// through zero when the signs differ, so `+0.0` and `-0.0` are 0 apart.
/// Always false when either value is NaN.
pub fn ulps_eq(x: f64, y: f64, max_ulps: i32) -> bool {
    let x_int = x.to_bits() as i64;
    let y_int = y.to_bits() as i64;
    let max_ulps = max_ulps as i64;

    let is_equal = if (x_int ^ y_int) & SIGN_MASK == 0 {
        // same sign, the difference cannot overflow
        (x_int - y_int).abs() <= max_ulps
    } else {
        let (delta_plus, delta_minus) = if x_int < y_int {
            (
                y_int.wrapping_sub(POSITIVE_ZERO_BITS),
                x_int.wrapping_sub(NEGATIVE_ZERO_BITS),
            )
        } else {
            (
                x_int.wrapping_sub(POSITIVE_ZERO_BITS),
                y_int.wrapping_sub(NEGATIVE_ZERO_BITS),
            )
        };

        delta_plus <= max_ulps && delta_minus <= max_ulps - delta_plus
    };

    is_equal && !x.is_nan() && !y.is_nan()
}

/// Adjacent-or-equal (`ulps_eq(x, y, 1)`) or within absolute distance `eps`.
pub fn eps_eq(x: f64, y: f64, eps: f64) -> bool {
    ulps_eq(x, y, 1) || (y - x).abs() <= eps
}

/// Adjacent-or-equal, or the difference relative to the larger magnitude
/// is within `eps`.
pub fn relative_eq(x: f64, y: f64, eps: f64) -> bool {
    if ulps_eq(x, y, 1) {
        return true;
    }

    let absolute_max = x.abs().max(y.abs());
    let relative_difference = ((x - y) / absolute_max).abs();

    relative_difference <= eps
}

/// Hash of a double folded to 32 bits: the high word of the IEEE bit
/// pattern xor-ed into the low word.
pub fn hash_f64(value: f64) -> i32 {
    let bits = value.to_bits();
    (bits ^ (bits >> 32)) as i32
}

/// Panics with a descriptive message if `calc` is not within `margin` of
/// `exemplar` on both components.
pub fn comp_c64(exemplar: &Complex, calc: &Complex, margin: F64Margin, test: &str) {
    comp_f64(&exemplar.real(), &calc.real(), margin, test, "re");
    comp_f64(&exemplar.imaginary(), &calc.imaginary(), margin, test, "im");
}

/// Panics with a descriptive message if `calc` is not within `margin` of
/// `exemplar`.
pub fn comp_f64(exemplar: &f64, calc: &f64, margin: F64Margin, test: &str, part: &str) {
    assert!(
        (*exemplar).approx_eq(*calc, margin),
        "test {} {} does not match\n  exemplar: {}\n      calc: {}",
        test,
        part,
        exemplar,
        calc
    );
}
