//! Conversions to and from other complex and scalar types.
//!
//! Narrowing conversions to a real number all go through the modulus: a
//! complex value collapses to `abs()`, never to its real part.

use super::Complex;
use faer::complex_native::c64;
use num_complex::Complex64;
use num_traits::ToPrimitive;

impl Complex {
    /// Modulus truncated to an `i32` (saturating; NaN gives 0).
    pub fn int_value(&self) -> i32 {
        self.abs() as i32
    }

    /// Modulus truncated to an `i64` (saturating; NaN gives 0).
    pub fn long_value(&self) -> i64 {
        self.abs() as i64
    }

    /// Modulus rounded to an `f32`.
    pub fn float_value(&self) -> f32 {
        self.abs() as f32
    }

    /// Modulus.
    pub fn double_value(&self) -> f64 {
        self.abs()
    }
}

pub fn to_i32(z: &Complex) -> i32 {
    z.int_value()
}

pub fn to_i64(z: &Complex) -> i64 {
    z.long_value()
}

pub fn to_f32(z: &Complex) -> f32 {
    z.float_value()
}

pub fn to_f64(z: &Complex) -> f64 {
    z.double_value()
}

/// Checked conversions of the modulus: `None` when it is NaN or does not
/// fit the target type.
impl ToPrimitive for Complex {
    fn to_i64(&self) -> Option<i64> {
        self.abs().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.abs().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        let modulus = self.abs();
        if modulus.is_nan() {
            None
        } else {
            Some(modulus)
        }
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Complex::from_real(real)
    }
}

impl From<(f64, f64)> for Complex {
    fn from(parts: (f64, f64)) -> Self {
        Complex::new(parts.0, parts.1)
    }
}

impl From<Complex> for (f64, f64) {
    fn from(z: Complex) -> Self {
        (z.real, z.imaginary)
    }
}

impl From<Complex64> for Complex {
    fn from(z: Complex64) -> Self {
        Complex::new(z.re, z.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(z: Complex) -> Self {
        Complex64::new(z.real, z.imaginary)
    }
}

impl From<c64> for Complex {
    fn from(z: c64) -> Self {
        Complex::new(z.re, z.im)
    }
}

impl From<Complex> for c64 {
    fn from(z: Complex) -> Self {
        c64::new(z.real, z.imaginary)
    }
}
