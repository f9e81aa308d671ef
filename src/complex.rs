#![allow(clippy::should_implement_trait)]
use crate::consts::{HASH_IMAGINARY_FACTOR, HASH_MULTIPLIER, NAN_HASH};
use crate::error::{ComplexError, Result};
use crate::util::{bits_eq, eps_eq, hash_f64, relative_eq, ulps_eq};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

pub mod approx;
pub mod convert;
pub mod ops;
pub mod transcendental;

/// An immutable complex number `real + imaginary·i` with IEEE-754
/// semantics for NaN, infinity and signed zero.
///
/// Any value with a NaN component is treated as the single canonical
/// [`Complex::NAN`]: operations short-circuit to it and all such values
/// compare equal to one another.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Complex {
    real: f64,
    imaginary: f64,
}

impl Complex {
    /// The square root of -1.
    pub const I: Self = Self::new(0.0, 1.0);

    /// A complex number representing "NaN + NaN·i".
    pub const NAN: Self = Self::new(f64::NAN, f64::NAN);

    /// A complex number representing "+INF + INF·i".
    pub const INF: Self = Self::new(f64::INFINITY, f64::INFINITY);

    /// A complex number representing "1.0 + 0.0·i".
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// A complex number representing "0.0 + 0.0·i".
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a complex number from its parts; both are stored verbatim.
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Complex { real, imaginary }
    }

    /// Create a complex number with a zero imaginary part.
    pub const fn from_real(real: f64) -> Self {
        Complex::new(real, 0.0)
    }

    /// Like [`Complex::new`], but any NaN part yields [`Complex::NAN`].
    pub fn value_of(real: f64, imaginary: f64) -> Self {
        if real.is_nan() || imaginary.is_nan() {
            return Complex::NAN;
        }
        Complex::new(real, imaginary)
    }

    /// Like [`Complex::from_real`], but a NaN part yields [`Complex::NAN`].
    pub fn value_of_real(real: f64) -> Self {
        if real.is_nan() {
            return Complex::NAN;
        }
        Complex::from_real(real)
    }

    /// Create a complex number from its modulus `r` and argument `theta`.
    ///
    /// NaN `r` or `theta`, and infinite `theta`, are not checked: they
    /// propagate through `cos` and `sin`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `r` is negative.
    pub fn from_polar(r: f64, theta: f64) -> Result<Self> {
        if r < 0.0 {
            log::debug!("from_polar rejected negative modulus {}", r);
            return Err(ComplexError::InvalidArgument(format!(
                "complex modulus must be positive, got {}",
                r
            )));
        }
        Ok(Complex::new(r * theta.cos(), r * theta.sin()))
    }

    /// Get the real part
    pub fn real(&self) -> f64 {
        self.real
    }

    /// Get the real part
    pub fn re(&self) -> f64 {
        self.real
    }

    /// Get the imaginary part
    pub fn imaginary(&self) -> f64 {
        self.imaginary
    }

    /// Get the imaginary part
    pub fn im(&self) -> f64 {
        self.imaginary
    }

    /// True if either part is NaN.
    pub fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imaginary.is_nan()
    }

    /// True if neither part is NaN and at least one is infinite.
    pub fn is_infinite(&self) -> bool {
        !self.is_nan() && (self.real.is_infinite() || self.imaginary.is_infinite())
    }

    fn has_infinite_part(&self) -> bool {
        self.real.is_infinite() || self.imaginary.is_infinite()
    }

    fn is_origin(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Modulus, computed as a scaled hypotenuse so that large parts do not
    /// overflow. NaN for NaN values, `+INF` for infinite ones.
    pub fn abs(&self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        if self.is_infinite() {
            return f64::INFINITY;
        }
        if self.real.abs() < self.imaginary.abs() {
            if self.real == 0.0 {
                return self.imaginary.abs();
            }
            let q = self.real / self.imaginary;
            self.imaginary.abs() * (1.0 + q * q).sqrt()
        } else {
            if self.imaginary == 0.0 {
                return self.real.abs();
            }
            let q = self.imaginary / self.real;
            self.real.abs() * (1.0 + q * q).sqrt()
        }
    }

    pub fn add(&self, addend: &Complex) -> Complex {
        if self.is_nan() || addend.is_nan() {
            return Complex::NAN;
        }
        Complex::new(self.real + addend.real, self.imaginary + addend.imaginary)
    }

    pub fn add_real(&self, addend: f64) -> Complex {
        if self.is_nan() || addend.is_nan() {
            return Complex::NAN;
        }
        Complex::new(self.real + addend, self.imaginary)
    }

    pub fn subtract(&self, subtrahend: &Complex) -> Complex {
        if self.is_nan() || subtrahend.is_nan() {
            return Complex::NAN;
        }
        Complex::new(
            self.real - subtrahend.real,
            self.imaginary - subtrahend.imaginary,
        )
    }

    pub fn subtract_real(&self, subtrahend: f64) -> Complex {
        if self.is_nan() || subtrahend.is_nan() {
            return Complex::NAN;
        }
        Complex::new(self.real - subtrahend, self.imaginary)
    }

    pub fn negate(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        Complex::new(-self.real, -self.imaginary)
    }

    pub fn conjugate(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        Complex::new(self.real, -self.imaginary)
    }

    /// Product of two complex numbers.
    ///
    /// Any infinite part on either side collapses the result to
    /// [`Complex::INF`] instead of following per-component IEEE rules.
    pub fn multiply(&self, factor: &Complex) -> Complex {
        if self.is_nan() || factor.is_nan() {
            return Complex::NAN;
        }
        if self.has_infinite_part() || factor.has_infinite_part() {
            return Complex::INF;
        }
        Complex::new(
            self.real * factor.real - self.imaginary * factor.imaginary,
            self.real * factor.imaginary + self.imaginary * factor.real,
        )
    }

    pub fn multiply_real(&self, factor: f64) -> Complex {
        if self.is_nan() || factor.is_nan() {
            return Complex::NAN;
        }
        if self.has_infinite_part() || factor.is_infinite() {
            return Complex::INF;
        }
        Complex::new(self.real * factor, self.imaginary * factor)
    }

    pub fn multiply_int(&self, factor: i32) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        if self.has_infinite_part() {
            return Complex::INF;
        }
        let factor = factor as f64;
        Complex::new(self.real * factor, self.imaginary * factor)
    }

    /// Quotient of two complex numbers using Smith's prescaled algorithm.
    ///
    /// Division by zero, and infinite by infinite, give [`Complex::NAN`];
    /// a finite value over an infinite one gives [`Complex::ZERO`].
    pub fn divide(&self, divisor: &Complex) -> Complex {
        if self.is_nan() || divisor.is_nan() {
            return Complex::NAN;
        }

        let c = divisor.real;
        let d = divisor.imaginary;
        if c == 0.0 && d == 0.0 {
            return Complex::NAN;
        }

        if divisor.is_infinite() {
            if self.is_infinite() {
                return Complex::NAN;
            }
            return Complex::ZERO;
        }

        if c.abs() < d.abs() {
            let q = c / d;
            let denominator = c * q + d;
            Complex::new(
                (self.real * q + self.imaginary) / denominator,
                (self.imaginary * q - self.real) / denominator,
            )
        } else {
            let q = d / c;
            let denominator = d * q + c;
            Complex::new(
                (self.imaginary * q + self.real) / denominator,
                (self.imaginary - self.real * q) / denominator,
            )
        }
    }

    pub fn divide_real(&self, divisor: f64) -> Complex {
        if self.is_nan() || divisor.is_nan() {
            return Complex::NAN;
        }
        if divisor == 0.0 {
            return Complex::NAN;
        }
        if divisor.is_infinite() {
            return if self.is_infinite() {
                Complex::NAN
            } else {
                Complex::ZERO
            };
        }
        Complex::new(self.real / divisor, self.imaginary / divisor)
    }

    /// `1 / self`, prescaled like [`Complex::divide`]. Zero maps to
    /// [`Complex::INF`] and infinite values to [`Complex::ZERO`].
    pub fn reciprocal(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        if self.is_origin() {
            return Complex::INF;
        }
        if self.is_infinite() {
            return Complex::ZERO;
        }

        if self.real.abs() < self.imaginary.abs() {
            let q = self.real / self.imaginary;
            let scale = 1.0 / (self.real * q + self.imaginary);
            Complex::new(scale * q, -scale)
        } else {
            let q = self.imaginary / self.real;
            let scale = 1.0 / (self.imaginary * q + self.real);
            Complex::new(scale, -scale * q)
        }
    }

    /// Applies `op` to `self` and an operand that may be absent.
    ///
    /// # Errors
    ///
    /// `NullArgument` when `operand` is `None`; `op` is not called.
    pub fn apply_checked<F>(&self, operand: Option<&Complex>, op: F) -> Result<Complex>
    where
        F: FnOnce(&Complex, &Complex) -> Complex,
    {
        match operand {
            Some(operand) => Ok(op(self, operand)),
            None => {
                log::debug!("apply_checked called without an operand on {}", self);
                Err(ComplexError::NullArgument)
            }
        }
    }

    /// Hash code consistent with [`PartialEq`]: every NaN hashes to 7,
    /// otherwise the component hashes are combined order-sensitively.
    pub fn hash_code(&self) -> i32 {
        if self.is_nan() {
            return NAN_HASH;
        }
        HASH_MULTIPLIER.wrapping_mul(
            HASH_IMAGINARY_FACTOR
                .wrapping_mul(hash_f64(self.imaginary))
                .wrapping_add(hash_f64(self.real)),
        )
    }

    /// Both parts within one ULP of each other.
    pub fn equals(x: &Complex, y: &Complex) -> bool {
        Complex::equals_ulps(x, y, 1)
    }

    /// Both parts at most `max_ulps` representable doubles apart. False if
    /// either value is NaN.
    pub fn equals_ulps(x: &Complex, y: &Complex, max_ulps: i32) -> bool {
        ulps_eq(x.real, y.real, max_ulps) && ulps_eq(x.imaginary, y.imaginary, max_ulps)
    }

    /// Both parts adjacent-or-equal, or within absolute distance `eps`.
    pub fn equals_eps(x: &Complex, y: &Complex, eps: f64) -> bool {
        eps_eq(x.real, y.real, eps) && eps_eq(x.imaginary, y.imaginary, eps)
    }

    /// Both parts adjacent-or-equal, or within relative distance `eps`.
    pub fn equals_with_relative_tolerance(x: &Complex, y: &Complex, eps: f64) -> bool {
        relative_eq(x.real, y.real, eps) && relative_eq(x.imaginary, y.imaginary, eps)
    }
}

/// Default construction hook. Callers that need a specialized variant pass
/// their own `fn(f64, f64) -> Complex` wherever this one is accepted.
pub fn make(real: f64, imaginary: f64) -> Complex {
    Complex::new(real, imaginary)
}

impl Default for Complex {
    fn default() -> Self {
        Complex::ZERO
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        if other.is_nan() {
            return self.is_nan();
        }
        bits_eq(self.real, other.real) && bits_eq(self.imaginary, other.imaginary)
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.real, self.imaginary)
    }
}
