//! Elementary functions of a complex argument, built from the real
//! circular and hyperbolic functions through their closed-form identities.

use super::Complex;
use crate::consts::TRIG_CUTOFF;
use crate::error::{ComplexError, Result};
use std::f64::consts::PI;

impl Complex {
    /// Argument (phase angle) in `(-π, π]`, following `atan2` for NaN and
    /// infinite parts.
    pub fn argument(&self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Principal square root.
    pub fn sqrt(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        if self.is_origin() {
            return Complex::ZERO;
        }

        let t = ((self.real.abs() + self.abs()) / 2.0).sqrt();
        if self.real >= 0.0 {
            Complex::new(t, self.imaginary / (2.0 * t))
        } else {
            Complex::new(
                self.imaginary.abs() / (2.0 * t),
                1.0f64.copysign(self.imaginary) * t,
            )
        }
    }

    /// `sqrt(1 - self²)`.
    pub fn sqrt1z(&self) -> Complex {
        Complex::ONE.subtract(&self.multiply(self)).sqrt()
    }

    pub fn exp(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        let exp_real = self.real.exp();
        Complex::new(
            exp_real * self.imaginary.cos(),
            exp_real * self.imaginary.sin(),
        )
    }

    /// Natural logarithm on the principal branch.
    pub fn log(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        Complex::new(self.abs().ln(), self.imaginary.atan2(self.real))
    }

    /// `exp(x · log(self))`.
    pub fn pow(&self, x: &Complex) -> Complex {
        self.log().multiply(x).exp()
    }

    /// `exp(x · log(self))` for a real exponent.
    pub fn pow_real(&self, x: f64) -> Complex {
        self.log().multiply_real(x).exp()
    }

    pub fn sin(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        Complex::new(
            self.real.sin() * self.imaginary.cosh(),
            self.real.cos() * self.imaginary.sinh(),
        )
    }

    pub fn cos(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        Complex::new(
            self.real.cos() * self.imaginary.cosh(),
            -self.real.sin() * self.imaginary.sinh(),
        )
    }

    pub fn sinh(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        Complex::new(
            self.real.sinh() * self.imaginary.cos(),
            self.real.cosh() * self.imaginary.sin(),
        )
    }

    pub fn cosh(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        Complex::new(
            self.real.cosh() * self.imaginary.cos(),
            self.real.sinh() * self.imaginary.sin(),
        )
    }

    /// Tangent. NaN for an infinite real part; `±i` once `|imaginary|`
    /// exceeds the cut-off.
    pub fn tan(&self) -> Complex {
        if self.is_nan() || self.real.is_infinite() {
            return Complex::NAN;
        }
        if self.imaginary > TRIG_CUTOFF {
            return Complex::new(0.0, 1.0);
        }
        if self.imaginary < -TRIG_CUTOFF {
            return Complex::new(0.0, -1.0);
        }

        let real2 = 2.0 * self.real;
        let imaginary2 = 2.0 * self.imaginary;
        let d = real2.cos() + imaginary2.cosh();

        Complex::new(real2.sin() / d, imaginary2.sinh() / d)
    }

    /// Hyperbolic tangent. NaN for an infinite imaginary part; `±1` once
    /// `|real|` exceeds the cut-off.
    pub fn tanh(&self) -> Complex {
        if self.is_nan() || self.imaginary.is_infinite() {
            return Complex::NAN;
        }
        if self.real > TRIG_CUTOFF {
            return Complex::new(1.0, 0.0);
        }
        if self.real < -TRIG_CUTOFF {
            return Complex::new(-1.0, 0.0);
        }

        let real2 = 2.0 * self.real;
        let imaginary2 = 2.0 * self.imaginary;
        let d = real2.cosh() + imaginary2.cos();

        Complex::new(real2.sinh() / d, imaginary2.sin() / d)
    }

    /// `-i · log(sqrt(1 - self²) + i · self)`
    pub fn asin(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        self.sqrt1z()
            .add(&self.multiply(&Complex::I))
            .log()
            .multiply(&Complex::I.negate())
    }

    /// `-i · log(self + i · sqrt(1 - self²))`
    pub fn acos(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        self.add(&self.sqrt1z().multiply(&Complex::I))
            .log()
            .multiply(&Complex::I.negate())
    }

    /// `(i / 2) · log((i + self) / (i - self))`
    pub fn atan(&self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        self.add(&Complex::I)
            .divide(&Complex::I.subtract(self))
            .log()
            .multiply(&Complex::I.divide(&Complex::new(2.0, 0.0)))
    }

    /// The `n` n-th roots of `self`, ordered by `k = 0..n`:
    /// `|self|^(1/n) · (cos(φ/n + 2πk/n) + i·sin(φ/n + 2πk/n))`.
    ///
    /// A NaN value yields `[NAN]` and an infinite one `[INF]`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `n <= 0`.
    pub fn nth_root(&self, n: i32) -> Result<Vec<Complex>> {
        if n <= 0 {
            log::debug!("nth_root rejected non-positive degree {}", n);
            return Err(ComplexError::InvalidArgument(format!(
                "cannot compute nth root for non-positive n, got {}",
                n
            )));
        }

        if self.is_nan() {
            log::trace!("nth_root of NaN collapses to a single root");
            return Ok(vec![Complex::NAN]);
        }
        if self.is_infinite() {
            log::trace!("nth_root of {} collapses to a single root", self);
            return Ok(vec![Complex::INF]);
        }

        let degree = n as f64;
        let nth_root_of_abs = self.abs().powf(1.0 / degree);
        let nth_phi = self.argument() / degree;
        let slice = 2.0 * PI / degree;

        let roots = (0..n)
            .map(|k| {
                let inner = nth_phi + slice * k as f64;
                Complex::new(nth_root_of_abs * inner.cos(), nth_root_of_abs * inner.sin())
            })
            .collect();

        Ok(roots)
    }
}

#[cfg(test)]
mod transcendental_tests {
    use super::*;
    use crate::util::comp_c64;
    use float_cmp::*;
    use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4};

    const MARGIN: F64Margin = F64Margin {
        epsilon: 1e-12,
        ulps: 4,
    };

    const RELAXED_MARGIN: F64Margin = F64Margin {
        epsilon: 1e-9,
        ulps: 10,
    };

    #[test]
    fn argument() {
        assert_eq!(Complex::new(1.0, 0.0).argument(), 0.0);
        assert_eq!(Complex::new(-1.0, 0.0).argument(), PI);
        assert!(approx_eq!(f64, Complex::new(1.0, 1.0).argument(), FRAC_PI_4, MARGIN));
        assert!(approx_eq!(f64, Complex::new(0.0, -1.0).argument(), -FRAC_PI_2, MARGIN));
        assert!(approx_eq!(
            f64,
            Complex::new(f64::INFINITY, f64::INFINITY).argument(),
            FRAC_PI_4,
            MARGIN
        ));
        assert!(Complex::new(f64::NAN, 1.0).argument().is_nan());
    }

    #[test]
    fn sqrt() {
        assert_eq!(Complex::new(4.0, 0.0).sqrt(), Complex::new(2.0, 0.0));
        assert_eq!(Complex::new(-4.0, 0.0).sqrt(), Complex::new(0.0, 2.0));
        assert_eq!(Complex::new(-4.0, -0.0).sqrt(), Complex::new(0.0, -2.0));
        assert_eq!(Complex::new(3.0, 4.0).sqrt(), Complex::new(2.0, 1.0));
        assert_eq!(Complex::new(-3.0, 4.0).sqrt(), Complex::new(1.0, 2.0));
        assert_eq!(Complex::new(-3.0, -4.0).sqrt(), Complex::new(1.0, -2.0));
        assert_eq!(Complex::ZERO.sqrt(), Complex::ZERO);
        assert_eq!(Complex::new(-0.0, 0.0).sqrt(), Complex::ZERO);
        assert!(Complex::NAN.sqrt().is_nan());
    }

    #[test]
    fn sqrt1z() {
        comp_c64(
            &Complex::new(0.0, 0.0).sqrt1z(),
            &Complex::ONE,
            MARGIN,
            "sqrt1z zero",
        );
        // 1 - (3+4i)² = 8 - 24i
        comp_c64(
            &Complex::new(3.0, 4.0).sqrt1z(),
            &Complex::new(8.0, -24.0).sqrt(),
            MARGIN,
            "sqrt1z",
        );
        assert!(Complex::NAN.sqrt1z().is_nan());
    }

    #[test]
    fn exp_log() {
        comp_c64(&Complex::ONE.exp(), &Complex::new(E, 0.0), MARGIN, "exp 1");
        comp_c64(
            &Complex::new(0.0, PI).exp(),
            &Complex::new(-1.0, 0.0),
            MARGIN,
            "exp iπ",
        );
        comp_c64(
            &Complex::new(-1.0, 0.0).log(),
            &Complex::new(0.0, PI),
            MARGIN,
            "log -1",
        );
        comp_c64(
            &Complex::new(3.0, 4.0).log(),
            &Complex::new(5.0f64.ln(), 4.0f64.atan2(3.0)),
            MARGIN,
            "log 3+4i",
        );

        let log_zero = Complex::ZERO.log();
        assert_eq!(log_zero.real(), f64::NEG_INFINITY);
        assert_eq!(log_zero.imaginary(), 0.0);

        assert!(Complex::NAN.exp().is_nan());
        assert!(Complex::NAN.log().is_nan());
    }

    #[test]
    fn pow() {
        comp_c64(
            &Complex::new(3.0, 4.0).pow(&Complex::new(2.0, 0.0)),
            &Complex::new(-7.0, 24.0),
            RELAXED_MARGIN,
            "pow complex",
        );
        comp_c64(
            &Complex::new(3.0, 4.0).pow_real(2.0),
            &Complex::new(-7.0, 24.0),
            RELAXED_MARGIN,
            "pow real",
        );
        // i^i = e^(-π/2)
        comp_c64(
            &Complex::I.pow(&Complex::I),
            &Complex::new((-FRAC_PI_2).exp(), 0.0),
            MARGIN,
            "i^i",
        );
        assert!(Complex::ONE.pow(&Complex::NAN).is_nan());
        assert!(Complex::NAN.pow_real(2.0).is_nan());
    }

    #[test]
    fn circular() {
        let z = Complex::new(3.0, 4.0);
        comp_c64(
            &z.sin(),
            &Complex::new(3.0f64.sin() * 4.0f64.cosh(), 3.0f64.cos() * 4.0f64.sinh()),
            MARGIN,
            "sin",
        );
        comp_c64(
            &z.cos(),
            &Complex::new(3.0f64.cos() * 4.0f64.cosh(), -3.0f64.sin() * 4.0f64.sinh()),
            MARGIN,
            "cos",
        );
        assert!(Complex::NAN.sin().is_nan());
        assert!(Complex::NAN.cos().is_nan());

        let s = Complex::new(0.0, f64::INFINITY).sin();
        assert_eq!(s.imaginary(), f64::INFINITY);
    }

    #[test]
    fn hyperbolic() {
        let z = Complex::new(3.0, 4.0);
        comp_c64(
            &z.sinh(),
            &Complex::new(3.0f64.sinh() * 4.0f64.cos(), 3.0f64.cosh() * 4.0f64.sin()),
            MARGIN,
            "sinh",
        );
        comp_c64(
            &z.cosh(),
            &Complex::new(3.0f64.cosh() * 4.0f64.cos(), 3.0f64.sinh() * 4.0f64.sin()),
            MARGIN,
            "cosh",
        );
        assert!(Complex::NAN.sinh().is_nan());
        assert!(Complex::NAN.cosh().is_nan());
    }

    #[test]
    fn tan() {
        let z = Complex::new(3.0, 4.0);
        comp_c64(&z.tan(), &z.sin().divide(&z.cos()), MARGIN, "tan");

        assert_eq!(Complex::new(1.0, 20.0001).tan(), Complex::new(0.0, 1.0));
        assert_eq!(Complex::new(1.0, -20.0001).tan(), Complex::new(0.0, -1.0));

        let edge = Complex::new(1.0, 20.0).tan();
        assert_ne!(edge.real(), 0.0);
        assert!(approx_eq!(f64, edge.imaginary(), 1.0, MARGIN));

        assert!(Complex::new(f64::INFINITY, 0.0).tan().is_nan());
        assert!(Complex::NAN.tan().is_nan());
    }

    #[test]
    fn tanh() {
        let z = Complex::new(3.0, 4.0);
        comp_c64(&z.tanh(), &z.sinh().divide(&z.cosh()), MARGIN, "tanh");

        assert_eq!(Complex::new(20.0001, 1.0).tanh(), Complex::new(1.0, 0.0));
        assert_eq!(Complex::new(-20.0001, 1.0).tanh(), Complex::new(-1.0, 0.0));

        let edge = Complex::new(20.0, 1.0).tanh();
        assert_ne!(edge.imaginary(), 0.0);

        assert!(Complex::new(0.0, f64::NEG_INFINITY).tanh().is_nan());
        assert!(Complex::NAN.tanh().is_nan());
    }

    #[test]
    fn inverse_circular() {
        let z = Complex::new(0.3, -0.4);
        comp_c64(&z.asin().sin(), &z, MARGIN, "sin(asin)");
        comp_c64(&z.acos().cos(), &z, MARGIN, "cos(acos)");
        comp_c64(&z.atan().tan(), &z, MARGIN, "tan(atan)");

        comp_c64(
            &Complex::new(0.5, 0.0).asin(),
            &Complex::new(0.5f64.asin(), 0.0),
            MARGIN,
            "asin real",
        );
        comp_c64(
            &Complex::new(0.5, 0.0).acos(),
            &Complex::new(0.5f64.acos(), 0.0),
            MARGIN,
            "acos real",
        );
        comp_c64(
            &Complex::new(0.5, 0.0).atan(),
            &Complex::new(0.5f64.atan(), 0.0),
            MARGIN,
            "atan real",
        );

        assert!(Complex::NAN.asin().is_nan());
        assert!(Complex::NAN.acos().is_nan());
        assert!(Complex::NAN.atan().is_nan());
        assert!(Complex::I.atan().is_nan());
    }

    #[test]
    fn nth_root() {
        let roots = Complex::new(-8.0, 0.0).nth_root(3).unwrap();
        assert_eq!(roots.len(), 3);
        comp_c64(&roots[0], &Complex::new(1.0, 3.0f64.sqrt()), MARGIN, "root 0");
        comp_c64(&roots[1], &Complex::new(-2.0, 0.0), MARGIN, "root 1");
        comp_c64(&roots[2], &Complex::new(1.0, -(3.0f64.sqrt())), MARGIN, "root 2");

        let roots = Complex::new(16.0, 0.0).nth_root(4).unwrap();
        comp_c64(&roots[0], &Complex::new(2.0, 0.0), MARGIN, "fourth 0");
        comp_c64(&roots[1], &Complex::new(0.0, 2.0), MARGIN, "fourth 1");
        comp_c64(&roots[2], &Complex::new(-2.0, 0.0), MARGIN, "fourth 2");
        comp_c64(&roots[3], &Complex::new(0.0, -2.0), MARGIN, "fourth 3");

        let roots = Complex::new(3.0, 4.0).nth_root(1).unwrap();
        assert_eq!(roots.len(), 1);
        comp_c64(&roots[0], &Complex::new(3.0, 4.0), MARGIN, "first root");
    }

    #[test]
    fn nth_root_special() {
        let roots = Complex::NAN.nth_root(5).unwrap();
        assert_eq!(roots.len(), 1);
        assert!(roots[0].is_nan());

        let roots = Complex::new(f64::INFINITY, 1.0).nth_root(5).unwrap();
        assert_eq!(roots, vec![Complex::INF]);

        let roots = Complex::ZERO.nth_root(3).unwrap();
        assert_eq!(roots.len(), 3);
        assert!(roots.iter().all(|r| r.abs() == 0.0));

        assert!(matches!(
            Complex::ONE.nth_root(0),
            Err(ComplexError::InvalidArgument(_))
        ));
        assert!(matches!(
            Complex::ONE.nth_root(-1),
            Err(ComplexError::InvalidArgument(_))
        ));
    }
}
