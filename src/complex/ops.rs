use super::Complex;
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

// Every operator forwards to the named operation, so the NaN short-circuit
// and INF collapsing rules hold for `a * b` exactly as for `a.multiply(&b)`.
macro_rules! impl_binop {
    ($Op:ident, $op:ident, $method:ident, $real_method:ident) => {
        impl $Op<Complex> for Complex {
            type Output = Complex;

            fn $op(self, rhs: Complex) -> Complex {
                Complex::$method(&self, &rhs)
            }
        }

        impl<'a> $Op<&'a Complex> for Complex {
            type Output = Complex;

            fn $op(self, rhs: &'a Complex) -> Complex {
                Complex::$method(&self, rhs)
            }
        }

        impl<'a> $Op<Complex> for &'a Complex {
            type Output = Complex;

            fn $op(self, rhs: Complex) -> Complex {
                Complex::$method(self, &rhs)
            }
        }

        impl<'a, 'b> $Op<&'b Complex> for &'a Complex {
            type Output = Complex;

            fn $op(self, rhs: &'b Complex) -> Complex {
                Complex::$method(self, rhs)
            }
        }

        impl $Op<f64> for Complex {
            type Output = Complex;

            fn $op(self, rhs: f64) -> Complex {
                Complex::$real_method(&self, rhs)
            }
        }

        impl<'a> $Op<f64> for &'a Complex {
            type Output = Complex;

            fn $op(self, rhs: f64) -> Complex {
                Complex::$real_method(self, rhs)
            }
        }
    };
}

impl_binop!(Add, add, add, add_real);
impl_binop!(Sub, sub, subtract, subtract_real);
impl_binop!(Mul, mul, multiply, multiply_real);
impl_binop!(Div, div, divide, divide_real);

// Reversed scalar operands, only where the operation commutes.
macro_rules! impl_scalar_lhs {
    ($Op:ident, $op:ident, $real_method:ident) => {
        impl $Op<Complex> for f64 {
            type Output = Complex;

            fn $op(self, rhs: Complex) -> Complex {
                Complex::$real_method(&rhs, self)
            }
        }

        impl<'a> $Op<&'a Complex> for f64 {
            type Output = Complex;

            fn $op(self, rhs: &'a Complex) -> Complex {
                Complex::$real_method(rhs, self)
            }
        }
    };
}

impl_scalar_lhs!(Add, add, add_real);
impl_scalar_lhs!(Mul, mul, multiply_real);

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        self.negate()
    }
}

impl<'a> Neg for &'a Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        self.negate()
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    /// Numeric comparison, so `-0.0` parts count as zero.
    fn is_zero(&self) -> bool {
        self.is_origin()
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }
}
