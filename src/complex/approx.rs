use super::Complex;
use float_cmp::{ApproxEq, F64Margin};

/// Component-wise approximate equality under an [`F64Margin`]; a NaN part
/// on either side is never approximately equal to anything.
impl ApproxEq for Complex {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        let margin = margin.into();
        self.real.approx_eq(other.real, margin) && self.imaginary.approx_eq(other.imaginary, margin)
    }
}
