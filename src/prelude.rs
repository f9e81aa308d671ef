//! cxkit prelude.
//!
//! This module contains the most used types, traits and functions, that
//! you can import easily as a group.
//!
//! ```
//! use cxkit::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::complex::convert::{to_f32, to_f64, to_i32, to_i64};
#[doc(no_inline)]
pub use crate::complex::{make, Complex};

#[doc(no_inline)]
pub use crate::error::ComplexError;

#[doc(no_inline)]
pub use float_cmp::{ApproxEq, F64Margin};
#[doc(no_inline)]
pub use num_traits::{One, ToPrimitive, Zero};
