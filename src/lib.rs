//! An immutable complex-number value type following IEEE-754 semantics for
//! NaN, infinity and signed zero.
//!
//! ```
//! use cxkit::prelude::*;
//!
//! let z = Complex::new(12.0, 13.0).add(&Complex::from_polar(10.0, std::f64::consts::PI)?);
//! assert!(Complex::equals_eps(&z, &Complex::new(2.0, 13.0), 1e-9));
//! # Ok::<(), cxkit::error::ComplexError>(())
//! ```
pub mod complex;
pub mod consts;
pub mod error;
pub mod prelude;
pub mod util;

pub use complex::{make, Complex};
pub use error::{ComplexError, Result};
