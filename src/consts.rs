//! Numerical cut-offs and hashing constants shared by the complex type.

/// Beyond this magnitude of `imaginary` (for `tan`) or `real` (for `tanh`)
/// the hyperbolic terms overflow the denominator, and the result is
/// returned as the limiting value `±i` (resp. `±1`).
pub const TRIG_CUTOFF: f64 = 20.0;

/// Hash code shared by every NaN-valued complex number.
pub const NAN_HASH: i32 = 7;

/// Weight applied to the imaginary part's hash before adding the real part's.
pub const HASH_IMAGINARY_FACTOR: i32 = 17;

/// Final multiplier of the combined component hashes.
pub const HASH_MULTIPLIER: i32 = 37;

/// Bit pattern of `+0.0`.
pub const POSITIVE_ZERO_BITS: i64 = 0;

/// Bit pattern of `-0.0`, read as a signed integer.
pub const NEGATIVE_ZERO_BITS: i64 = i64::MIN;

/// Sign bit of an IEEE-754 double.
pub const SIGN_MASK: i64 = i64::MIN;
