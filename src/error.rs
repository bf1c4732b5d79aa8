//! Error states surfaced by [`crate::bigint::BigInt`].

use core::fmt;
use core::write;

/// Error states for [`crate::bigint::BigInt`] operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BigIntError {
    /// Division or modulo was attempted with a divisor of zero used bits.
    DivideByZero,

    /// A conversion to a native integer type overflowed: the value's `used_bits`
    /// exceeds the target type's width.
    IntegerConversionOverflow,
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::DivideByZero => write!(f, "division by zero"),
            BigIntError::IntegerConversionOverflow => {
                write!(f, "value does not fit in the target integer type")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BigIntError {}
