//! The machine word underlying [`crate::vector::WordVector`].
//!
//! A word is an unsigned integer of width `W` bits, `W` one of `8`, `16`, or `32`.
//! Carry accumulation (in [`BigInt::add_at`](crate::bigint::BigInt::add_at) and
//! schoolbook multiplication) needs a "double word" strictly wider than `W`; that
//! widening type is [`Word::Double`].

use core::fmt::Debug;

use num_traits::{PrimInt, Unsigned, WrappingAdd, Zero};

/// A machine word of fixed bit width, with an associated double-width type used for
/// carry propagation.
///
/// Implemented for `u8`, `u16`, and `u32`. `W` must be strictly narrower than the
/// double word used for carry accumulation, which the three implementations here
/// satisfy (`u8`/`u16`, `u16`/`u32`, `u32`/`u64`).
pub trait Word: PrimInt + Unsigned + WrappingAdd + Zero + Debug + Default {
    /// An unsigned integer type at least twice as wide as `Self`, used to hold a
    /// carry or a partial product before it is split back into words.
    type Double: Copy
        + Clone
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + core::ops::Add<Output = Self::Double>
        + core::ops::Sub<Output = Self::Double>
        + core::ops::Mul<Output = Self::Double>
        + core::ops::Shr<u32, Output = Self::Double>
        + core::ops::Shl<u32, Output = Self::Double>;

    /// `W`, the bit width of this word type.
    const BITS: u32;

    /// The all-ones word, `WORD_MAX` in the spec.
    const WORD_MAX: Self;

    /// Zero-extend `self` into the double-width type.
    fn widen(self) -> Self::Double;

    /// Truncate a double-width value down to the low `W` bits.
    fn narrow(v: Self::Double) -> Self;

    /// Construct a word from a `u64`, truncating to the low `W` bits.
    fn from_u64_low(v: u64) -> Self;

    /// Zero-extend this word to `u64`.
    fn as_u64(self) -> u64;

    /// A single `1` bit at position `i` (`i < W`).
    fn bit(i: u32) -> Self;

    /// `true` if bit `i` (`i < W`) of `self` is set.
    fn test_bit(self, i: u32) -> bool {
        (self & Self::bit(i)) != Self::zero()
    }
}

macro_rules! impl_word {
    ($word:ty, $double:ty, $bits:literal) => {
        impl Word for $word {
            type Double = $double;

            const BITS: u32 = $bits;
            const WORD_MAX: Self = <$word>::MAX;

            #[inline]
            fn widen(self) -> Self::Double {
                self as $double
            }

            #[inline]
            fn narrow(v: Self::Double) -> Self {
                v as $word
            }

            #[inline]
            fn from_u64_low(v: u64) -> Self {
                v as $word
            }

            #[inline]
            fn as_u64(self) -> u64 {
                self as u64
            }

            #[inline]
            fn bit(i: u32) -> Self {
                1 as $word << i
            }
        }
    };
}

impl_word!(u8, u16, 8);
impl_word!(u16, u32, 16);
impl_word!(u32, u64, 32);
