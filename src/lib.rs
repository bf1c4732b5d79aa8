#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::all)]
#![allow(clippy::needless_range_loop)]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
extern crate core;

pub mod bigint;
pub mod bitset;
pub mod error;
pub mod stringify;
pub mod vector;
pub mod word;

pub use bigint::BigInt;
pub use error::BigIntError;
pub use stringify::{to_string_radix, Base};
pub use word::Word;
