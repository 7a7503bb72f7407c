#![cfg_attr(not(any(test, feature = "std")), no_std)]
//! Signed integers of arbitrary size, with a single-word fast path.
//!
//! An [`Integer`] holds small values inline in a single 64-bit [`Word`], and
//! promotes to a heap-allocated [`Layout`] of words once a value outgrows it.
//!
//! ```
//! use tagged_integer::{Integer, Radix};
//!
//! let mut x = Integer::from(u64::MAX);
//! x += 1;
//! assert!(!x.is_trivial());
//! assert_eq!(x.to_string(), "18446744073709551616");
//!
//! let y = Integer::from_str_radix("-ff", Radix::Hexadecimal).unwrap();
//! assert_eq!(y, Integer::from(-255i64));
//! ```
//!
//! Parsing and formatting support the radices of [`Radix`], in the literal
//! styles of [`Literal`]. Arithmetic with an extended (multi-word) operand on
//! both sides is partially unsupported so far, and fails with
//! [`Error::Unimplemented`] instead of silently computing something else.

extern crate alloc;

mod arithmetic;
mod digit;
pub use digit::{add_with_carry, mul_with_carry, Word, Words, BITS};
mod error;
pub use error::{Error, Result};
pub mod hash;
mod integer;
pub use integer::Integer;
mod layout;
pub use layout::Layout;
mod natural;
pub use natural::Natural;
pub mod radix;
pub use radix::{Alphabet, Literal, Radix};
