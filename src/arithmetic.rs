//! Arithmetic on [`Integer`] and its [`Layout`][crate::Layout].
//!
//! Operations come in two flavours:
//! - `try_*` methods, which report unsupported operand combinations as [`Error`]
//! - the `core::ops` traits, which panic with the same error message
//!
//! Single-word operands are always supported. For extended operands, so far
//! only the paths needed to parse and format numbers are available; the
//! others return [`Error::Unimplemented`] instead of computing something wrong.

use crate::{Error, Integer, Result, Word};

mod add;
mod bitwise;
mod compare;
mod divide;
mod impls;
mod multiply;
#[cfg(feature = "std")]
mod power;
mod shift;
mod subtract;

/// The inline value of a single-word operand.
pub(crate) fn trivial(integer: &Integer, what: &'static str) -> Result<Word> {
    integer.value().ok_or(Error::Unimplemented(what))
}
