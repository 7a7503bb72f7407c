use core::fmt;

use crate::{Literal, Radix, Word};

/// Everything that can go wrong, from parsing to not-yet-supported operand combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// No digits left after stripping separators, sign and prefix.
    Empty,
    /// Character is not part of the selected alphabet.
    InvalidCharacter(char),
    /// Character is part of the alphabet, but its value is not a digit in this radix.
    DigitOutOfRange { digit: Word, radix: Word },
    /// There is no literal format for this radix in this style.
    UnsupportedLiteral { radix: Radix, literal: Literal },
    /// The operand combination is not supported (yet).
    Unimplemented(&'static str),
    /// Word index beyond the stored words.
    OutOfBounds { index: usize, len: usize },
    DivisionByZero,
    /// Shifts are by at most 63 bits.
    ShiftOutOfRange(Word),
    /// Negative value where a natural number is required.
    Negative,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => f.write_str("unable to convert empty digit sequence to a valid Integer"),
            Error::InvalidCharacter(c) => write!(f, "invalid character '{}' to convert to a digit", c),
            Error::DigitOutOfRange { digit, radix } => {
                write!(f, "digit '{}' must be smaller than radix '{}'", digit, radix)
            }
            Error::UnsupportedLiteral { radix, literal } => {
                write!(f, "{:?} literal format not specified for radix '{}'", literal, *radix as u8)
            }
            Error::Unimplemented(what) => write!(f, "unimplemented '{}'", what),
            Error::OutOfBounds { index, len } => {
                write!(f, "word index {} out of bounds for {} words", index, len)
            }
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::ShiftOutOfRange(bits) => write!(f, "shift by {} bits out of range", bits),
            Error::Negative => f.write_str("negative value where a natural number is required"),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for Error {}
