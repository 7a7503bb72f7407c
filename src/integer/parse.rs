use alloc::string::String;

use crate::{Error, Integer, Literal, Radix, Result};
use crate::radix::digit_to_value;

impl Integer {
    /// Parses digits of the general alphabet, cf. [`Self::from_str_literal`].
    pub fn from_str_radix(value: &str, radix: Radix) -> Result<Self> {
        Self::from_str_literal(value, radix, Literal::None)
    }

    /// Parses an optionally signed number, with the alphabet and optional
    /// prefix (e.g., `0x`) of the literal style.
    ///
    /// Apostrophes are digit separators, and ignored.
    ///
    /// A leading `+` is only a sign if it is not a digit of the alphabet.
    pub fn from_str_literal(value: &str, radix: Radix, literal: Literal) -> Result<Self> {
        let alphabet = literal.alphabet();
        let prefix = literal.prefix(radix)?;

        let data: String = value.chars().filter(|&c| c != '\'').collect();

        let (negative, digits) = match data.as_bytes().first() {
            Some(b'-') => (true, &data[1..]),
            Some(b'+') if alphabet.position('+').is_none() => (false, &data[1..]),
            _ => (false, &data[..]),
        };

        // a lone "0" is a digit, not an octal prefix
        let digits = match digits.strip_prefix(prefix) {
            Some(rest) if !rest.is_empty() => rest,
            _ => digits,
        };

        if digits.is_empty() {
            return Err(Error::Empty);
        }

        let mut integer = Integer::zero();
        for character in digits.chars() {
            let digit = digit_to_value(character, radix, alphabet)?;
            match radix.shift() {
                Some(bits) => integer.try_shl(bits)?,
                None => integer.mul_word(radix.value()),
            }
            integer.try_add_word(digit)?;
        }

        integer.sign = negative;
        integer.normalize();
        Ok(integer)
    }
}
