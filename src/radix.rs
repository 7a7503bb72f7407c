//! Digit alphabets and literal formats.
//!
//! Each alphabet is used both ways: the position of a character is its value
//! when decoding, the character at a value's position is its digit when encoding.
//!
//! Which alphabet applies is determined by the [`Literal`] style, which also
//! determines the prefix (e.g., `0x`) accompanying a [`Radix`].

use crate::{Error, Result, Word};

/// Numeric base for parsing and formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Radix {
    Binary = 2,
    Octal = 8,
    Decimal = 10,
    Hexadecimal = 16,
    Sexagesimal = 60,
    Radix64 = 64,
}

/// Formatting convention: alphabet plus prefix decorations.
///
/// The discriminant divided by ten selects the alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Literal {
    None = 0,
    Stdhl = 1,
    C = 2,
    Cpp14 = 3,
    Base64 = 10,
    Unix = 20,
}

impl Default for Literal {
    fn default() -> Self {
        Literal::None
    }
}

/// Fixed ordered sequence of 64 digit characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet(&'static [u8; 64]);

/// Digits, lower case, upper case, `@$`.
pub const GENERAL: Alphabet = Alphabet(b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ@$");
/// RFC 4648 base64 ordering.
pub const BASE64: Alphabet = Alphabet(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");
/// crypt(3) style radix-64 ordering.
pub const UNIX: Alphabet = Alphabet(b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

const ALPHABETS: [Alphabet; 3] = [GENERAL, BASE64, UNIX];

impl Radix {
    #[inline]
    pub fn value(self) -> Word {
        self as Word
    }

    /// Bits per digit, for the radices that are powers of two.
    pub fn shift(self) -> Option<Word> {
        match self {
            Radix::Binary => Some(1),
            Radix::Octal => Some(3),
            Radix::Hexadecimal => Some(4),
            Radix::Radix64 => Some(6),
            Radix::Decimal | Radix::Sexagesimal => None,
        }
    }
}

impl Literal {
    pub fn alphabet(self) -> Alphabet {
        ALPHABETS[(self as usize) / 10]
    }

    /// The decoration preceding the digits of a number in this radix.
    ///
    /// Fails if this style has no format for the radix.
    pub fn prefix(self, radix: Radix) -> Result<&'static str> {
        let unsupported = Err(Error::UnsupportedLiteral { radix, literal: self });

        match self {
            Literal::None => Ok(""),
            // http://en.cppreference.com/w/cpp/language/integer_literal
            Literal::Stdhl | Literal::C | Literal::Cpp14 => match radix {
                Radix::Binary => match self {
                    Literal::Stdhl | Literal::Cpp14 => Ok("0b"),
                    _ => unsupported,
                },
                Radix::Octal => match self {
                    Literal::Stdhl => Ok("0c"),
                    _ => Ok("0"),
                },
                Radix::Decimal => Ok(""),
                Radix::Hexadecimal => Ok("0x"),
                Radix::Sexagesimal => match self {
                    Literal::Stdhl => unsupported,
                    _ => Ok("0s"),
                },
                Radix::Radix64 => match self {
                    Literal::Stdhl => Ok(""),
                    _ => unsupported,
                },
            },
            Literal::Base64 | Literal::Unix => match radix {
                Radix::Radix64 => Ok(""),
                _ => unsupported,
            },
        }
    }
}

impl Alphabet {
    pub fn as_bytes(&self) -> &'static [u8] {
        self.0
    }

    /// Position of the character, if present.
    pub fn position(&self, character: char) -> Option<Word> {
        if !character.is_ascii() {
            return None;
        }
        self.0.iter()
            .position(|&c| c == character as u8)
            .map(|i| i as Word)
    }
}

/// Value of `character` as a digit in `radix`.
pub fn digit_to_value(character: char, radix: Radix, alphabet: Alphabet) -> Result<Word> {
    let digit = alphabet.position(character)
        .ok_or(Error::InvalidCharacter(character))?;

    if digit >= radix.value() {
        return Err(Error::DigitOutOfRange { digit, radix: radix.value() });
    }

    Ok(digit)
}

/// Digit character of `value`, which must be smaller than 64.
#[inline]
pub fn value_to_digit(value: Word, alphabet: Alphabet) -> char {
    alphabet.0[value as usize] as char
}
