use core::{fmt, hash::{Hash, Hasher}, ops::Index, str::FromStr};

use zeroize::Zeroize;

use super::Magnitude;
use crate::{Error, Integer, Radix, Word};

impl From<Word> for Integer {
    fn from(value: Word) -> Self {
        Self { sign: false, magnitude: Magnitude::Trivial(value) }
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self {
            sign: value < 0,
            magnitude: Magnitude::Trivial(value.unsigned_abs()),
        }
    }
}

/// Decimal, as in [`Integer::from_str_radix`].
impl FromStr for Integer {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(value, Radix::Decimal)
    }
}

/// Decimal, honoring width, fill and the `+` flag.
impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude_digits(Radix::Decimal, crate::radix::GENERAL)
            .map_err(|_| fmt::Error)?;
        f.pad_integral(!self.sign, "", &digits)
    }
}

impl fmt::Debug for Integer {
    #[cfg(feature = "hex-debug")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_be_bytes();
        let sign = if self.sign { "-" } else { "+" };
        write!(f, "Integer({}{})", sign, delog::hex_str!(bytes.as_slice(), 8))
    }

    #[cfg(not(feature = "hex-debug"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Integer")
            .field("sign", &self.sign)
            .field("words", &self.words())
            .finish()
    }
}

impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

/// Panics for out-of-bounds indices, cf. [`Integer::word`].
impl Index<usize> for Integer {
    type Output = Word;

    fn index(&self, index: usize) -> &Word {
        &self.words()[index]
    }
}

/// Wipes the magnitude, leaving zero.
impl Zeroize for Integer {
    fn zeroize(&mut self) {
        match &mut self.magnitude {
            Magnitude::Trivial(value) => value.zeroize(),
            Magnitude::Extended(layout) => layout.zeroize(),
        }
        self.sign = false;
        self.magnitude = Magnitude::Trivial(0);
    }
}

#[cfg(feature = "ct-maybe")]
impl subtle::ConstantTimeEq for Integer {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        use subtle::ConstantTimeEq;
        (self.sign as u8).ct_eq(&(other.sign as u8)) & self.words().ct_eq(other.words())
    }
}
