//! Non-negative integers.

use core::{
    convert::TryFrom,
    fmt,
    ops::{BitAndAssign, BitOrAssign, BitXorAssign, Deref, ShlAssign},
};

use ref_cast::RefCast;

use crate::{Error, Integer, Radix, Result, Word, BITS};

/// An [`Integer`] that is not negative.
///
/// Shares the representation of `Integer`, so any non-negative `&Integer`
/// can be viewed as `&Natural` without copying.
///
/// Also the exponent of `Integer::try_pow`, with the `std` feature.
#[repr(transparent)]
#[derive(Clone, Debug, PartialEq, Eq, Hash, RefCast)]
pub struct Natural(Integer);

impl Natural {
    pub fn zero() -> Self {
        Self(Integer::zero())
    }

    /// View a non-negative integer as natural number.
    pub fn try_ref(integer: &Integer) -> Result<&Self> {
        if integer.sign() {
            return Err(Error::Negative);
        }
        Ok(Self::ref_cast(integer))
    }

    /// Fails for negative numbers (but "-0" is fine).
    pub fn from_str_radix(value: &str, radix: Radix) -> Result<Self> {
        Self::try_from(Integer::from_str_radix(value, radix)?)
    }

    pub fn into_integer(self) -> Integer {
        self.0
    }

    /// Whether bit `bit` is set, counting from 1 for the least significant bit.
    ///
    /// Only the first word is addressable.
    pub fn is_set(&self, bit: Word) -> Result<bool> {
        if bit == 0 || bit > BITS {
            return Err(Error::OutOfBounds { index: bit as usize, len: BITS as usize });
        }
        Ok((self.0.words()[0] >> (bit - 1)) & 1 == 1)
    }

    fn try_bitwise(&mut self, rhs: &Natural, what: &'static str, op: fn(Word, Word) -> Word) -> Result<()> {
        match (self.0.value(), rhs.value()) {
            (Some(a), Some(b)) => {
                self.0.set_trivial(op(a, b));
                Ok(())
            }
            _ => Err(Error::Unimplemented(what)),
        }
    }

    /// self ^= rhs, for single-word operands
    pub fn try_xor(&mut self, rhs: &Natural) -> Result<()> {
        self.try_bitwise(rhs, "Natural ^= Extended", |a, b| a ^ b)
    }

    /// self |= rhs, for single-word operands
    pub fn try_or(&mut self, rhs: &Natural) -> Result<()> {
        self.try_bitwise(rhs, "Natural |= Extended", |a, b| a | b)
    }

    /// self &= rhs, for single-word operands
    pub fn try_and(&mut self, rhs: &Natural) -> Result<()> {
        self.try_bitwise(rhs, "Natural &= Extended", |a, b| a & b)
    }
}

impl Deref for Natural {
    type Target = Integer;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Word> for Natural {
    fn from(value: Word) -> Self {
        Self(Integer::from(value))
    }
}

impl TryFrom<Integer> for Natural {
    type Error = Error;

    fn try_from(integer: Integer) -> Result<Self> {
        if integer.sign() {
            return Err(Error::Negative);
        }
        Ok(Self(integer))
    }
}

impl From<Natural> for Integer {
    fn from(natural: Natural) -> Self {
        natural.0
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! bitwise_assign {
    ($OpAssign:ident, $op_assign:ident, $try:ident) => {
        impl $OpAssign<&Natural> for Natural {
            #[track_caller]
            fn $op_assign(&mut self, rhs: &Natural) {
                if let Err(error) = self.$try(rhs) {
                    panic!("{}", error);
                }
            }
        }
    };
}

bitwise_assign!(BitXorAssign, bitxor_assign, try_xor);
bitwise_assign!(BitOrAssign, bitor_assign, try_or);
bitwise_assign!(BitAndAssign, bitand_assign, try_and);

/// Left shifts keep naturals natural.
impl ShlAssign<Word> for Natural {
    #[track_caller]
    fn shl_assign(&mut self, bits: Word) {
        if let Err(error) = self.0.try_shl(bits) {
            panic!("{}", error);
        }
    }
}
