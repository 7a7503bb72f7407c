use core::cmp::Ordering;

use crate::{Error, Integer, Result, Word};
use crate::integer::Magnitude;

// Relies on the canonical representation: an extended value never equals
// a trivial one, and zero is never negative.
impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && match (&self.magnitude, &other.magnitude) {
            (Magnitude::Trivial(a), Magnitude::Trivial(b)) => a == b,
            (Magnitude::Extended(a), Magnitude::Extended(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Integer {}

impl PartialEq<Word> for Integer {
    fn eq(&self, other: &Word) -> bool {
        !self.sign && match &self.magnitude {
            Magnitude::Trivial(value) => value == other,
            Magnitude::Extended(layout) => layout.eq_word(*other),
        }
    }
}

impl Integer {
    /// Total order for differing signs or single-word operands.
    ///
    /// Fails for two extended operands of the same sign.
    pub fn try_cmp(&self, other: &Integer) -> Result<Ordering> {
        match (self.sign, other.sign) {
            (true, false) => Ok(Ordering::Less),
            (false, true) => Ok(Ordering::Greater),
            (negative, _) => {
                let ordering = match (&self.magnitude, &other.magnitude) {
                    (Magnitude::Trivial(a), Magnitude::Trivial(b)) => a.cmp(b),
                    _ => return Err(Error::Unimplemented("ordering of Extended")),
                };
                Ok(if negative { ordering.reverse() } else { ordering })
            }
        }
    }

    pub fn try_lt(&self, other: &Integer) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    pub fn try_le(&self, other: &Integer) -> Result<bool> {
        Ok(self.try_cmp(other)? != Ordering::Greater)
    }

    pub fn try_gt(&self, other: &Integer) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    pub fn try_ge(&self, other: &Integer) -> Result<bool> {
        Ok(self.try_cmp(other)? != Ordering::Less)
    }
}
