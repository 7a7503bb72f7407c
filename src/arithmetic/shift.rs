use crate::{Error, Integer, Layout, Result, Word, BITS};
use crate::integer::Magnitude;

use super::trivial;

fn check(bits: Word) -> Result<()> {
    if bits >= BITS {
        return Err(Error::ShiftOutOfRange(bits));
    }
    Ok(())
}

impl Layout {
    /// Shifts left by fewer than 64 bits, growing by one word on carry-out.
    ///
    /// Note that "left" means "higher number".
    pub fn shl_assign(&mut self, bits: Word) -> Result<()> {
        check(bits)?;
        if bits == 0 {
            return Ok(());
        }

        let mut carry = 0;
        for word in self.words.iter_mut() {
            let new_carry = *word >> (BITS - bits);
            *word = (*word << bits) | carry;
            carry = new_carry;
        }

        if carry != 0 {
            self.words.push(carry);
        }
        Ok(())
    }

    /// Shifts right by fewer than 64 bits, dropping the leading word if it becomes zero.
    ///
    /// Note that "right" means "lower number".
    pub fn shr_assign(&mut self, bits: Word) -> Result<()> {
        check(bits)?;
        if bits == 0 {
            return Ok(());
        }

        let mut borrow = 0;
        for word in self.words.iter_mut().rev() {
            let new_borrow = *word << (BITS - bits);
            *word = (*word >> bits) | borrow;
            borrow = new_borrow;
        }

        if self.words.len() > 1 && self.leading_word() == 0 {
            self.words.pop();
        }
        Ok(())
    }
}

impl Integer {
    /// self <<= bits, for fewer than 64 bits
    pub fn try_shl(&mut self, bits: Word) -> Result<()> {
        check(bits)?;
        if bits == 0 {
            return Ok(());
        }

        match self.magnitude {
            Magnitude::Trivial(value) => {
                let carry = value >> (BITS - bits);
                if carry != 0 {
                    self.promote(value << bits, carry);
                } else {
                    self.set_trivial(value << bits);
                }
            }
            Magnitude::Extended(ref mut layout) => layout.shl_assign(bits)?,
        }
        self.normalize();
        Ok(())
    }

    /// self >>= bits, for fewer than 64 bits
    ///
    /// Extended values shrinking to a single word are demoted.
    pub fn try_shr(&mut self, bits: Word) -> Result<()> {
        check(bits)?;

        match self.magnitude {
            Magnitude::Trivial(value) => self.set_trivial(value >> bits),
            Magnitude::Extended(ref mut layout) => layout.shr_assign(bits)?,
        }
        self.normalize();
        Ok(())
    }

    /// self <<= rhs, for non-negative single-word `rhs`
    pub fn try_shl_by(&mut self, rhs: &Integer) -> Result<()> {
        self.try_shl(shift_amount(rhs)?)
    }

    /// self >>= rhs, for non-negative single-word `rhs`
    pub fn try_shr_by(&mut self, rhs: &Integer) -> Result<()> {
        self.try_shr(shift_amount(rhs)?)
    }
}

fn shift_amount(rhs: &Integer) -> Result<Word> {
    if rhs.is_zero() {
        return Ok(0);
    }
    let bits = trivial(rhs, "shift by Extended")?;
    if rhs.sign {
        return Err(Error::Unimplemented("shift by negative Integer"));
    }
    Ok(bits)
}
