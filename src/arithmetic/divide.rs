use crate::{Error, Integer, Layout, Result, Word};
use crate::digit::div_words;
use crate::integer::Magnitude;

use super::trivial;

impl Layout {
    /// Divides in-place by a word, returning the remainder.
    ///
    /// Runs down the words, carrying along the remainder. Leading zero
    /// words of the quotient are kept.
    pub fn div_rem_assign_word(&mut self, divisor: Word) -> Result<Word> {
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }

        let mut remainder = 0;
        for word in self.words.iter_mut().rev() {
            let (quotient, r) = div_words(remainder, *word, divisor);
            *word = quotient;
            remainder = r;
        }
        Ok(remainder)
    }
}

impl Integer {
    /// |self| /= divisor, returning the remainder of the magnitudes.
    pub fn try_div_rem_word(&mut self, divisor: Word) -> Result<Word> {
        let remainder = match self.magnitude {
            _ if divisor == 0 => return Err(Error::DivisionByZero),
            Magnitude::Trivial(value) => {
                self.set_trivial(value / divisor);
                value % divisor
            }
            Magnitude::Extended(ref mut layout) => layout.div_rem_assign_word(divisor)?,
        };
        self.normalize();
        Ok(remainder)
    }

    /// self /= divisor, truncating towards zero
    pub fn try_div_word(&mut self, divisor: Word) -> Result<()> {
        self.try_div_rem_word(divisor).map(drop)
    }

    /// self %= divisor, the remainder having the sign of the dividend
    pub fn try_rem_word(&mut self, divisor: Word) -> Result<()> {
        // a zero quotient clears the sign
        let sign = self.sign;
        let remainder = self.try_div_rem_word(divisor)?;
        self.set_trivial(remainder);
        self.sign = sign;
        self.normalize();
        Ok(())
    }

    /// self /= rhs, truncating towards zero
    ///
    /// Fails for extended `rhs`.
    pub fn try_div(&mut self, rhs: &Integer) -> Result<()> {
        let value = trivial(rhs, "Integer /= Extended")?;
        let sign = self.sign != rhs.sign;
        self.try_div_word(value)?;
        self.sign = sign;
        self.normalize();
        Ok(())
    }

    /// self %= rhs, the remainder having the sign of the dividend
    ///
    /// Fails for extended `rhs`.
    pub fn try_rem(&mut self, rhs: &Integer) -> Result<()> {
        let value = trivial(rhs, "Integer %= Extended")?;
        self.try_rem_word(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::test::PAIRS;

    #[test]
    fn layout_by_word() {
        // 2^64 = 3 * 6148914691236517205 + 1
        let mut layout = Layout::new(0, 1);
        assert_eq!(layout.div_rem_assign_word(3), Ok(1));
        assert_eq!(layout.words(), &[6_148_914_691_236_517_205, 0]);

        let mut layout = Layout::new(1, 1);
        assert_eq!(layout.div_rem_assign_word(0), Err(Error::DivisionByZero));
    }

    #[test]
    fn signed_pairs() {
        for &(a, b) in PAIRS.iter().filter(|&&(_, b)| b != 0) {
            let mut x = Integer::from(a);
            x.try_div(&Integer::from(b)).unwrap();
            assert_eq!(x, Integer::from(a / b), "{} / {}", a, b);

            let mut x = Integer::from(a);
            x.try_rem(&Integer::from(b)).unwrap();
            assert_eq!(x, Integer::from(a % b), "{} % {}", a, b);
        }
        for &(a, b) in PAIRS.iter().filter(|&&(a, _)| a != 0) {
            let mut x = Integer::from(b);
            x.try_div(&Integer::from(a)).unwrap();
            assert_eq!(x, Integer::from(b / a), "{} / {}", b, a);

            let mut x = Integer::from(b);
            x.try_rem(&Integer::from(a)).unwrap();
            assert_eq!(x, Integer::from(b % a), "{} % {}", b, a);
        }
    }

    #[test]
    fn remainder_keeps_dividend_sign() {
        let mut x = Integer::from(-7i64);
        x.try_rem(&Integer::from(10i64)).unwrap();
        assert_eq!(x, Integer::from(-7i64));

        let mut x = Integer::from(-7i64);
        x.try_rem_word(10).unwrap();
        assert_eq!(x, Integer::from(-7i64));

        let mut x = Integer::from(-1i64);
        x.try_rem(&Integer::from(-2i64)).unwrap();
        assert_eq!(x, Integer::from(-1i64));

        // exact division leaves a non-negative zero
        let mut x = Integer::from(-8i64);
        x.try_rem_word(4).unwrap();
        assert!(x.is_zero());
        assert!(!x.sign());
    }

    #[test]
    fn by_zero() {
        let mut x = Integer::from(7u64);
        assert_eq!(x.try_div(&Integer::zero()), Err(Error::DivisionByZero));
        assert_eq!(x.try_rem(&Integer::zero()), Err(Error::DivisionByZero));
        assert_eq!(x, 7u64);

        let mut x = Integer::from_words(false, &[1, 1]);
        assert_eq!(x.try_div_rem_word(0), Err(Error::DivisionByZero));
    }

    #[test]
    fn extended_dividend() {
        // (2^64 + 5) / 2 = 2^63 + 2, remainder 1
        let mut x = Integer::from_words(true, &[5, 1]);
        let mut y = x.clone();
        x.try_div(&Integer::from(2u64)).unwrap();
        assert!(x.is_trivial());
        assert!(x.sign());
        assert_eq!(x.value(), Some((1 << 63) + 2));

        y.try_rem(&Integer::from(-2i64)).unwrap();
        assert_eq!(y, Integer::from(-1i64));

        let mut x = Integer::from_words(false, &[0, 0, 6]);
        assert_eq!(x.try_div_rem_word(3), Ok(0));
        assert_eq!(x.words(), &[0, 0, 2]);
    }

    #[test]
    fn extended_divisor() {
        let mut x = Integer::from(7u64);
        assert!(x.try_div(&Integer::from_words(false, &[1, 1])).is_err());
        assert!(x.try_rem(&Integer::from_words(false, &[1, 1])).is_err());
    }
}
