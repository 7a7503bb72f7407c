use crate::{Error, Integer, Layout, Result, Word};
use crate::integer::Magnitude;

use super::trivial;

impl Layout {
    /// Multi-word subtraction with borrow is not available yet, only
    /// subtracting zero succeeds.
    pub fn sub_assign_word(&mut self, rhs: Word) -> Result<()> {
        if rhs == 0 {
            return Ok(());
        }
        Err(Error::Unimplemented("Layout -= Word"))
    }
}

impl Integer {
    /// |self| -= rhs, flipping the sign if rhs is the larger.
    pub(crate) fn sub_magnitude(&mut self, rhs: Word) -> Result<()> {
        match self.magnitude {
            Magnitude::Trivial(value) if value >= rhs => self.set_trivial(value - rhs),
            Magnitude::Trivial(value) => {
                self.set_trivial(rhs - value);
                self.sign = !self.sign;
            }
            Magnitude::Extended(ref mut layout) => layout.sub_assign_word(rhs)?,
        }
        Ok(())
    }

    /// self -= rhs
    ///
    /// Fails for positive extended values.
    pub fn try_sub_word(&mut self, rhs: Word) -> Result<()> {
        if self.sign {
            self.add_magnitude(rhs);
        } else {
            self.sub_magnitude(rhs)?;
        }
        self.normalize();
        Ok(())
    }

    /// self -= rhs
    ///
    /// Fails for extended `rhs`.
    pub fn try_sub(&mut self, rhs: &Integer) -> Result<()> {
        let value = trivial(rhs, "Integer -= Extended")?;
        if rhs.sign {
            self.try_add_word(value)
        } else {
            self.try_sub_word(value)
        }
    }

    /// self -= 1
    pub fn try_dec(&mut self) -> Result<()> {
        self.try_sub_word(1)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::test::PAIRS;

    #[test]
    fn signed_pairs() {
        for &(a, b) in PAIRS.iter() {
            let mut x = Integer::from(a);
            x.try_sub(&Integer::from(b)).unwrap();
            assert_eq!(x, Integer::from(a - b), "{} - {}", a, b);

            let mut x = Integer::from(b);
            x.try_sub(&Integer::from(a)).unwrap();
            assert_eq!(x, Integer::from(b - a), "{} - {}", b, a);
        }
    }

    #[test]
    fn negative_minus_word_grows() {
        let mut x = -Integer::from(Word::MAX);
        x.try_sub_word(1).unwrap();
        assert!(x.sign());
        assert_eq!(x.words(), &[0, 1]);

        let mut x = Integer::from_words(true, &[Word::MAX, 1]);
        x.try_sub_word(1).unwrap();
        assert!(x.sign());
        assert_eq!(x.words(), &[0, 2]);
    }

    #[test]
    fn crossing_zero() {
        let mut x = Integer::from(3u64);
        x.try_sub_word(5).unwrap();
        assert_eq!(x, Integer::from(-2i64));

        let mut x = Integer::from(5u64);
        x.try_sub_word(5).unwrap();
        assert!(x.is_zero());
        assert!(!x.sign());
    }

    #[test]
    fn unimplemented() {
        let mut layout = Layout::new(0, 1);
        assert_eq!(layout.sub_assign_word(1), Err(Error::Unimplemented("Layout -= Word")));

        let mut x = Integer::from_words(false, &[0, 1]);
        assert!(x.try_sub_word(1).is_err());

        let mut x = Integer::from(1u64);
        assert!(x.try_sub(&Integer::from_words(true, &[0, 1])).is_err());
    }

    #[test]
    fn dec() {
        let mut x = Integer::from(1u64);
        x.try_dec().unwrap();
        assert!(x.is_zero());
        x.try_dec().unwrap();
        assert_eq!(x, Integer::from(-1i64));
    }
}
