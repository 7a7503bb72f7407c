use crate::{add_with_carry, Integer, Layout, Result, Word};
use crate::integer::Magnitude;

use super::trivial;

impl Layout {
    /// Ripple-carry addition of a word, growing by one word on final carry.
    pub fn add_assign_word(&mut self, rhs: Word) {
        let mut carry = rhs;
        for word in self.words.iter_mut() {
            let (sum, c) = add_with_carry(*word, carry);
            *word = sum;
            carry = c;
            if carry == 0 {
                break;
            }
        }

        if carry != 0 {
            self.words.push(carry);
        }
    }
}

impl Integer {
    /// |self| += rhs, promoting on carry.
    pub(crate) fn add_magnitude(&mut self, rhs: Word) {
        match self.magnitude {
            Magnitude::Trivial(value) => {
                let (sum, carry) = add_with_carry(value, rhs);
                if carry != 0 {
                    self.promote(sum, carry);
                } else {
                    self.set_trivial(sum);
                }
            }
            Magnitude::Extended(ref mut layout) => layout.add_assign_word(rhs),
        }
    }

    /// self += rhs
    ///
    /// Fails for negative extended values.
    pub fn try_add_word(&mut self, rhs: Word) -> Result<()> {
        if self.sign {
            self.sub_magnitude(rhs)?;
        } else {
            self.add_magnitude(rhs);
        }
        self.normalize();
        Ok(())
    }

    /// self += rhs
    ///
    /// Fails for extended `rhs`.
    pub fn try_add(&mut self, rhs: &Integer) -> Result<()> {
        let value = trivial(rhs, "Integer += Extended")?;
        if rhs.sign {
            self.try_sub_word(value)
        } else {
            self.try_add_word(value)
        }
    }

    /// self += 1
    pub fn try_inc(&mut self) -> Result<()> {
        self.try_add_word(1)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::test::PAIRS;
    use crate::Error;

    #[test]
    fn layout_ripple() {
        let mut layout = Layout::new(Word::MAX, 7);
        layout.add_assign_word(1);
        assert_eq!(layout.words(), &[0, 8]);

        let mut layout = Layout::new(Word::MAX, Word::MAX);
        layout.add_assign_word(2);
        assert_eq!(layout.words(), &[1, 0, 1]);

        let mut layout = Layout::new(3, 1);
        layout.add_assign_word(0);
        assert_eq!(layout.words(), &[3, 1]);
    }

    #[test]
    fn signed_pairs() {
        for &(a, b) in PAIRS.iter() {
            let mut x = Integer::from(a);
            x.try_add(&Integer::from(b)).unwrap();
            assert_eq!(x, Integer::from(a + b), "{} + {}", a, b);

            let mut x = Integer::from(b);
            x.try_add(&Integer::from(a)).unwrap();
            assert_eq!(x, Integer::from(a + b), "{} + {}", b, a);
        }
    }

    #[test]
    fn promotion() {
        let mut x = Integer::from(Word::MAX);
        x.try_add_word(1).unwrap();
        assert!(!x.is_trivial());
        assert_eq!(x.words(), &[0, 1]);

        let mut x = Integer::from(Word::MAX);
        x.try_add(&Integer::from(Word::MAX)).unwrap();
        assert_eq!(x.words(), &[Word::MAX - 1, 1]);

        // same sign, negative
        let mut x = -Integer::from(Word::MAX);
        x.try_add(&-Integer::from(2u64)).unwrap();
        assert!(x.sign());
        assert_eq!(x.words(), &[1, 1]);
    }

    #[test]
    fn sign_flip() {
        let mut x = Integer::from(-3i64);
        x.try_add_word(5).unwrap();
        assert_eq!(x, Integer::from(2u64));

        let mut x = Integer::from(-5i64);
        x.try_add_word(5).unwrap();
        assert!(x.is_zero());
        assert!(!x.sign());
    }

    #[test]
    fn extended() {
        let mut x = Integer::from_words(false, &[Word::MAX, Word::MAX]);
        x.try_add_word(1).unwrap();
        assert_eq!(x.words(), &[0, 0, 1]);

        let mut x = Integer::from_words(true, &[1, 1]);
        assert!(matches!(x.try_add_word(1), Err(Error::Unimplemented(_))));

        let mut x = Integer::from(1u64);
        assert!(matches!(
            x.try_add(&Integer::from_words(false, &[1, 1])),
            Err(Error::Unimplemented(_)),
        ));
    }

    #[test]
    fn inc() {
        let mut x = Integer::from(-1i64);
        x.try_inc().unwrap();
        assert!(x.is_zero());
        x.try_inc().unwrap();
        assert_eq!(x, 1u64);
    }
}
