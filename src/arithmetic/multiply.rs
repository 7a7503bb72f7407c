use crate::{mul_with_carry, Integer, Layout, Result, Word};
use crate::digit::mul_add_with_carry;
use crate::integer::Magnitude;

use super::trivial;

impl Layout {
    /// Schoolbook multiplication by a word, growing by one word on final carry.
    ///
    /// Each step computes $w_i \cdot r + c$ in a double word, which cannot overflow.
    pub fn mul_assign_word(&mut self, rhs: Word) {
        let mut carry = 0;
        for word in self.words.iter_mut() {
            let (low, high) = mul_add_with_carry(*word, rhs, carry);
            *word = low;
            carry = high;
        }

        if carry != 0 {
            self.words.push(carry);
        }
    }
}

impl Integer {
    /// |self| *= rhs, promoting on overflow. The sign is kept.
    pub fn mul_word(&mut self, rhs: Word) {
        match self.magnitude {
            Magnitude::Trivial(0) => return,
            Magnitude::Trivial(1) => self.set_trivial(rhs),
            _ if rhs == 0 => self.set_trivial(0),
            _ if rhs == 1 => return,
            Magnitude::Trivial(value) => {
                let (low, high) = mul_with_carry(value, rhs);
                if high != 0 {
                    self.promote(low, high);
                } else {
                    self.set_trivial(low);
                }
            }
            Magnitude::Extended(ref mut layout) => layout.mul_assign_word(rhs),
        }
        self.normalize();
    }

    /// self *= rhs
    ///
    /// Fails for extended `rhs`.
    pub fn try_mul(&mut self, rhs: &Integer) -> Result<()> {
        let value = trivial(rhs, "Integer *= Extended")?;
        let sign = self.sign != rhs.sign;
        self.mul_word(value);
        self.sign = sign;
        self.normalize();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::test::PAIRS;

    /// (a, b, a * b) with products spanning two words
    const MUL_TRIPLES: [(Word, Word, [Word; 2]); 4] = [
        (0x7bf2_04ee_7bf2_04ed, 0x1_0000_0001, [0xf7e4_09db_7bf2_04ed, 0x7bf2_04ee]),
        (Word::MAX, Word::MAX, [1, Word::MAX - 1]),
        (Word::MAX, 2, [Word::MAX - 1, 1]),
        (1 << 63, 4, [0, 2]),
    ];

    #[test]
    fn layout_schoolbook() {
        let mut layout = Layout::new(Word::MAX, 1);
        layout.mul_assign_word(2);
        assert_eq!(layout.words(), &[Word::MAX - 1, 3]);

        let mut layout = Layout::new(Word::MAX, Word::MAX);
        layout.mul_assign_word(Word::MAX);
        // (2^128 - 1)(2^64 - 1) = 2^192 - 2^128 - 2^64 + 1
        assert_eq!(layout.words(), &[1, Word::MAX, Word::MAX - 1]);

        let mut layout = Layout::new(5, 1);
        layout.mul_assign_word(0);
        assert_eq!(layout.words(), &[0, 0]);
    }

    #[test]
    fn promotion() {
        for &(a, b, product) in MUL_TRIPLES.iter() {
            let mut x = Integer::from(a);
            x.mul_word(b);
            assert_eq!(x.words(), &product);

            let mut x = Integer::from(b);
            x.mul_word(a);
            assert_eq!(x.words(), &product);
        }
    }

    #[test]
    fn shortcuts() {
        let mut x = Integer::zero();
        x.mul_word(1234);
        assert!(x.is_zero());

        let mut x = Integer::from(1u64);
        x.mul_word(1234);
        assert_eq!(x, 1234u64);

        let mut x = Integer::from_words(true, &[1, 2]);
        x.mul_word(0);
        assert!(x.is_zero());
        assert!(x.is_trivial());
        assert!(!x.sign());

        let mut x = Integer::from_words(true, &[1, 2]);
        x.mul_word(1);
        assert_eq!(x, Integer::from_words(true, &[1, 2]));
    }

    #[test]
    fn signed_pairs() {
        for &(a, b) in PAIRS.iter() {
            let mut x = Integer::from(a);
            x.try_mul(&Integer::from(b)).unwrap();
            assert_eq!(x, Integer::from(a * b), "{} * {}", a, b);

            let mut x = Integer::from(b);
            x.try_mul(&Integer::from(a)).unwrap();
            assert_eq!(x, Integer::from(a * b), "{} * {}", b, a);
        }
    }

    #[test]
    fn extended() {
        let mut x = Integer::from_words(true, &[1, 2]);
        x.try_mul(&Integer::from(-3i64)).unwrap();
        assert!(!x.sign());
        assert_eq!(x.words(), &[3, 6]);

        let mut x = Integer::from(2u64);
        assert!(x.try_mul(&Integer::from_words(false, &[1, 2])).is_err());
    }
}
