use alloc::{vec, vec::Vec};

use crate::{Error, Integer, Natural, Result, Word, BITS};

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i32 = 1023;

/// Words of a finite, non-negative, integral `f64`.
fn float_words(value: f64) -> Result<Vec<Word>> {
    if !value.is_finite() {
        return Err(Error::Unimplemented("Integer ^ Natural beyond f64"));
    }
    if value < 18_446_744_073_709_551_616.0 {
        return Ok(vec![value as Word]);
    }

    let bits = value.to_bits();
    let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
    let mantissa = (bits & ((1 << MANTISSA_BITS) - 1)) | (1 << MANTISSA_BITS);
    // at least 2^64, so the mantissa is shifted left
    let shift = (biased - EXPONENT_BIAS - MANTISSA_BITS as i32) as u64;

    let mut words = vec![0; (shift / BITS) as usize];
    let wide = (mantissa as u128) << (shift % BITS);
    words.push(wide as Word);
    words.push((wide >> BITS) as Word);
    Ok(words)
}

impl Integer {
    /// self = self^exponent, for single-word base and exponent
    ///
    /// Computed in floating point and rounded, so only exact while the
    /// result is below $2^{53}$ or a power of two. Larger results are the
    /// exact value of the rounded `f64`, extended as needed; results beyond
    /// the `f64` range fail. Needs the `std` feature.
    pub fn try_pow(&mut self, exponent: &Natural) -> Result<()> {
        let base = self.value().ok_or(Error::Unimplemented("Extended ^ Natural"))?;
        let exponent = exponent.value().ok_or(Error::Unimplemented("Integer ^ Extended"))?;

        let words = float_words((base as f64).powf(exponent as f64).round())?;
        let sign = self.sign && exponent % 2 == 1;
        *self = Integer::from_words(sign, &words);
        Ok(())
    }

    pub fn pow(&self, exponent: &Natural) -> Integer {
        let mut power = self.clone();
        if let Err(error) = power.try_pow(exponent) {
            panic!("{}", error);
        }
        power
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const POWERS: [(i64, u64, i64); 13] = [
        (0, 0, 1),
        (0, 1, 0),
        (1, 0, 1),
        (1, 1, 1),
        (-1, 0, 1),
        (-1, 1, -1),
        (3, 3, 27),
        (-5, 4, 625),
        (-23, 3, -12167),
        (8, 2, 64),
        (2, 16, 65536),
        (16, 3, 4096),
        (14, 5, 537824),
    ];

    #[test]
    fn small() {
        for &(base, exponent, power) in POWERS.iter() {
            let result = Integer::from(base).pow(&Natural::from(exponent));
            assert_eq!(result, Integer::from(power), "{}^{}", base, exponent);
        }
    }

    #[test]
    fn powers_of_two_are_exact() {
        let mut x = Integer::from(2u64);
        x.try_pow(&Natural::from(63)).unwrap();
        assert_eq!(x, 1u64 << 63);
    }

    #[test]
    fn extended_results() {
        let mut x = Integer::from(2u64);
        x.try_pow(&Natural::from(64)).unwrap();
        assert_eq!(x.words(), &[0, 1]);
        assert!(!x.sign());

        let mut x = Integer::from(2u64);
        x.try_pow(&Natural::from(100)).unwrap();
        assert_eq!(x.words(), &[0, 1 << 36]);

        let mut x = Integer::from(-2i64);
        x.try_pow(&Natural::from(129)).unwrap();
        assert_eq!(x, Integer::from_words(true, &[0, 0, 2]));

        // inexact, but in the right ballpark: 2^99 < 10^30 < 2^100
        let mut x = Integer::from(10u64);
        x.try_pow(&Natural::from(30)).unwrap();
        assert_eq!(x.len(), 2);
        assert_eq!(x.words()[1] >> 35, 1);

        let mut x = Integer::from(2u64);
        assert!(x.try_pow(&Natural::from(1024)).is_err());
    }

    #[test]
    fn extended_operands() {
        let mut x = Integer::from_words(false, &[1, 1]);
        assert!(x.try_pow(&Natural::from(2)).is_err());

        let exponent = Natural::from_str_radix("18446744073709551616", crate::Radix::Decimal).unwrap();
        let mut x = Integer::from(1u64);
        assert!(x.try_pow(&exponent).is_err());
    }
}
