use alloc::{string::String, vec::Vec};

use crate::{Integer, Literal, Radix, Result};
use crate::integer::Magnitude;
use crate::radix::{value_to_digit, Alphabet};

impl Integer {
    /// Digits of the magnitude, most significant first, without sign or prefix.
    pub(crate) fn magnitude_digits(&self, radix: Radix, alphabet: Alphabet) -> Result<String> {
        let radix = radix.value();
        let mut digits = Vec::new();

        match &self.magnitude {
            Magnitude::Trivial(value) => {
                let mut value = *value;
                loop {
                    digits.push(value_to_digit(value % radix, alphabet));
                    value /= radix;
                    if value == 0 {
                        break;
                    }
                }
            }
            Magnitude::Extended(layout) => {
                let mut scratch = (**layout).clone();
                loop {
                    let digit = scratch.div_rem_assign_word(radix)?;
                    digits.push(value_to_digit(digit, alphabet));
                    if scratch.is_zero() {
                        break;
                    }
                }
            }
        }

        Ok(digits.iter().rev().collect())
    }

    /// Renders in the radix, with the prefix and alphabet of the literal style.
    ///
    /// Only decimal numbers carry a `-` sign, other radices show the magnitude.
    pub fn to_string_radix(&self, radix: Radix, literal: Literal) -> Result<String> {
        let prefix = literal.prefix(radix)?;
        let digits = self.magnitude_digits(radix, literal.alphabet())?;

        let mut result = String::with_capacity(1 + prefix.len() + digits.len());
        if self.sign && radix == Radix::Decimal {
            result.push('-');
        }
        result.push_str(prefix);
        result.push_str(&digits);
        Ok(result)
    }
}
