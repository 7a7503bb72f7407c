use core::ops::Not;

use crate::{Integer, Layout};
use crate::integer::Magnitude;

impl Layout {
    /// Complements every word.
    pub fn not_assign(&mut self) {
        for word in self.words.iter_mut() {
            *word = !*word;
        }
    }
}

impl Integer {
    /// Complements the magnitude words, keeping the sign.
    pub fn not_assign(&mut self) {
        match self.magnitude {
            Magnitude::Trivial(value) => self.set_trivial(!value),
            Magnitude::Extended(ref mut layout) => layout.not_assign(),
        }
        self.normalize();
    }
}

impl Not for &Integer {
    type Output = Integer;

    fn not(self) -> Self::Output {
        let mut result = self.clone();
        result.not_assign();
        result
    }
}

impl Not for Integer {
    type Output = Integer;

    fn not(mut self) -> Self::Output {
        self.not_assign();
        self
    }
}
