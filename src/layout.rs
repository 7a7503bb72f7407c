//! Heap storage of magnitudes that do not fit in a single word.

use alloc::vec::Vec;
use core::fmt;

use zeroize::Zeroize;

use crate::{hash, Error, Result, Word, Words};

/// Magnitude as a growable sequence of words, least significant first.
///
/// Always holds at least one word. Cloning is a deep copy, a `Layout` is
/// owned by at most one [`Integer`][crate::Integer].
///
/// Equality is word-by-word: layouts of different length are unequal, even
/// if the excess words are zero. The arithmetic in this crate keeps layouts
/// free of leading zero words, which makes this mathematical equality.
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    pub(crate) words: Vec<Word>,
}

impl Layout {
    /// Two-word layout, as created on promotion.
    pub fn new(low: Word, high: Word) -> Self {
        Self { words: alloc::vec![low, high] }
    }

    /// Fails on an empty slice.
    pub fn from_words(words: &Words) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::OutOfBounds { index: 0, len: 0 });
        }
        Ok(Self { words: words.to_vec() })
    }

    pub fn words(&self) -> &Words {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn leading_word(&self) -> Word {
        // non-empty by construction
        self.words[self.words.len() - 1]
    }

    /// Word at `index`, fails for `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<Word> {
        self.words.get(index)
            .copied()
            .ok_or(Error::OutOfBounds { index, len: self.words.len() })
    }

    /// True if all words above the first are zero, and the first equals `word`.
    pub fn eq_word(&self, word: Word) -> bool {
        self.words[0] == word && self.words[1..].iter().all(|&w| w == 0)
    }

    pub fn is_zero(&self) -> bool {
        self.eq_word(0)
    }

    /// Order-sensitive hash of the words.
    pub fn hash_code(&self) -> u64 {
        self.words[1..].iter()
            .fold(hash::value(self.words[0]), |h, &w| hash::combine(h, hash::value(w)))
    }

    /// Drops leading zero words, keeping at least one.
    pub(crate) fn trim(&mut self) {
        while self.words.len() > 1 && self.leading_word() == 0 {
            self.words.pop();
        }
    }

    /// Big-endian bytes of the words, without dropping leading zeros.
    #[cfg(feature = "hex-debug")]
    pub(crate) fn to_be_bytes(&self) -> Vec<u8> {
        self.words.iter().rev()
            .flat_map(|w| w.to_be_bytes().to_vec())
            .collect()
    }
}

/// Wipes the words, leaving a single zero word.
impl Zeroize for Layout {
    fn zeroize(&mut self) {
        self.words.zeroize();
        self.words.push(0);
    }
}

/// Layouts of different length are unequal.
#[cfg(feature = "ct-maybe")]
impl subtle::ConstantTimeEq for Layout {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        use subtle::ConstantTimeEq;
        self.words.as_slice().ct_eq(other.words.as_slice())
    }
}

impl fmt::Debug for Layout {
    #[cfg(feature = "hex-debug")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_be_bytes();
        write!(f, "Layout({})", delog::hex_str!(bytes.as_slice(), 8))
    }

    #[cfg(not(feature = "hex-debug"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Layout").field(&self.words).finish()
    }
}
