use alloc::{boxed::Box, vec::Vec};
use core::slice;

use rand_core::RngCore;

use crate::{hash, Layout, Word, Words};

mod format;
mod parse;
mod trait_implementations;

/// Magnitude of an [`Integer`]: a single inline word, or an owned [`Layout`].
///
/// Extended layouts have at least two words and a non-zero leading word.
#[derive(Clone)]
pub(crate) enum Magnitude {
    Trivial(Word),
    Extended(Box<Layout>),
}

/// Signed integer of arbitrary size.
///
/// Values fitting in one word are stored inline ("trivial"), larger values
/// are promoted to an owned heap [`Layout`] ("extended"), and demoted back
/// when a right shift leaves a single word.
///
/// The representation is canonical:
/// - zero is never negative
/// - extended layouts have no leading zero words, and more than one word
///
/// Cloning deep-copies the layout.
#[derive(Clone)]
pub struct Integer {
    pub(crate) sign: bool,
    pub(crate) magnitude: Magnitude,
}

impl Integer {
    pub fn zero() -> Self {
        Self { sign: false, magnitude: Magnitude::Trivial(0) }
    }

    /// Value from magnitude words, least significant first.
    ///
    /// Leading zero words are dropped, an empty slice is zero.
    pub fn from_words(sign: bool, words: &Words) -> Self {
        let mut integer = match words.len() {
            0 => Self::zero(),
            1 => Self { sign, magnitude: Magnitude::Trivial(words[0]) },
            _ => Self {
                sign,
                magnitude: Magnitude::Extended(Box::new(Layout { words: words.to_vec() })),
            },
        };
        integer.normalize();
        integer
    }

    /// Value from big-endian magnitude bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let words: Vec<Word> = bytes.rchunks(8)
            .map(|chunk| {
                let mut word = [0u8; 8];
                word[8 - chunk.len()..].copy_from_slice(chunk);
                Word::from_be_bytes(word)
            })
            .collect();
        Self::from_words(false, &words)
    }

    /// Uniformly random non-negative value below $2^{64 \cdot \text{words}}$.
    pub fn random(mut rng: impl RngCore, words: usize) -> Self {
        let words: Vec<Word> = (0..words).map(|_| rng.next_u64()).collect();
        Self::from_words(false, &words)
    }

    /// True if negative.
    pub fn sign(&self) -> bool {
        self.sign
    }

    pub fn is_negative(&self) -> bool {
        self.sign
    }

    pub fn is_trivial(&self) -> bool {
        matches!(self.magnitude, Magnitude::Trivial(_))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self.magnitude, Magnitude::Trivial(0))
    }

    /// The inline magnitude, if trivial.
    pub fn value(&self) -> Option<Word> {
        match self.magnitude {
            Magnitude::Trivial(value) => Some(value),
            Magnitude::Extended(_) => None,
        }
    }

    /// The layout, if extended.
    pub fn layout(&self) -> Option<&Layout> {
        match &self.magnitude {
            Magnitude::Trivial(_) => None,
            Magnitude::Extended(layout) => Some(&**layout),
        }
    }

    /// Magnitude words, least significant first.
    pub fn words(&self) -> &Words {
        match &self.magnitude {
            Magnitude::Trivial(value) => slice::from_ref(value),
            Magnitude::Extended(layout) => layout.words(),
        }
    }

    /// Number of magnitude words.
    pub fn len(&self) -> usize {
        self.words().len()
    }

    /// Magnitude word at `index`.
    pub fn word(&self, index: usize) -> crate::Result<Word> {
        match &self.magnitude {
            Magnitude::Trivial(value) if index == 0 => Ok(*value),
            Magnitude::Trivial(_) => Err(crate::Error::OutOfBounds { index, len: 1 }),
            Magnitude::Extended(layout) => layout.at(index),
        }
    }

    /// Big-endian bytes of the magnitude, without leading zero bytes (but at least one byte).
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let bytes: Vec<u8> = self.words().iter().rev()
            .flat_map(|w| w.to_be_bytes().to_vec())
            .collect();
        let leading = bytes.iter()
            .take_while(|&&b| b == 0)
            .count()
            .min(bytes.len() - 1);
        bytes[leading..].to_vec()
    }

    /// Structural hash, identical for equal values.
    pub fn hash_code(&self) -> u64 {
        // 10'000th prime at 2, sign at 1, defined at 0
        let seed = (104_729u64 << 2) | ((self.sign as u64) << 1) | 1;

        let words = match &self.magnitude {
            Magnitude::Trivial(value) => hash::value(*value),
            Magnitude::Extended(layout) => layout.hash_code(),
        };
        hash::combine(seed, words)
    }

    pub(crate) fn set_trivial(&mut self, value: Word) {
        self.magnitude = Magnitude::Trivial(value);
    }

    pub(crate) fn promote(&mut self, low: Word, high: Word) {
        self.magnitude = Magnitude::Extended(Box::new(Layout::new(low, high)));
    }

    /// Restores the canonical representation: trims and demotes layouts,
    /// and makes zero non-negative.
    pub(crate) fn normalize(&mut self) {
        if let Magnitude::Extended(layout) = &mut self.magnitude {
            layout.trim();
            if layout.len() == 1 {
                let value = layout.words[0];
                self.magnitude = Magnitude::Trivial(value);
            }
        }
        if self.is_zero() {
            self.sign = false;
        }
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::zero()
    }
}
