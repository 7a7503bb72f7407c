/// A word on the machine. [`Layout`][crate::Layout] is composed of many words.
///
/// Unlike digits of a positional numeral, a word is always 64 bits,
/// independent of the target's pointer width.
pub type Word = u64;

/// Multiple [`Word`]s, least significant first.
pub type Words = [Word];

/// Unsigned type with twice as many bits as [`Word`].
pub(crate) type DoubleWord = u128;

/// Number of bits in a [`Word`].
pub const BITS: u64 = Word::BITS as u64;

/// `a + b`, as (wrapped sum, carry), where carry is 0 or 1.
#[inline]
pub fn add_with_carry(a: Word, b: Word) -> (Word, Word) {
    let (sum, overflow) = a.overflowing_add(b);
    (sum, overflow as Word)
}

/// Full product `a * b`, as (low word, high word).
///
/// The high word is the carry-out of the word product. Never overflows,
/// as $(2^{64} - 1)^2 < 2^{128}$.
#[inline]
pub fn mul_with_carry(a: Word, b: Word) -> (Word, Word) {
    let product = (a as DoubleWord) * (b as DoubleWord);
    (product as Word, (product >> BITS) as Word)
}

/// `a * b + c`, as (low word, high word).
///
/// Never overflows: $(2^{64} - 1)^2 + 2^{64} - 1 < 2^{128}$.
#[inline]
pub(crate) fn mul_add_with_carry(a: Word, b: Word, c: Word) -> (Word, Word) {
    let acc = (a as DoubleWord) * (b as DoubleWord) + (c as DoubleWord);
    (acc as Word, (acc >> BITS) as Word)
}

/// Divide a two word numerator by a one word divisor, returns quotient and remainder.
///
/// The caller must ensure `hi < divisor`, so the quotient fits in one word.
#[inline]
pub(crate) fn div_words(hi: Word, lo: Word, divisor: Word) -> (Word, Word) {
    debug_assert!(hi < divisor);

    let x = ((hi as DoubleWord) << BITS) | lo as DoubleWord;
    let divisor = divisor as DoubleWord;

    ((x / divisor) as Word, (x % divisor) as Word)
}
