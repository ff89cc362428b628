//! The fixed base94 alphabet and its inverse lookup table.
//!
//! The alphabet is every printable, non-whitespace ASCII character, `'!'` (`0x21`) through
//! `'~'` (`0x7E`), in ascending order. A symbol's digit value is its offset from `'!'`.
//!
//! ```ignore
//! Digit  | 0   | 1   | ... | 92  | 93
//! -------|-----|-----|-----|-----|-----
//! Symbol | '!' | '"' | ... | '}' | '~'
//! ```
//!
//! Any change to this ordering changes every encoding produced by this crate, which is why it
//! is tracked by [`ALPHABET_VERSION`].

use crate::error::Base94Error;
use likely_stable::unlikely;

/// Number of symbols in the alphabet, i.e. the radix of the encoding.
pub const BASE: usize = 94;

/// Version of the alphabet ordering and leading-zero convention.
///
/// Bumped whenever a change would make existing encodings decode differently.
pub const ALPHABET_VERSION: u32 = 1;

/// The symbol for digit 0. Every leading `0x00` input byte is written as one of these.
pub const ZERO_SYMBOL: u8 = b'!';

/// All 94 symbols, indexed by digit value.
pub const ALPHABET: &[u8; BASE] = &build_alphabet();

/// Marker in [`DECODE_TABLE`] for bytes outside the alphabet.
const INVALID: u8 = 0xFF;

/// Maps every possible byte to its digit value, or [`INVALID`].
static DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_alphabet() -> [u8; BASE] {
    let mut table = [0u8; BASE];
    let mut x = 0;
    while x < BASE {
        table[x] = ZERO_SYMBOL + x as u8;
        x += 1;
    }
    table
}

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut x = 0;
    while x < BASE {
        table[ALPHABET[x] as usize] = x as u8;
        x += 1;
    }
    table
}

/// Returns the symbol for a digit value.
///
/// # Panics
///
/// If `digit` is not below [`BASE`].
#[inline(always)]
pub fn symbol_for(digit: u8) -> u8 {
    ALPHABET[digit as usize]
}

/// Returns the digit value of `symbol`, or [`None`] if it is not part of the alphabet.
#[inline(always)]
pub fn digit_for(symbol: u8) -> Option<u8> {
    let digit = DECODE_TABLE[symbol as usize];
    if digit == INVALID {
        None
    } else {
        Some(digit)
    }
}

/// Returns `true` if `symbol` is part of the alphabet.
#[inline(always)]
pub fn is_symbol(symbol: u8) -> bool {
    DECODE_TABLE[symbol as usize] != INVALID
}

/// Checks that every byte of `symbols` is part of the alphabet.
///
/// # Errors
///
/// [`Base94Error::InvalidSymbol`] for the first byte outside the alphabet.
pub fn validate(symbols: &[u8]) -> Result<(), Base94Error> {
    for (position, &byte) in symbols.iter().enumerate() {
        if unlikely(!is_symbol(byte)) {
            return Err(Base94Error::InvalidSymbol { byte, position });
        }
    }
    Ok(())
}

/// Converts `symbols` to their digit values, writing them to `digits`.
///
/// `digits` must be exactly as long as `symbols`.
///
/// # Errors
///
/// [`Base94Error::InvalidSymbol`] for the first byte outside the alphabet.
#[inline]
pub(crate) fn symbols_to_digits(symbols: &[u8], digits: &mut [u8]) -> Result<(), Base94Error> {
    debug_assert_eq!(symbols.len(), digits.len());
    for (position, (&byte, digit)) in symbols.iter().zip(digits.iter_mut()).enumerate() {
        let value = DECODE_TABLE[byte as usize];
        if unlikely(value == INVALID) {
            return Err(Base94Error::InvalidSymbol { byte, position });
        }
        *digit = value;
    }
    Ok(())
}

/// Replaces every digit value in `buf` with its symbol.
#[inline]
pub(crate) fn digits_to_symbols(buf: &mut [u8]) {
    for digit in buf {
        *digit = symbol_for(*digit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn alphabet_is_printable_ascii_without_space() {
        assert_eq!(ALPHABET.len(), 94);
        assert_eq!(ALPHABET[0], b'!');
        assert_eq!(ALPHABET[93], b'~');
        assert!(ALPHABET.windows(2).all(|w| w[0] < w[1]));
        assert!(ALPHABET.iter().all(|c| c.is_ascii_graphic()));
    }

    #[test]
    fn every_digit_round_trips_through_its_symbol() {
        for digit in 0..BASE as u8 {
            assert_eq!(digit_for(symbol_for(digit)), Some(digit));
        }
    }

    #[test]
    fn decode_table_accepts_exactly_the_alphabet() {
        let accepted = (0..=u8::MAX).filter(|&b| is_symbol(b)).count();
        assert_eq!(accepted, BASE);
    }

    #[rstest]
    #[case(b' ')]
    #[case(b'\n')]
    #[case(b'\t')]
    #[case(0x00)]
    #[case(0x7F)]
    #[case(0x80)]
    #[case(0xFF)]
    fn rejects_bytes_outside_alphabet(#[case] byte: u8) {
        assert_eq!(digit_for(byte), None);
        assert_eq!(
            validate(&[b'a', b'b', byte, b'c']),
            Err(Base94Error::InvalidSymbol { byte, position: 2 })
        );
    }

    #[test]
    fn validate_reports_first_invalid_byte() {
        assert_eq!(
            validate(b"ok\x7F \x80"),
            Err(Base94Error::InvalidSymbol {
                byte: 0x7F,
                position: 2
            })
        );
        assert_eq!(validate(b""), Ok(()));
        assert_eq!(validate(ALPHABET), Ok(()));
    }
}
