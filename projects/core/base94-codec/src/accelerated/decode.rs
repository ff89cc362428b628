use super::limbs::{
    limbs_for_digits, limbs_to_bytes, multiply_add, pow_base, CHUNK_BASE, CHUNK_DIGITS,
};
use crate::alphabet::{symbols_to_digits, BASE};
use crate::error::Base94Error;
use crate::length::max_decoded_len;
use alloc::vec;
use alloc::vec::Vec;

/// Decodes the base94 symbols in `input`, writing the bytes to the start of `output`.
///
/// Returns the number of bytes written. The output and errors are identical to
/// [`crate::reference::decode`]; every symbol is checked before anything is written.
///
/// # Errors
///
/// [`Base94Error::InvalidSymbol`] for the first byte of `input` outside the alphabet.
///
/// # Panics
///
/// If `output` is shorter than [`max_decoded_len`]`(input)`.
pub fn decode(input: &[u8], output: &mut [u8]) -> Result<usize, Base94Error> {
    assert!(output.len() >= max_decoded_len(input));

    let mut digits = vec![0u8; input.len()];
    symbols_to_digits(input, &mut digits)?;

    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    output[..zeros].fill(0);

    let limbs = digits_to_limbs(&digits[zeros..]);
    Ok(zeros + limbs_to_bytes(&limbs, &mut output[zeros..]))
}

/// Converts big endian base94 digits to a little endian limb array.
fn digits_to_limbs(digits: &[u8]) -> Vec<u32> {
    let mut limbs: Vec<u32> = Vec::with_capacity(limbs_for_digits(digits.len()));

    // Leading partial chunk first so every following chunk is a full 4 digits.
    let head = digits.len() % CHUNK_DIGITS;
    if head != 0 {
        multiply_add(&mut limbs, pow_base(head), chunk_value(&digits[..head]));
    }

    for chunk in digits[head..].chunks_exact(CHUNK_DIGITS) {
        multiply_add(&mut limbs, CHUNK_BASE, chunk_value(chunk));
    }
    limbs
}

/// Value of up to [`CHUNK_DIGITS`] big endian base94 digits.
#[inline(always)]
fn chunk_value(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, &d| acc * BASE as u32 + d as u32)
}
