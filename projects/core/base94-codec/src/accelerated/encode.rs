use super::limbs::{bytes_to_limbs, divide_by_chunk_base, CHUNK_DIGITS};
use crate::alphabet::{digits_to_symbols, BASE};
use crate::length::{leading_zero_bytes, max_encoded_len};

/// Encodes `input` to base94 symbols, writing them to the start of `output`.
///
/// Returns the number of symbols written. The output is identical to
/// [`crate::reference::encode`].
///
/// # Panics
///
/// If `output` is shorter than [`max_encoded_len`]`(input.len())`.
pub fn encode(input: &[u8], output: &mut [u8]) -> usize {
    assert!(output.len() >= max_encoded_len(input.len()));

    let zeros = leading_zero_bytes(input);
    output[..zeros].fill(0);

    let mut limbs = bytes_to_limbs(&input[zeros..]);
    let digits = &mut output[zeros..];
    let mut num_digits = 0;
    let mut start = 0;
    while start < limbs.len() {
        let mut chunk = divide_by_chunk_base(&mut limbs[start..]);
        while start < limbs.len() && limbs[start] == 0 {
            start += 1;
        }

        if start < limbs.len() {
            // Inner chunk, every digit is significant.
            for _ in 0..CHUNK_DIGITS {
                digits[num_digits] = (chunk % BASE as u32) as u8;
                chunk /= BASE as u32;
                num_digits += 1;
            }
        } else {
            // Most significant chunk, never zero here.
            while chunk != 0 {
                digits[num_digits] = (chunk % BASE as u32) as u8;
                chunk /= BASE as u32;
                num_digits += 1;
            }
        }
    }

    digits[..num_digits].reverse();

    let written = zeros + num_digits;
    digits_to_symbols(&mut output[..written]);
    written
}
