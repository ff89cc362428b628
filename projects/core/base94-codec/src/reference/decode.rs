use crate::alphabet::symbols_to_digits;
use crate::error::Base94Error;
use crate::length::max_decoded_len;
use alloc::vec;

/// Decodes the base94 symbols in `input`, writing the bytes to the start of `output`.
///
/// Returns the number of bytes written. Every symbol is checked before anything is written.
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

    let mut number = vec![0u8; input.len()];
    symbols_to_digits(input, &mut number)?;

    // Zero digits here are exactly the leading zero symbols.
    let zeros = number.iter().take_while(|&&d| d == 0).count();
    output[..zeros].fill(0);

    let bytes = &mut output[zeros..];
    let mut num_bytes = 0;
    let mut start = zeros;
    while start < number.len() {
        bytes[num_bytes] = divide_by_256(&mut number[start..]);
        num_bytes += 1;

        while start < number.len() && number[start] == 0 {
            start += 1;
        }
    }

    // Remainders come out least significant first.
    bytes[..num_bytes].reverse();
    Ok(zeros + num_bytes)
}

/// Divides the big endian base 94 number in `digits` by 256 in place.
/// Returns the remainder.
#[inline(always)]
fn divide_by_256(digits: &mut [u8]) -> u8 {
    let mut remainder = 0u32;
    for digit in digits {
        let acc = remainder * crate::alphabet::BASE as u32 + *digit as u32;
        *digit = (acc >> 8) as u8;
        remainder = acc & 0xFF;
    }
    remainder as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(b"", &[])]
    #[case(b"!", &[0x00])]
    #[case(b"\"", &[0x01])]
    #[case(b"!\"", &[0x00, 0x01])]
    #[case(b"#d", &[0xFF])]
    #[case(b"#e", &[0x01, 0x00])]
    #[case(b"KCW3D>", b"Hello")]
    #[case(b"/P|?l:+>N>\\ftB[Z", b"Hello, World!")]
    #[case(b"!!(H2", &[0x00, 0x00, 0xFF, 0xFF])]
    #[case(b"A33?&-jqQh", &[0xFF; 8])]
    #[case(b"!!!", &[0x00; 3])]
    fn decodes_known_vectors(#[case] input: &[u8], #[case] expected: &[u8]) {
        assert_eq!(decode_to_vec(decode, input).unwrap(), expected);
    }

    #[rstest]
    #[case(b" ", 0x20, 0)]
    #[case(b"KCW3D> ", 0x20, 6)]
    #[case(b"KC\x7FW3D>", 0x7F, 2)]
    #[case(b"!!\xC3\xA9", 0xC3, 2)]
    fn rejects_invalid_symbols(#[case] input: &[u8], #[case] byte: u8, #[case] position: usize) {
        assert_eq!(
            decode_to_vec(decode, input),
            Err(Base94Error::InvalidSymbol { byte, position })
        );
    }

    #[test]
    fn divide_by_256_divides_big_endian_number() {
        // "#e" = 2 * 94 + 68 = 256
        let mut digits = [2, 68];
        assert_eq!(divide_by_256(&mut digits), 0);
        assert_eq!(digits, [0, 1]);
    }
}
