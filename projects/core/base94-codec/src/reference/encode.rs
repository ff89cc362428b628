use crate::alphabet::{digits_to_symbols, BASE};
use crate::length::{leading_zero_bytes, max_encoded_len};
use alloc::vec::Vec;

/// Encodes `input` to base94 symbols, writing them to the start of `output`.
///
/// Returns the number of symbols written.
///
/// # Panics
///
/// If `output` is shorter than [`max_encoded_len`]`(input.len())`.
pub fn encode(input: &[u8], output: &mut [u8]) -> usize {
    assert!(output.len() >= max_encoded_len(input.len()));

    // Zero bytes become zero digits, mapped to symbols with the rest below.
    let zeros = leading_zero_bytes(input);
    output[..zeros].fill(0);

    let mut number: Vec<u8> = input[zeros..].to_vec();
    let digits = &mut output[zeros..];
    let mut num_digits = 0;
    let mut start = 0;
    while start < number.len() {
        digits[num_digits] = divide_by_base(&mut number[start..]);
        num_digits += 1;

        while start < number.len() && number[start] == 0 {
            start += 1;
        }
    }

    // Remainders come out least significant first.
    digits[..num_digits].reverse();

    let written = zeros + num_digits;
    digits_to_symbols(&mut output[..written]);
    written
}

/// Divides the big endian base 256 number in `number` by [`BASE`] in place.
/// Returns the remainder.
#[inline(always)]
fn divide_by_base(number: &mut [u8]) -> u8 {
    let mut remainder = 0u32;
    for byte in number {
        let acc = (remainder << 8) | *byte as u32;
        *byte = (acc / BASE as u32) as u8;
        remainder = acc % BASE as u32;
    }
    remainder as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(&[], b"")]
    #[case(&[0x00], b"!")]
    #[case(&[0x01], b"\"")]
    #[case(&[0x00, 0x01], b"!\"")]
    #[case(&[0xFF], b"#d")]
    #[case(&[0x01, 0x00], b"#e")]
    #[case(b"Hello", b"KCW3D>")]
    #[case(b"Hello, World!", b"/P|?l:+>N>\\ftB[Z")]
    #[case(&[0x00, 0x00, 0xFF, 0xFF], b"!!(H2")]
    #[case(&[0xFF; 8], b"A33?&-jqQh")]
    #[case(&[0x00; 3], b"!!!")]
    fn encodes_known_vectors(#[case] input: &[u8], #[case] expected: &[u8]) {
        assert_eq!(encode_to_vec(encode, input), expected);
    }

    #[test]
    fn divide_by_base_divides_big_endian_number() {
        // 0x0100 = 256 = 2 * 94 + 68
        let mut number = [0x01, 0x00];
        assert_eq!(divide_by_base(&mut number), 68);
        assert_eq!(number, [0x00, 0x02]);
    }

    #[test]
    #[should_panic]
    fn panics_on_short_output() {
        let mut output = [0u8; 1];
        encode(&[0xFF], &mut output);
    }
}
