//! Common test imports and utilities for base94 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{Backend, Base94Error, ALPHABET};

pub use alloc::vec;
pub use alloc::vec::Vec;

/// Signature shared by every backend's encoder.
pub(crate) type EncodeFn = fn(&[u8], &mut [u8]) -> usize;

/// Signature shared by every backend's decoder.
pub(crate) type DecodeFn = fn(&[u8], &mut [u8]) -> Result<usize, Base94Error>;

/// Runs `encode_fn` with a buffer of [`crate::max_encoded_len`] and trims the result.
pub(crate) fn encode_to_vec(encode_fn: EncodeFn, input: &[u8]) -> Vec<u8> {
    let mut output = vec![0u8; crate::max_encoded_len(input.len())];
    let written = encode_fn(input, &mut output);
    output.truncate(written);
    output
}

/// Runs `decode_fn` with a buffer of [`crate::max_decoded_len`] and trims the result.
pub(crate) fn decode_to_vec(decode_fn: DecodeFn, input: &[u8]) -> Result<Vec<u8>, Base94Error> {
    let mut output = vec![0u8; crate::max_decoded_len(input)];
    let written = decode_fn(input, &mut output)?;
    output.truncate(written);
    Ok(output)
}

/// Helper to generate deterministic pseudo random test data of `len` bytes.
///
/// Uses xorshift32, so the same `seed` always produces the same bytes.
pub(crate) fn generate_test_data(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

/// Buffers that tend to break radix conversions: empty, zero runs, all 0xFF,
/// leading zeros in front of data, and random data at and around limb boundaries.
pub(crate) fn edge_case_inputs() -> Vec<Vec<u8>> {
    let mut inputs = vec![
        vec![],
        vec![0x00],
        vec![0xFF],
        vec![0x00; 17],
        vec![0xFF; 17],
        vec![0x00, 0x00, 0x01],
        vec![0x00, 0xFF, 0x00],
        vec![0x01, 0x00, 0x00, 0x00, 0x00],
    ];
    for len in [1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 33, 64, 65] {
        inputs.push(generate_test_data(len, len as u32));
        let mut with_zeros = vec![0x00; 3];
        with_zeros.extend(generate_test_data(len, !(len as u32)));
        inputs.push(with_zeros);
    }
    inputs
}

/// Helper to assert implementation results match reference implementation
pub(crate) fn assert_implementation_matches_reference(
    output_expected: &[u8],
    output_test: &[u8],
    impl_name: &str,
    input: &[u8],
) {
    assert_eq!(
        output_expected, output_test,
        "{impl_name} implementation produced different results than reference for input of {} bytes: {input:02X?}",
        input.len()
    );
}

/// Executes a roundtrip test for an encoder/decoder pair over every length up to `max_len`,
/// plus [`edge_case_inputs`].
pub(crate) fn run_roundtrip_test(
    encode_fn: EncodeFn,
    decode_fn: DecodeFn,
    max_len: usize,
    impl_name: &str,
) {
    let mut inputs = edge_case_inputs();
    inputs.extend((0..=max_len).map(|len| generate_test_data(len, 0xB94 + len as u32)));

    for input in inputs {
        let encoded = encode_to_vec(encode_fn, &input);
        assert!(
            encoded.iter().all(|&c| crate::alphabet::is_symbol(c)),
            "{impl_name} produced a symbol outside the alphabet for {} bytes",
            input.len()
        );

        let decoded = decode_to_vec(decode_fn, &encoded).unwrap();
        assert_eq!(
            decoded,
            input,
            "Mismatch {impl_name} roundtrip for {} bytes",
            input.len()
        );
    }
}

#[test]
fn validate_test_data_generator_is_deterministic() {
    assert_eq!(generate_test_data(64, 7), generate_test_data(64, 7));
    assert_ne!(generate_test_data(64, 7), generate_test_data(64, 8));
    assert_eq!(generate_test_data(0, 7), Vec::<u8>::new());
}
