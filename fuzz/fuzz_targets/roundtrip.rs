#![no_main]

// Every backend must decode its own encoding back to the input, using only alphabet symbols.

use base94_codec::{alphabet::is_symbol, max_encoded_len, Backend};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub leading_zeros: u8,
    pub bytes: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let mut data = vec![0u8; usize::from(input.leading_zeros % 16)];
    data.extend_from_slice(&input.bytes);

    for codec in Backend::all_values().iter().filter_map(|b| b.codec()) {
        let encoded = codec.encode_to_vec(&data);
        assert!(encoded.len() <= max_encoded_len(data.len()));
        assert!(encoded.iter().all(|&b| is_symbol(b)), "{}: non-alphabet output", codec.backend());

        let decoded = codec.decode_to_vec(&encoded).expect("own encoding must decode");
        assert_eq!(decoded, data, "{}: round trip mismatch", codec.backend());
    }
});
