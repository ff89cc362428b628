#![no_main]

// Arbitrary strings (valid or not) must decode to the same bytes, or fail with the same error,
// on every backend.

use base94_codec::{max_decoded_len, Backend};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some(reference) = Backend::Reference.codec() else {
        return;
    };
    let expected = reference.decode_to_vec(data);

    for codec in Backend::all_values().iter().filter_map(|b| b.codec()) {
        let mut output = vec![0u8; max_decoded_len(data)];
        let result = codec
            .decode_into(data, &mut output)
            .map(|len| output[..len].to_vec());
        assert_eq!(result, expected, "{}: decode mismatch", codec.backend());
    }
});
