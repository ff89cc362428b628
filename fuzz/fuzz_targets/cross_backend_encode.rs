#![no_main]

// The accelerated encoder must produce byte-identical output to the reference encoder.

use base94_codec::Backend;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some(accelerated) = Backend::Accelerated.codec() else {
        return;
    };
    let Some(reference) = Backend::Reference.codec() else {
        return;
    };

    assert_eq!(
        accelerated.encode_to_vec(data),
        reference.encode_to_vec(data),
        "Encodings don't match"
    );
});
