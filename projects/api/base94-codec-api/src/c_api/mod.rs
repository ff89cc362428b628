//! # C API (FFI) Documentation
//!
//! *Note: The C API is only available when the `c-exports` feature is enabled.*
//!
//! All functions work on caller provided buffers; nothing is allocated across the FFI boundary.
//! Size output buffers with [`b94_max_encoded_len`] / [`b94_max_decoded_len`].
//!
//! ## Example Usage
//!
//! ```c
//! const uint8_t data[] = {0x00, 0x01, 0xFF};
//! uint8_t encoded[16];
//! size_t written = 0;
//!
//! B94ErrorCode result = b94_encode(data, sizeof(data), encoded, sizeof(encoded), &written);
//! if (result == B94_SUCCESS) {
//!     // encoded[0..written] holds "!&J"
//! }
//! ```
//!
//! ## Functions
//!
//! - **`b94_encode(input, input_len, output, output_len, written)`** - Encode bytes to symbols
//! - **`b94_decode(input, input_len, output, output_len, written)`** - Decode symbols to bytes
//! - **`b94_max_encoded_len(input_len)`** - Output size needed by `b94_encode`
//! - **`b94_max_decoded_len(input, input_len)`** - Output size needed by `b94_decode`
//! - **`b94_active_backend()`** - `0` for the reference backend, `1` for the accelerated one
//! - **`b94_alphabet_version()`** - Version of the alphabet/leading zero contract
//!
//! A null `input` or `output` is accepted only together with a length of 0.

pub mod codec;
pub mod error;

pub use codec::*;
pub use error::*;
