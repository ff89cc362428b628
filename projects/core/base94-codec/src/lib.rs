#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod alphabet;
pub mod backend;
pub mod error;
pub mod length;

/// Digit-by-digit radix conversion. Always compiled; the guaranteed fallback.
pub mod reference;

/// Limb-based radix conversion with CPU specific inner loops.
#[cfg(feature = "accelerated")]
pub mod accelerated;

#[cfg(test)]
pub mod test_prelude;

pub use alphabet::{ALPHABET, ALPHABET_VERSION, BASE, ZERO_SYMBOL};
pub use backend::{Backend, Codec};
pub use error::Base94Error;
pub use length::{max_decoded_len, max_encoded_len};

/// Encodes `input` into `output` with the process-wide active [`Backend`].
///
/// Returns the number of symbols written to the start of `output`.
///
/// # Errors
///
/// - [`Base94Error::OutputBufferTooSmall`] if `output` is shorter than
///   [`max_encoded_len`]`(input.len())`
#[inline]
pub fn encode_into(input: &[u8], output: &mut [u8]) -> Result<usize, Base94Error> {
    Backend::active_codec().encode_into(input, output)
}

/// Decodes the base94 symbols in `input` into `output` with the process-wide active [`Backend`].
///
/// Returns the number of bytes written to the start of `output`.
///
/// # Errors
///
/// - [`Base94Error::InvalidSymbol`] if `input` contains a byte outside [`ALPHABET`]
/// - [`Base94Error::OutputBufferTooSmall`] if `output` is shorter than
///   [`max_decoded_len`]`(input)`
#[inline]
pub fn decode_into(input: &[u8], output: &mut [u8]) -> Result<usize, Base94Error> {
    Backend::active_codec().decode_into(input, output)
}
