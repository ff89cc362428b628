#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # Examples
//!
//! ## Encoding into a Caller Provided Buffer
//!
//! ```
//! use base94_codec_api::{encode_into, max_encoded_len};
//!
//! let data = [0x00, 0x01, 0xFF];
//! let mut output = vec![0u8; max_encoded_len(data.len())];
//! let written = encode_into(&data, &mut output)?;
//! assert_eq!(&output[..written], b"!&J");
//! # Ok::<(), base94_codec_api::Base94Error>(())
//! ```
//!
//! ## Comparing Backends
//!
//! ```
//! use base94_codec_api::{accelerated_encode, reference_encode};
//!
//! let data = b"any bytes at all";
//! if let Some(fast) = accelerated_encode(data) {
//!     assert_eq!(fast, reference_encode(data));
//! }
//! ```

extern crate alloc;

pub mod codec;

/// C API functions (enabled with c-exports feature)
#[cfg(feature = "c-exports")]
pub mod c_api;

pub use base94_codec::{
    ALPHABET, ALPHABET_VERSION, BASE, Backend, Base94Error, ZERO_SYMBOL, decode_into, encode_into,
    max_decoded_len, max_encoded_len,
};
pub use codec::Base94Codec;

use alloc::string::String;
use alloc::vec::Vec;

/// Encodes `input` as a base94 string using the active backend.
///
/// # Examples
///
/// ```
/// assert_eq!(base94_codec_api::encode(&[0x00, 0x01]), "!\"");
/// assert_eq!(base94_codec_api::encode(&[]), "");
/// ```
pub fn encode(input: &[u8]) -> String {
    Base94Codec::new().encode(input)
}

/// Decodes a base94 string using the active backend.
///
/// # Errors
///
/// - [`Base94Error::InvalidSymbol`] if `input` contains a character outside [`ALPHABET`]
///
/// # Examples
///
/// ```
/// use base94_codec_api::{decode, Base94Error};
///
/// assert_eq!(decode("!\"").unwrap(), [0x00, 0x01]);
/// assert_eq!(
///     decode("a b"),
///     Err(Base94Error::InvalidSymbol { byte: b' ', position: 1 })
/// );
/// ```
pub fn decode(input: &str) -> Result<Vec<u8>, Base94Error> {
    Base94Codec::new().decode(input)
}

/// Decodes base94 symbols given as raw bytes using the active backend.
///
/// # Errors
///
/// - [`Base94Error::InvalidSymbol`] if `input` contains a byte outside [`ALPHABET`]
pub fn decode_bytes(input: &[u8]) -> Result<Vec<u8>, Base94Error> {
    Base94Codec::new().decode_bytes(input)
}

/// Encodes `input` with the reference backend, regardless of the active one.
pub fn reference_encode(input: &[u8]) -> String {
    Base94Codec::reference().encode(input)
}

/// Decodes `input` with the reference backend, regardless of the active one.
///
/// # Errors
///
/// - [`Base94Error::InvalidSymbol`] if `input` contains a character outside [`ALPHABET`]
pub fn reference_decode(input: &str) -> Result<Vec<u8>, Base94Error> {
    Base94Codec::reference().decode(input)
}

/// Encodes `input` with the accelerated backend.
///
/// Returns [`None`] if this build does not contain the accelerated backend.
pub fn accelerated_encode(input: &[u8]) -> Option<String> {
    Base94Codec::with_backend(Backend::Accelerated)
        .ok()
        .map(|codec| codec.encode(input))
}

/// Decodes `input` with the accelerated backend.
///
/// Returns [`None`] if this build does not contain the accelerated backend.
pub fn accelerated_decode(input: &str) -> Option<Result<Vec<u8>, Base94Error>> {
    Base94Codec::with_backend(Backend::Accelerated)
        .ok()
        .map(|codec| codec.decode(input))
}
