//! # Accelerated Implementation
//!
//! Produces output byte-identical to [`crate::reference`], but moves through the number in
//! 32-bit limbs and extracts [`CHUNK_DIGITS`] base94 digits per pass instead of one.
//!
//! ## Encoding
//!
//! The input (after leading zeros) is packed into big endian `u32` limbs, then repeatedly
//! divided by [`CHUNK_BASE`] (`94^4`) with 64-bit intermediates. Each remainder yields four
//! digits, least significant first. The last remainder only yields its significant digits.
//!
//! ## Decoding
//!
//! The digits (after leading zeros) are consumed most significant first in chunks of up to
//! four. Each chunk multiplies a little endian `u32` limb array by `94^k` and adds the chunk's
//! value. The limbs are finally written out as big endian bytes without leading zeros.
//!
//! ## CPU Specific Code
//!
//! The per-limb loops are compiled for several x86-64 feature levels with `multiversion`
//! and picked at runtime, unless the `no-runtime-cpu-detection` feature is enabled.

mod decode;
mod encode;
mod limbs;

pub use decode::decode;
pub use encode::encode;
pub use limbs::{CHUNK_BASE, CHUNK_DIGITS};
