//! Output size bounds.
//!
//! The exact output length of a radix conversion is only known once the conversion is done,
//! so callers providing their own buffers size them with these upper bounds.
//!
//! One byte carries `log(256) / log(94) ≈ 1.220519` base94 digits worth of information, one
//! symbol `log(94) / log(256) ≈ 0.819323` bytes. The bounds use the rationals `12206 / 10000`
//! and `8194 / 10000`, which are slightly above those ratios, in 64-bit arithmetic so they do
//! not overflow on 32-bit targets.

use crate::alphabet::ZERO_SYMBOL;

const ENCODE_RATIO_NUM: u64 = 12206;
const DECODE_RATIO_NUM: u64 = 8194;
const RATIO_DEN: u64 = 10000;

/// Upper bound on the number of symbols [`crate::encode_into`] writes for `input_len` bytes.
///
/// Leading zero bytes each become one symbol, which is below the per-byte ratio, so the bound
/// holds regardless of content.
#[inline]
pub const fn max_encoded_len(input_len: usize) -> usize {
    (input_len as u64 * ENCODE_RATIO_NUM).div_ceil(RATIO_DEN) as usize
}

/// Upper bound on the number of bytes [`crate::decode_into`] writes for `symbols`.
///
/// Leading [`ZERO_SYMBOL`]s each become one zero byte; the remaining digits are bounded by the
/// symbol to byte ratio. Never exceeds `symbols.len()`.
#[inline]
pub fn max_decoded_len(symbols: &[u8]) -> usize {
    let zeros = leading_zero_symbols(symbols);
    let digits = (symbols.len() - zeros) as u64;
    zeros + (digits * DECODE_RATIO_NUM).div_ceil(RATIO_DEN) as usize
}

/// Number of leading `0x00` bytes in `input`.
#[inline]
pub(crate) fn leading_zero_bytes(input: &[u8]) -> usize {
    input.iter().take_while(|&&b| b == 0).count()
}

/// Number of leading [`ZERO_SYMBOL`]s in `symbols`.
#[inline]
pub(crate) fn leading_zero_symbols(symbols: &[u8]) -> usize {
    symbols.iter().take_while(|&&b| b == ZERO_SYMBOL).count()
}
