//! Encode/decode entry points for the C API.

use crate::c_api::error::B94ErrorCode;
use base94_codec::{ALPHABET_VERSION, Backend, max_decoded_len, max_encoded_len};
use core::slice;

/// Builds an input slice, allowing null only for empty input.
///
/// # Safety
///
/// If non-null, `ptr` must be valid for reads of `len` bytes.
unsafe fn input_slice<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return if len == 0 { Some(&[]) } else { None };
    }
    Some(unsafe { slice::from_raw_parts(ptr, len) })
}

/// Builds an output slice, allowing null only for an empty buffer.
///
/// # Safety
///
/// If non-null, `ptr` must be valid for writes of `len` bytes.
unsafe fn output_slice<'a>(ptr: *mut u8, len: usize) -> Option<&'a mut [u8]> {
    if ptr.is_null() {
        return if len == 0 { Some(&mut []) } else { None };
    }
    Some(unsafe { slice::from_raw_parts_mut(ptr, len) })
}

/// Encode `input_len` bytes at `input` to base94 symbols at `output`.
///
/// On success the number of symbols written is stored to `written`.
///
/// # Parameters
/// - `input`: Bytes to encode (may be null if `input_len` is 0)
/// - `input_len`: Number of bytes to encode
/// - `output`: Buffer receiving the symbols (may be null if `output_len` is 0)
/// - `output_len`: Size of `output`; must be at least [`b94_max_encoded_len`]`(input_len)`
/// - `written`: Receives the number of symbols written
///
/// # Returns
/// [`B94ErrorCode::Success`] or the reason for failure.
///
/// # Safety
/// - `input` must be valid for reads of `input_len` bytes
/// - `output` must be valid for writes of `output_len` bytes
/// - `written` must be valid for writes of one `usize`
/// - `input` and `output` must not overlap
#[unsafe(no_mangle)]
pub unsafe extern "C" fn b94_encode(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
    written: *mut usize,
) -> B94ErrorCode {
    if written.is_null() {
        return B94ErrorCode::NullWrittenPointer;
    }
    let Some(input) = (unsafe { input_slice(input, input_len) }) else {
        return B94ErrorCode::NullInputPointer;
    };
    let Some(output) = (unsafe { output_slice(output, output_len) }) else {
        return B94ErrorCode::NullOutputBufferPointer;
    };

    match base94_codec::encode_into(input, output) {
        Ok(len) => {
            unsafe { written.write(len) };
            B94ErrorCode::Success
        }
        Err(e) => e.into(),
    }
}

/// Decode `input_len` base94 symbols at `input` to bytes at `output`.
///
/// On success the number of bytes written is stored to `written`.
///
/// # Parameters
/// - `input`: Symbols to decode (may be null if `input_len` is 0)
/// - `input_len`: Number of symbols to decode
/// - `output`: Buffer receiving the bytes (may be null if `output_len` is 0)
/// - `output_len`: Size of `output`; must be at least [`b94_max_decoded_len`]`(input, input_len)`
/// - `written`: Receives the number of bytes written
///
/// # Returns
/// [`B94ErrorCode::Success`] or the reason for failure. The contents of `output` are
/// unspecified after a failure.
///
/// # Safety
/// - `input` must be valid for reads of `input_len` bytes
/// - `output` must be valid for writes of `output_len` bytes
/// - `written` must be valid for writes of one `usize`
/// - `input` and `output` must not overlap
#[unsafe(no_mangle)]
pub unsafe extern "C" fn b94_decode(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
    written: *mut usize,
) -> B94ErrorCode {
    if written.is_null() {
        return B94ErrorCode::NullWrittenPointer;
    }
    let Some(input) = (unsafe { input_slice(input, input_len) }) else {
        return B94ErrorCode::NullInputPointer;
    };
    let Some(output) = (unsafe { output_slice(output, output_len) }) else {
        return B94ErrorCode::NullOutputBufferPointer;
    };

    match base94_codec::decode_into(input, output) {
        Ok(len) => {
            unsafe { written.write(len) };
            B94ErrorCode::Success
        }
        Err(e) => e.into(),
    }
}

/// Output buffer size required by [`b94_encode`] for `input_len` bytes.
#[unsafe(no_mangle)]
pub extern "C" fn b94_max_encoded_len(input_len: usize) -> usize {
    max_encoded_len(input_len)
}

/// Output buffer size required by [`b94_decode`] for the given symbols.
///
/// Returns 0 if `input` is null.
///
/// # Safety
/// - `input` must be valid for reads of `input_len` bytes
#[unsafe(no_mangle)]
pub unsafe extern "C" fn b94_max_decoded_len(input: *const u8, input_len: usize) -> usize {
    match unsafe { input_slice(input, input_len) } {
        Some(input) => max_decoded_len(input),
        None => 0,
    }
}

/// The backend used by [`b94_encode`] and [`b94_decode`]: `0` = reference, `1` = accelerated.
#[unsafe(no_mangle)]
pub extern "C" fn b94_active_backend() -> u8 {
    Backend::active() as u8
}

/// Version of the alphabet and leading zero convention.
#[unsafe(no_mangle)]
pub extern "C" fn b94_alphabet_version() -> u32 {
    ALPHABET_VERSION
}
