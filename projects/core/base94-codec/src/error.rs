//! Error types for base94 operations.

use crate::backend::Backend;
use thiserror::Error;

/// Errors that can occur while encoding or decoding base94 data.
///
/// Every backend reports exactly the same error for the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base94Error {
    /// The input contains a byte that is not part of the base94 alphabet.
    #[error("Invalid base94 symbol 0x{byte:02X} at position {position}")]
    InvalidSymbol {
        /// The offending byte.
        byte: u8,
        /// Offset of the offending byte in the input.
        position: usize,
    },

    /// The output buffer is too small to hold the result.
    #[error("Output buffer too small: needed {needed}, got {actual}")]
    OutputBufferTooSmall {
        /// The required buffer size.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },

    /// The requested backend was not compiled into this build.
    #[error("Backend {0:?} is not available in this build")]
    BackendUnavailable(Backend),
}
