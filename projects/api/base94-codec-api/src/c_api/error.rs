//! C API error handling for base94 operations.

use base94_codec::Base94Error;

/// C-compatible error codes for base94 operations.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum B94ErrorCode {
    /// Operation succeeded
    Success = 0,
    /// Input contains a byte outside the base94 alphabet
    InvalidSymbol = 1,
    /// Output buffer too small for the operation
    OutputBufferTooSmall = 2,
    /// Requested backend is not compiled into this build
    BackendUnavailable = 3,
    /// Null pointer provided for input parameter with a non-zero length
    NullInputPointer = 4,
    /// Null pointer provided for output buffer parameter with a non-zero length
    NullOutputBufferPointer = 5,
    /// Null pointer provided for the written length parameter
    NullWrittenPointer = 6,
}

impl From<Base94Error> for B94ErrorCode {
    fn from(error: Base94Error) -> Self {
        match error {
            Base94Error::InvalidSymbol { .. } => B94ErrorCode::InvalidSymbol,
            Base94Error::OutputBufferTooSmall { .. } => B94ErrorCode::OutputBufferTooSmall,
            Base94Error::BackendUnavailable(_) => B94ErrorCode::BackendUnavailable,
        }
    }
}

impl<T> From<Result<T, Base94Error>> for B94ErrorCode {
    fn from(result: Result<T, Base94Error>) -> Self {
        match result {
            Ok(_) => B94ErrorCode::Success,
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base94_codec::Backend;
    use rstest::rstest;

    #[rstest]
    #[case(Base94Error::InvalidSymbol { byte: 0x20, position: 0 }, B94ErrorCode::InvalidSymbol)]
    #[case(Base94Error::OutputBufferTooSmall { needed: 2, actual: 1 }, B94ErrorCode::OutputBufferTooSmall)]
    #[case(Base94Error::BackendUnavailable(Backend::Accelerated), B94ErrorCode::BackendUnavailable)]
    fn maps_errors_to_codes(#[case] error: Base94Error, #[case] expected: B94ErrorCode) {
        assert_eq!(B94ErrorCode::from(error), expected);
        assert_eq!(B94ErrorCode::from(Err::<(), _>(error)), expected);
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(B94ErrorCode::from(Ok::<usize, Base94Error>(3)), B94ErrorCode::Success);
        assert_eq!(B94ErrorCode::Success as i32, 0);
    }
}
