//! Codec handle bound to one backend.

use alloc::string::String;
use alloc::vec::Vec;
use base94_codec::{Backend, Base94Error, Codec};

/// A base94 encoder/decoder bound to one [`Backend`].
///
/// Cheap to copy; holds only a reference to the backend's static entry points.
///
/// # Examples
///
/// ```
/// use base94_codec_api::{Backend, Base94Codec};
///
/// let codec = Base94Codec::with_backend(Backend::Reference)?;
/// let encoded = codec.encode(&[0x00, 0x00, 0xFF, 0xFF]);
/// assert_eq!(encoded, "!!(H2");
/// assert_eq!(codec.decode(&encoded)?, [0x00, 0x00, 0xFF, 0xFF]);
/// # Ok::<(), base94_codec_api::Base94Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Base94Codec {
    codec: &'static Codec,
}

impl Base94Codec {
    /// Creates a codec using the process-wide active backend ([`Backend::active`]).
    pub fn new() -> Self {
        Self {
            codec: Backend::active_codec(),
        }
    }

    /// Creates a codec using the reference backend, which is always available.
    pub fn reference() -> Self {
        Self {
            codec: Backend::reference_codec(),
        }
    }

    /// Creates a codec using a specific backend.
    ///
    /// # Errors
    ///
    /// - [`Base94Error::BackendUnavailable`] if `backend` is not compiled into this build
    pub fn with_backend(backend: Backend) -> Result<Self, Base94Error> {
        backend
            .codec()
            .map(|codec| Self { codec })
            .ok_or(Base94Error::BackendUnavailable(backend))
    }

    /// The backend this codec runs on.
    pub fn backend(&self) -> Backend {
        self.codec.backend()
    }

    /// Encodes `input` as a base94 string.
    pub fn encode(&self, input: &[u8]) -> String {
        let symbols = self.codec.encode_to_vec(input);

        // Safety: every symbol of the alphabet is printable ASCII.
        unsafe { String::from_utf8_unchecked(symbols) }
    }

    /// Decodes a base94 string.
    ///
    /// # Errors
    ///
    /// - [`Base94Error::InvalidSymbol`] if `input` contains a character outside the alphabet.
    ///   Non-ASCII characters are reported by their first UTF-8 byte.
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, Base94Error> {
        self.codec.decode_to_vec(input.as_bytes())
    }

    /// Decodes base94 symbols given as raw bytes.
    ///
    /// # Errors
    ///
    /// - [`Base94Error::InvalidSymbol`] if `input` contains a byte outside the alphabet
    pub fn decode_bytes(&self, input: &[u8]) -> Result<Vec<u8>, Base94Error> {
        self.codec.decode_to_vec(input)
    }

    /// Encodes `input` into `output`, returning the number of symbols written.
    ///
    /// # Errors
    ///
    /// - [`Base94Error::OutputBufferTooSmall`] if `output` is shorter than
    ///   [`base94_codec::max_encoded_len`]`(input.len())`
    pub fn encode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, Base94Error> {
        self.codec.encode_into(input, output)
    }

    /// Decodes `input` into `output`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// - [`Base94Error::OutputBufferTooSmall`] if `output` is shorter than
    ///   [`base94_codec::max_decoded_len`]`(input)`
    /// - [`Base94Error::InvalidSymbol`] if `input` contains a byte outside the alphabet
    pub fn decode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, Base94Error> {
        self.codec.decode_into(input, output)
    }

    /// Returns `true` if `input` consists only of base94 symbols, i.e. [`Self::decode`]
    /// would succeed.
    pub fn is_valid(&self, input: &str) -> bool {
        base94_codec::alphabet::validate(input.as_bytes()).is_ok()
    }
}

impl Default for Base94Codec {
    fn default() -> Self {
        Self::new()
    }
}
