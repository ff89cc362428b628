//! Backend selection.
//!
//! Two implementations of the codec exist: [`crate::reference`], which is always compiled in,
//! and [`crate::accelerated`], which is compiled in with the `accelerated` feature. Both
//! produce identical output and identical errors for every input, so which one runs is not
//! observable to callers other than through speed.
//!
//! [`Backend::active`] resolves the preferred available backend once per process and never
//! changes it afterwards. Calls go through the static [`Codec`] table of that backend.

use crate::error::Base94Error;
use crate::length::{max_decoded_len, max_encoded_len};
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU8, Ordering};
use derive_enum_all_values::AllValues;
use log::{debug, trace};

/// An implementation of the base94 codec.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
#[repr(u8)]
pub enum Backend {
    /// Digit-by-digit long division. Always available.
    Reference = 0,

    /// Limb-based conversion, four digits per pass, with CPU specific inner loops.
    /// Available when built with the `accelerated` feature.
    Accelerated = 1,
}

/// Table of the entry points of one [`Backend`].
///
/// The raw functions require outputs of at least [`max_encoded_len`] / [`max_decoded_len`];
/// the methods on this type check that before calling them.
#[derive(Debug)]
pub struct Codec {
    backend: Backend,
    encode_fn: fn(&[u8], &mut [u8]) -> usize,
    decode_fn: fn(&[u8], &mut [u8]) -> Result<usize, Base94Error>,
}

static REFERENCE: Codec = Codec {
    backend: Backend::Reference,
    encode_fn: crate::reference::encode,
    decode_fn: crate::reference::decode,
};

#[cfg(feature = "accelerated")]
static ACCELERATED: Codec = Codec {
    backend: Backend::Accelerated,
    encode_fn: crate::accelerated::encode,
    decode_fn: crate::accelerated::decode,
};

/// [`Backend`] discriminant chosen by [`Backend::active`], or [`UNRESOLVED`].
static ACTIVE: AtomicU8 = AtomicU8::new(UNRESOLVED);
const UNRESOLVED: u8 = u8::MAX;

impl Backend {
    /// Human readable name, also accepted by [`Backend::from_name`].
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Reference => "reference",
            Backend::Accelerated => "accelerated",
        }
    }

    /// Parses a name returned by [`Backend::name`] (case insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|backend| backend.name().eq_ignore_ascii_case(name))
    }

    /// Returns `true` if this backend was compiled into the current build.
    pub const fn is_available(self) -> bool {
        match self {
            Backend::Reference => true,
            Backend::Accelerated => cfg!(feature = "accelerated"),
        }
    }

    /// Returns the entry points of this backend, or [`None`] if it is not available.
    pub fn codec(self) -> Option<&'static Codec> {
        match self {
            Backend::Reference => Some(&REFERENCE),
            #[cfg(feature = "accelerated")]
            Backend::Accelerated => Some(&ACCELERATED),
            #[cfg(not(feature = "accelerated"))]
            Backend::Accelerated => None,
        }
    }

    /// Probes for the preferred backend: [`Backend::Accelerated`] when available,
    /// [`Backend::Reference`] otherwise.
    ///
    /// Unlike [`Backend::active`], this does not touch the process-wide selection.
    pub fn detect() -> Self {
        if Backend::Accelerated.is_available() {
            Backend::Accelerated
        } else {
            Backend::Reference
        }
    }

    /// The backend used by the crate level functions.
    ///
    /// Resolved with [`Backend::detect`] on first call; every later call returns the same
    /// value. Concurrent first calls all agree, as detection is deterministic and only the
    /// first store wins.
    #[inline]
    pub fn active() -> Self {
        match ACTIVE.load(Ordering::Acquire) {
            UNRESOLVED => Self::resolve(),
            value => Self::from_discriminant(value),
        }
    }

    /// The [`Codec`] of [`Backend::active`].
    #[inline]
    pub fn active_codec() -> &'static Codec {
        match Self::active().codec() {
            Some(codec) => codec,
            None => Self::reference_codec(),
        }
    }

    /// The [`Codec`] of [`Backend::Reference`], which every build contains.
    #[inline]
    pub fn reference_codec() -> &'static Codec {
        &REFERENCE
    }

    #[cold]
    fn resolve() -> Self {
        let detected = Self::detect();
        match ACTIVE.compare_exchange(
            UNRESOLVED,
            detected as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                debug!(
                    "base94: active backend resolved to '{}' (accelerated available: {})",
                    detected.name(),
                    Backend::Accelerated.is_available()
                );
                detected
            }
            Err(existing) => Self::from_discriminant(existing),
        }
    }

    fn from_discriminant(value: u8) -> Self {
        match value {
            1 => Backend::Accelerated,
            _ => Backend::Reference,
        }
    }
}

impl core::fmt::Display for Backend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl Codec {
    /// The backend these entry points belong to.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Encodes `input` into `output`. Returns the number of symbols written.
    ///
    /// # Errors
    ///
    /// - [`Base94Error::OutputBufferTooSmall`] if `output` is shorter than
    ///   [`max_encoded_len`]`(input.len())`
    pub fn encode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, Base94Error> {
        let needed = max_encoded_len(input.len());
        if output.len() < needed {
            return Err(Base94Error::OutputBufferTooSmall {
                needed,
                actual: output.len(),
            });
        }

        let written = (self.encode_fn)(input, output);
        trace!(
            "base94 [{}]: encoded {} bytes into {written} symbols",
            self.backend.name(),
            input.len()
        );
        Ok(written)
    }

    /// Decodes the symbols in `input` into `output`. Returns the number of bytes written.
    ///
    /// The output buffer size is checked before the symbols are.
    ///
    /// # Errors
    ///
    /// - [`Base94Error::OutputBufferTooSmall`] if `output` is shorter than
    ///   [`max_decoded_len`]`(input)`
    /// - [`Base94Error::InvalidSymbol`] if `input` contains a byte outside the alphabet
    pub fn decode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, Base94Error> {
        let needed = max_decoded_len(input);
        if output.len() < needed {
            return Err(Base94Error::OutputBufferTooSmall {
                needed,
                actual: output.len(),
            });
        }

        let written = (self.decode_fn)(input, output)?;
        trace!(
            "base94 [{}]: decoded {} symbols into {written} bytes",
            self.backend.name(),
            input.len()
        );
        Ok(written)
    }

    /// Encodes `input` into a newly allocated buffer of ASCII symbols.
    pub fn encode_to_vec(&self, input: &[u8]) -> Vec<u8> {
        let mut output = vec![0u8; max_encoded_len(input.len())];
        let written = (self.encode_fn)(input, &mut output);
        output.truncate(written);
        output
    }

    /// Decodes the symbols in `input` into a newly allocated buffer.
    ///
    /// # Errors
    ///
    /// - [`Base94Error::InvalidSymbol`] if `input` contains a byte outside the alphabet
    pub fn decode_to_vec(&self, input: &[u8]) -> Result<Vec<u8>, Base94Error> {
        let mut output = vec![0u8; max_decoded_len(input)];
        let written = (self.decode_fn)(input, &mut output)?;
        output.truncate(written);
        Ok(output)
    }
}
