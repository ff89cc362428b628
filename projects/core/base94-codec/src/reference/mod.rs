//! # Reference Implementation
//!
//! Straightforward radix conversion that treats the whole buffer as one big integer and
//! performs schoolbook long division one byte (encode) or one digit (decode) at a time.
//!
//! This is the implementation every other backend is tested against, and the one the active
//! backend falls back to when nothing faster is compiled in.
//!
//! ## Layout
//!
//! Below is a description of the encoding process. For decoding, swap `input` and `output`.
//!
//! ```ignore
//! input:  [0x00] [0x00] [b0 b1 ... bn]        (big endian base 256)
//!            |      |        |
//! output:  ['!']  ['!']  [d0 d1 ... dm]       (big endian base 94, d0 != '!')
//! ```
//!
//! Each leading zero byte becomes one zero symbol (`'!'`); the remaining bytes are converted as
//! a single number whose digits never start with a zero.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;
