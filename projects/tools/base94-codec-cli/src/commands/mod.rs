pub mod backends;
pub mod decode;
pub mod encode;
pub mod verify;

use crate::util::BackendChoice;
use base94_codec_api::{Base94Codec, Base94Error};

/// Builds the codec for a command line backend choice.
pub(crate) fn codec_for(choice: BackendChoice) -> Result<Base94Codec, Base94Error> {
    let codec = match choice {
        BackendChoice::Auto => Base94Codec::new(),
        BackendChoice::Specific(backend) => Base94Codec::with_backend(backend)?,
    };
    log::info!("using backend '{}'", codec.backend());
    Ok(codec)
}
