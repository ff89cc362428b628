use base94_codec_api::Base94Error;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Failed to open input file: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),
    #[error("Failed to map input file: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
    #[error(transparent)]
    Codec(#[from] Base94Error),
    #[error("Verification failed: {0}")]
    Verification(String),
}
