//! Reading command input and writing command output.

use crate::error::CliError;
use core::str::FromStr;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// A file path, or `-` for stdin/stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoTarget {
    Std,
    File(PathBuf),
}

impl FromStr for IoTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("Empty path".to_string()),
            "-" => Ok(Self::Std),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

/// Runs `f` over the full contents of `input`.
///
/// Files are memory mapped for the duration of the call; stdin is read to the end first.
pub fn with_input<R>(
    input: &IoTarget,
    f: impl FnOnce(&[u8]) -> Result<R, CliError>,
) -> Result<R, CliError> {
    match input {
        IoTarget::Std => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            f(&data)
        }
        IoTarget::File(path) => with_mapped_file(path, f),
    }
}

/// Memory maps the file at `path` and runs `f` over its contents.
pub fn with_mapped_file<R>(
    path: &Path,
    f: impl FnOnce(&[u8]) -> Result<R, CliError>,
) -> Result<R, CliError> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;

    // Zero length mappings are rejected by the OS.
    if size == 0 {
        return f(&[]);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    log::debug!("mapped {} ({size} bytes)", path.display());
    f(mapping.as_slice())
}

/// Writes `data` to `output`, creating or truncating the file.
pub fn write_output(output: &IoTarget, data: &[u8]) -> Result<(), CliError> {
    match output {
        IoTarget::Std => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
        IoTarget::File(path) => fs::write(path, data)?,
    }
    Ok(())
}

/// Strips leading and trailing ASCII whitespace, such as the newline of a text file.
pub fn trim_ascii_whitespace(data: &[u8]) -> &[u8] {
    data.trim_ascii()
}
