use crate::error::CliError;
use crate::util::{with_input, write_output, BackendChoice, IoTarget};
use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// Encode a file as base94 text
#[argh(subcommand, name = "encode")]
pub struct EncodeCmd {
    /// input file, or - for stdin
    #[argh(option)]
    pub input: IoTarget,

    /// output file, or - for stdout [default: -]
    #[argh(option, default = "IoTarget::Std")]
    pub output: IoTarget,

    /// backend: auto, reference, accelerated [default: auto]
    #[argh(option, default = "BackendChoice::Auto")]
    pub backend: BackendChoice,
}

pub fn handle_encode_command(cmd: EncodeCmd) -> Result<(), CliError> {
    let codec = super::codec_for(cmd.backend)?;
    let encoded = with_input(&cmd.input, |data| Ok(codec.encode(data)))?;
    write_output(&cmd.output, encoded.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;

    #[rstest]
    fn encodes_file_to_file(#[values("auto", "reference", "accelerated")] backend: &str) {
        let backend: BackendChoice = backend.parse().unwrap();
        if let BackendChoice::Specific(b) = backend {
            if !b.is_available() {
                return;
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.bin");
        let output = dir.path().join("output.txt");
        fs::write(&input, [0x00, 0x00, 0xFF, 0xFF]).unwrap();

        handle_encode_command(EncodeCmd {
            input: IoTarget::File(input),
            output: IoTarget::File(output.clone()),
            backend,
        })
        .unwrap();
        assert_eq!(fs::read(output).unwrap(), b"!!(H2");
    }
}
