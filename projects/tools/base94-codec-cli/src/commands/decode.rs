use crate::error::CliError;
use crate::util::{trim_ascii_whitespace, with_input, write_output, BackendChoice, IoTarget};
use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// Decode base94 text back to the original bytes
#[argh(subcommand, name = "decode")]
pub struct DecodeCmd {
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

pub fn handle_decode_command(cmd: DecodeCmd) -> Result<(), CliError> {
    let codec = super::codec_for(cmd.backend)?;
    let decoded = with_input(&cmd.input, |data| {
        Ok(codec.decode_bytes(trim_ascii_whitespace(data))?)
    })?;
    write_output(&cmd.output, &decoded)
}
