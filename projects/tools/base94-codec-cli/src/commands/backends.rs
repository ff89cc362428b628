use crate::error::CliError;
use argh::FromArgs;
use base94_codec_api::{Backend, ALPHABET_VERSION};

#[derive(FromArgs, Debug)]
/// List the codec backends compiled into this build
#[argh(subcommand, name = "backends")]
pub struct BackendsCmd {}

pub fn handle_backends_command(_cmd: BackendsCmd) -> Result<(), CliError> {
    let active = Backend::active();
    println!("Alphabet version: {ALPHABET_VERSION}");
    for &backend in Backend::all_values() {
        let availability = if backend.is_available() {
            "available"
        } else {
            "not compiled in"
        };
        let marker = if backend == active { " (active)" } else { "" };
        println!("  {:<12} {availability}{marker}", backend.name());
    }
    Ok(())
}
