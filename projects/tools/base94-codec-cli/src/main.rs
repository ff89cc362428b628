#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use log::LevelFilter;
use std::process::ExitCode;

#[derive(FromArgs, Debug)]
/// Encode and decode files using the base94 binary-to-text codec
struct TopLevel {
    /// log verbosity: off, error, warn, info, debug, trace [default: warn]
    #[argh(option, default = "LevelFilter::Warn")]
    log_level: LevelFilter,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Encode(commands::encode::EncodeCmd),
    Decode(commands::decode::DecodeCmd),
    Verify(commands::verify::VerifyCmd),
    Backends(commands::backends::BackendsCmd),
}

fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

fn main() -> ExitCode {
    let cli: TopLevel = argh::from_env();
    init_logger(cli.log_level);

    let result = match cli.command {
        Commands::Encode(cmd) => commands::encode::handle_encode_command(cmd),
        Commands::Decode(cmd) => commands::decode::handle_decode_command(cmd),
        Commands::Verify(cmd) => commands::verify::handle_verify_command(cmd),
        Commands::Backends(cmd) => commands::backends::handle_backends_command(cmd),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
