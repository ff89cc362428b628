use crate::error::CliError;
use crate::util::{with_mapped_file, Throughput};
use argh::FromArgs;
use base94_codec_api::{Backend, Base94Codec};
use std::path::PathBuf;
use std::time::Instant;

#[derive(FromArgs, Debug)]
/// Round trip a file through every available backend and compare their output
#[argh(subcommand, name = "verify")]
pub struct VerifyCmd {
    /// input file to verify with
    #[argh(option)]
    pub input: PathBuf,
}

/// Result of one backend's round trip.
struct BackendRun {
    backend: Backend,
    encoded: String,
    encode_throughput: Throughput,
    decode_throughput: Throughput,
}

pub fn handle_verify_command(cmd: VerifyCmd) -> Result<(), CliError> {
    let runs = with_mapped_file(&cmd.input, |data| {
        println!(
            "Verifying {} ({} bytes)",
            cmd.input.display(),
            data.len()
        );
        Backend::all_values()
            .iter()
            .filter_map(|&backend| Base94Codec::with_backend(backend).ok())
            .map(|codec| run_backend(codec, data))
            .collect::<Result<Vec<_>, _>>()
    })?;

    for run in &runs {
        println!(
            "  {:<12} {} symbols, encode {}, decode {}",
            run.backend.name(),
            run.encoded.len(),
            run.encode_throughput,
            run.decode_throughput
        );
    }

    check_equivalence(&runs)?;
    println!("OK: {} backend(s) agree", runs.len());
    Ok(())
}

fn run_backend(codec: Base94Codec, data: &[u8]) -> Result<BackendRun, CliError> {
    let len = data.len() as u64;

    let start = Instant::now();
    let encoded = codec.encode(data);
    let encode_throughput = Throughput::from_duration(len, start.elapsed());

    let start = Instant::now();
    let decoded = codec.decode(&encoded)?;
    let decode_throughput = Throughput::from_duration(len, start.elapsed());

    if decoded != data {
        return Err(CliError::Verification(format!(
            "backend '{}' did not round trip the input",
            codec.backend()
        )));
    }

    Ok(BackendRun {
        backend: codec.backend(),
        encoded,
        encode_throughput,
        decode_throughput,
    })
}

fn check_equivalence(runs: &[BackendRun]) -> Result<(), CliError> {
    let Some((first, rest)) = runs.split_first() else {
        return Ok(());
    };

    for run in rest {
        if run.encoded != first.encoded {
            return Err(CliError::Verification(format!(
                "backends '{}' and '{}' produced different encodings",
                first.backend, run.backend
            )));
        }
    }
    Ok(())
}
