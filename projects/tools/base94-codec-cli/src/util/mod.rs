mod io;
mod throughput;

pub use io::*;
pub use throughput::*;

use base94_codec_api::Backend;
use core::str::FromStr;

/// Backend requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendChoice {
    /// Whatever [`Backend::active`] resolves to
    Auto,
    /// A specific backend
    Specific(Backend),
}

impl FromStr for BackendChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }

        Backend::from_name(s).map(Self::Specific).ok_or_else(|| {
            format!("Unknown backend: {s}. Valid options: auto, reference, accelerated")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("auto", BackendChoice::Auto)]
    #[case("AUTO", BackendChoice::Auto)]
    #[case("reference", BackendChoice::Specific(Backend::Reference))]
    #[case("Accelerated", BackendChoice::Specific(Backend::Accelerated))]
    fn parses_backend_choice(#[case] input: &str, #[case] expected: BackendChoice) {
        assert_eq!(input.parse::<BackendChoice>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!("simd".parse::<BackendChoice>().is_err());
    }
}
