use bytesize::ByteSize;
use core::fmt;
use core::time::Duration;

/// Throughput in bytes per second, displayed with a `/s` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Throughput(pub ByteSize);

impl Throughput {
    /// Creates a new [`Throughput`] from bytes per second.
    pub fn from_bytes_per_sec(bytes_per_sec: u64) -> Self {
        Self(ByteSize(bytes_per_sec))
    }

    /// Throughput of processing `bytes` in `elapsed`.
    ///
    /// Durations too short to measure are treated as one nanosecond.
    pub fn from_duration(bytes: u64, elapsed: Duration) -> Self {
        let nanos = elapsed.as_nanos().max(1);
        let per_sec = (bytes as u128 * 1_000_000_000) / nanos;
        Self::from_bytes_per_sec(per_sec.min(u64::MAX as u128) as u64)
    }

    /// Returns the raw bytes per second value.
    pub fn bytes_per_sec(&self) -> u64 {
        self.0 .0
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.0)
    }
}
