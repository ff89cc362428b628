use base94_codec::{max_encoded_len, Backend};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

/// Pseudo random bytes; radix conversion speed does not depend on content, only on length.
fn generate_input(len: usize) -> Vec<u8> {
    let mut state = 0x9E37_79B9_u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("base94 encode (bytes -> symbols)");

    // Conversion is quadratic, so stay in the sizes the codec is meant for.
    for size in [64, 1024, 8192] {
        let input = generate_input(size);
        let mut output = vec![0u8; max_encoded_len(size)];
        group.throughput(Throughput::Bytes(size as u64));

        for &backend in Backend::all_values() {
            let Some(codec) = backend.codec() else {
                continue;
            };

            group.bench_with_input(BenchmarkId::new(backend.name(), size), &input, |b, input| {
                b.iter(|| codec.encode_into(input, &mut output).unwrap())
            });
        }
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
