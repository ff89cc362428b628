use base94_codec::{max_decoded_len, max_encoded_len, Backend};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

/// Valid symbols for `size` pseudo random bytes, produced by the reference encoder.
fn generate_symbols(size: usize) -> Vec<u8> {
    let mut state = 0x85EB_CA6B_u32;
    let input: Vec<u8> = (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();

    let mut symbols = vec![0u8; max_encoded_len(size)];
    let written = base94_codec::reference::encode(&input, &mut symbols);
    symbols.truncate(written);
    symbols
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("base94 decode (symbols -> bytes)");

    for size in [64, 1024, 8192] {
        let symbols = generate_symbols(size);
        let mut output = vec![0u8; max_decoded_len(&symbols)];
        group.throughput(Throughput::Bytes(size as u64));

        for &backend in Backend::all_values() {
            let Some(codec) = backend.codec() else {
                continue;
            };

            group.bench_with_input(
                BenchmarkId::new(backend.name(), size),
                &symbols,
                |b, symbols| b.iter(|| codec.decode_into(symbols, &mut output).unwrap()),
            );
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
