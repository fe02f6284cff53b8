use criterion::{criterion_group, criterion_main, Criterion};
use bcn_inspect_bc4::util::{decode_bc4_block, decode_bc5_block};
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC4/BC5 Decode Blocks (-> RGBA f32)");

    // Set up the test data - 8MB of blocks
    let size = 8388608;
    let bytes: Vec<u8> = (0..size)
        .map(|i: usize| ((i * 7 + (i >> 8)) % 251) as u8)
        .collect();

    group.throughput(criterion::Throughput::Bytes(size as u64));

    group.bench_function("decode_bc4_block (unsigned)", |b| {
        b.iter(|| {
            for chunk in bytes.chunks_exact(8) {
                let block: &[u8; 8] = chunk.try_into().unwrap();
                black_box(decode_bc4_block::<u8>(block));
            }
        })
    });

    group.bench_function("decode_bc4_block (signed)", |b| {
        b.iter(|| {
            for chunk in bytes.chunks_exact(8) {
                let block: &[u8; 8] = chunk.try_into().unwrap();
                black_box(decode_bc4_block::<i8>(block));
            }
        })
    });

    group.bench_function("decode_bc5_block (unsigned)", |b| {
        b.iter(|| {
            for chunk in bytes.chunks_exact(16) {
                let block: &[u8; 16] = chunk.try_into().unwrap();
                black_box(decode_bc5_block::<u8>(block));
            }
        })
    });

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
