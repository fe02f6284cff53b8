use bcn_inspect_bc6h::util::decode_bc6h_block;
use bcn_inspect_bc6h::{Bc6hBlock, Bc6hVariant};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

// Valid prefixes only, so every block decodes.
const PREFIXES: [u8; 14] = [
    0x00, 0x01, 0x02, 0x06, 0x0A, 0x0E, 0x12, 0x16, 0x1A, 0x1E, 0x03, 0x07, 0x0B, 0x0F,
];

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC6H Decode Blocks (BC6H -> RGBA F32)");

    // Set up the test data - 8MB of BC6H blocks cycling through all modes
    let bc6h_size = 8388608;
    let blocks: Vec<[u8; 16]> = (0..bc6h_size / 16)
        .map(|block_idx: usize| {
            let mut block = [0u8; 16];
            for (i, byte) in block.iter_mut().enumerate() {
                *byte = ((block_idx * (i + 7)) % 251) as u8;
            }
            block[0] = (block[0] & 0xE0) | PREFIXES[block_idx % PREFIXES.len()];
            block
        })
        .collect();

    group.throughput(criterion::Throughput::Bytes(bc6h_size as u64));

    for variant in Bc6hVariant::all_values() {
        group.bench_function(format!("decode_bc6h_block {variant:?}"), |b| {
            b.iter(|| {
                for block in &blocks {
                    let _ = black_box(decode_bc6h_block(block, *variant));
                }
            })
        });
    }

    group.bench_function("parse", |b| {
        b.iter(|| {
            for block in &blocks {
                let _ = black_box(Bc6hBlock::from_bytes(block));
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
