use core::time::Duration;
use criterion::{criterion_group, criterion_main, Criterion};
use bcn_inspect_common::bits::BitReader;
use bcn_inspect_common::index::BlockIndices;
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Index Read");
    const NUM_BLOCKS: usize = 524_288; // 8MiB of 16 byte blocks

    // Pseudo random block contents, fixed seed
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    let blocks: Vec<[u8; 16]> = (0..NUM_BLOCKS)
        .map(|_| {
            let mut block = [0u8; 16];
            for chunk in block.chunks_exact_mut(8) {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                chunk.copy_from_slice(&state.to_le_bytes());
            }
            block
        })
        .collect();

    group.throughput(criterion::Throughput::Bytes((NUM_BLOCKS * 16) as u64));
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(20));

    group.bench_function("packed 3bpp", |b| {
        b.iter(|| {
            for block in &blocks {
                let packed = u64::from_le_bytes([
                    block[2], block[3], block[4], block[5], block[6], block[7], 0, 0,
                ]);
                black_box(BlockIndices::from_packed(packed, 3));
            }
        })
    });

    group.bench_function("2 subsets with fix-ups", |b| {
        b.iter(|| {
            for (shape, block) in blocks.iter().enumerate() {
                let mut reader = BitReader::new(block);
                reader.skip(82);
                black_box(BlockIndices::read_with_fixups(&mut reader, 3, 1, shape % 32));
            }
        })
    });

    group.bench_function("3 subsets with fix-ups", |b| {
        b.iter(|| {
            for (shape, block) in blocks.iter().enumerate() {
                let mut reader = BitReader::new(block);
                reader.skip(83);
                black_box(BlockIndices::read_with_fixups(&mut reader, 3, 2, shape % 16));
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
