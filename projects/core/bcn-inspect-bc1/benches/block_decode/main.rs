use criterion::{criterion_group, criterion_main, Criterion};
use bcn_inspect_bc1::util::decode_bc1_block;
use bcn_inspect_bc1::Bc1Block;
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC1 Decode Blocks (BC1 -> RGBA8888)");

    // Set up the test data - 8MB of BC1 blocks
    let bc1_size = 8388608;
    let blocks: Vec<[u8; 8]> = (0..bc1_size / 8)
        .map(|block_idx: usize| {
            let mut block = [0u8; 8];
            // Alternate opaque and transparent blocks
            if block_idx % 2 == 0 {
                block[0..4].copy_from_slice(&[0x40, 0xF8, 0x00, 0xF8]);
            } else {
                block[0..4].copy_from_slice(&[0x00, 0xF8, 0x40, 0xF8]);
            }
            for (i, byte) in block[4..].iter_mut().enumerate() {
                *byte = ((block_idx * (i + 4)) % 255) as u8;
            }
            block
        })
        .collect();

    group.throughput(criterion::Throughput::Bytes(bc1_size as u64));

    group.bench_function("decode_bc1_block", |b| {
        b.iter(|| {
            for block in &blocks {
                black_box(decode_bc1_block(block));
            }
        })
    });

    group.bench_function("classify", |b| {
        b.iter(|| {
            let mut histogram = [0usize; 2];
            for block in &blocks {
                histogram[Bc1Block::from_bytes(block).kind().bucket()] += 1;
            }
            black_box(histogram)
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
