use bcn_inspect_bc7::util::decode_bc7_block;
use bcn_inspect_bc7::Bc7Block;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC7 Decode Blocks (BC7 -> RGBA8888)");

    // Set up the test data - 8MB of BC7 blocks cycling through modes 0 to 7
    let bc7_size = 8388608;
    let blocks: Vec<[u8; 16]> = (0..bc7_size / 16)
        .map(|block_idx: usize| {
            let mut block = [0u8; 16];
            for (i, byte) in block.iter_mut().enumerate() {
                *byte = ((block_idx * (i + 3)) % 253) as u8;
            }
            let mode = block_idx % 8;
            block[0] = (((block[0] as u16) << (mode + 1)) as u8) | (1 << mode);
            block
        })
        .collect();

    group.throughput(criterion::Throughput::Bytes(bc7_size as u64));

    group.bench_function("decode_bc7_block", |b| {
        b.iter(|| {
            for block in &blocks {
                let _ = black_box(decode_bc7_block(block));
            }
        })
    });

    group.bench_function("classify", |b| {
        b.iter(|| {
            let mut histogram = [0usize; 9];
            for block in &blocks {
                match Bc7Block::from_bytes(block) {
                    Ok(parsed) => histogram[parsed.mode.bucket()] += 1,
                    Err(_) => histogram[8] += 1,
                }
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
