use bcn_inspect_api::{analyze_bc, analyze_image};
use bcn_inspect_common::format::TextureFormat;
use bcn_inspect_common::image::Image;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 1024;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Analyze 1024x1024");

    let formats = [
        TextureFormat::BC1_UNORM,
        TextureFormat::BC3_UNORM,
        TextureFormat::BC5_UNORM,
        TextureFormat::BC6H_UF16,
        TextureFormat::BC7_UNORM,
    ];

    for format in formats {
        let size = format.default_row_pitch(WIDTH) * format.row_count(HEIGHT);
        let data: Vec<u8> = (0..size).map(|i| ((i * 7) % 251) as u8 | 1).collect();
        let image = Image::new(format, WIDTH, HEIGHT, &data);
        group.throughput(criterion::Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("analyze_bc", format), &image, |b, image| {
            b.iter(|| black_box(analyze_bc(black_box(image))))
        });
        group.bench_with_input(BenchmarkId::new("analyze_image", format), &image, |b, image| {
            b.iter(|| black_box(analyze_image(black_box(image))))
        });
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
