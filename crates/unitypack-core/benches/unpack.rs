//! Benchmarks for unitypack-core decoding and reconstruction.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use tempfile::TempDir;
use unitypack_core::UnpackConfig;
use unitypack_core::formats::ustar::parse_tar;
use unitypack_core::test_utils::PackageBuilder;
use unitypack_core::unpack_bytes;
use unitypack_core::unpack_package;

/// Creates a package with many small script assets.
fn create_many_assets_package(asset_count: usize) -> PackageBuilder {
    let mut builder = PackageBuilder::new();
    for i in 0..asset_count {
        let guid = format!("{i:032x}");
        builder = builder.add_asset(
            &guid,
            &format!("Assets/Scripts/Group{}/Script{i}.cs", i % 16),
            format!("class Script{i} {{}}").as_bytes(),
            format!("fileFormatVersion: 2\nguid: {guid}\n").as_bytes(),
        );
    }
    builder
}

/// Creates a package with a single large texture.
fn create_large_asset_package(size_bytes: usize) -> Vec<u8> {
    let data: Vec<u8> = (0..size_bytes).map(|i| (i % 251) as u8).collect();
    PackageBuilder::new()
        .add_asset("large", "Assets/Textures/Large.png", &data, b"guid: large")
        .build()
}

fn benchmark_parse_tar(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_tar");

    for asset_count in [10, 100, 1000] {
        let tar_data = create_many_assets_package(asset_count).build_tar();
        group.throughput(Throughput::Bytes(tar_data.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(asset_count),
            &tar_data,
            |b, data| {
                b.iter(|| parse_tar(data).unwrap());
            },
        );
    }

    group.finish();
}

fn benchmark_unpack_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack_bytes");

    for asset_count in [10, 100, 1000] {
        let package = create_many_assets_package(asset_count).build();
        group.throughput(Throughput::Elements(asset_count as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(asset_count),
            &package,
            |b, data| {
                b.iter(|| unpack_bytes(data).unwrap());
            },
        );
    }

    group.finish();
}

fn benchmark_unpack_package(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack_package");
    group.sample_size(20);

    for size_mb in [1, 10] {
        let size_bytes = size_mb * 1024 * 1024;
        let package = create_large_asset_package(size_bytes);
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("large.unitypackage");
        std::fs::write(&input, &package).unwrap();
        group.throughput(Throughput::Bytes(size_bytes as u64));

        group.bench_with_input(BenchmarkId::new("size_mb", size_mb), &input, |b, input| {
            b.iter(|| {
                let output = TempDir::new().unwrap();
                unpack_package(input, output.path(), &UnpackConfig::default()).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_tar,
    benchmark_unpack_bytes,
    benchmark_unpack_package
);
criterion_main!(benches);
