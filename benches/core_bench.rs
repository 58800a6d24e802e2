use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use indexmap::IndexSet;
use qs_takeoff_editor::core::snapping::snap_to_feature_point;
use qs_takeoff_editor::{build_report, SessionFlags, Volume, VolumeRegistry};
use std::hint::black_box;

fn build_synthetic_registry(volume_count: usize) -> VolumeRegistry {
    let mut registry = VolumeRegistry::new();

    for index in 0..volume_count {
        let column = (index % 100) as f32;
        let row = (index / 100) as f32;
        let id = registry.allocate_id();
        registry.add(Volume::new(
            id,
            400.0,
            300.0,
            2700.0,
            0.0,
            column * 1000.0,
            row * 1000.0,
        ));
    }

    registry
}

fn build_query_points(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 100_000) as f32 + 0.37;
            let z = ((i * 73) % 100_000) as f32 + 0.63;
            Vec3::new(x, 0.0, z)
        })
        .collect()
}

fn bench_feature_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_snap");

    for &volume_count in &[100usize, 1_000usize] {
        let registry = build_synthetic_registry(volume_count);
        let query_points = build_query_points(256);

        group.bench_with_input(
            BenchmarkId::new("snap_batch", volume_count),
            &registry,
            |b, reg| {
                b.iter(|| {
                    let mut snapped = 0usize;
                    for point in &query_points {
                        let result =
                            snap_to_feature_point(reg, black_box(point.x), black_box(point.z), 150.0);
                        if result.snapped {
                            snapped += 1;
                        }
                    }
                    black_box(snapped)
                })
            },
        );
    }

    group.finish();
}

fn bench_report_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantity_report");

    for &volume_count in &[100usize, 1_000usize] {
        let registry = build_synthetic_registry(volume_count);
        let selected: IndexSet<u64> = (1..=volume_count as u64 / 2).collect();

        group.bench_with_input(
            BenchmarkId::new("build", volume_count),
            &registry,
            |b, reg| {
                b.iter(|| {
                    let report =
                        build_report(black_box(reg), &selected, SessionFlags::default());
                    black_box(report.totals_all.volume)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_feature_snap, bench_report_build);
criterion_main!(benches);
