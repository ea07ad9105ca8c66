// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast stack core.
//!
//! Measures:
//! - Adding a burst of toasts to a store
//! - Advancing the runtime through a full auto-dismiss cycle
//! - Offset accumulation over a measured stack
//! - Merging a config patch over the defaults

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::config::{BgColorPatch, ConfigPatch, Placement, ToastConfig};
use iced_toast::layout::{accumulate, HeightMap, ScreenMetrics};
use iced_toast::runtime::ToastRuntime;
use iced_toast::store::ToastStore;
use iced_toast::{ToastData, ToastId};
use std::hint::black_box;
use std::time::{Duration, Instant};

const BURST: usize = 50;

fn filled_store(count: usize) -> ToastStore {
    let mut store = ToastStore::new(None);
    for i in 0..count {
        store.add_toast(ToastData::info(format!("Toast {i}")));
    }
    store
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    group.bench_function("add_burst", |b| {
        b.iter(|| black_box(filled_store(BURST)));
    });

    group.bench_function("remove_newest_until_empty", |b| {
        b.iter_batched(
            || filled_store(BURST),
            |mut store| {
                while store.remove_toast(None).is_some() {}
                black_box(store)
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_runtime(c: &mut Criterion) {
    let mut group = c.benchmark_group("runtime");

    group.bench_function("full_dismiss_cycle", |b| {
        b.iter_batched(
            || {
                let start = Instant::now();
                (start, filled_store(BURST), ToastRuntime::new(start))
            },
            |(start, mut store, mut runtime)| {
                let mut now = start;
                while !store.is_empty() {
                    runtime.tick(&mut store, now);
                    now += Duration::from_millis(16);
                }
                black_box(runtime)
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("layout_frame", |b| {
        let start = Instant::now();
        let mut store = filled_store(BURST);
        let mut runtime = ToastRuntime::new(start);
        runtime.tick(&mut store, start + Duration::from_millis(100));
        let metrics = ScreenMetrics::new(375.0, 812.0);
        b.iter(|| black_box(runtime.layout(&store, black_box(&metrics))));
    });

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let ids: Vec<ToastId> = (0..BURST)
        .map(|i| ToastId::from_raw(format!("toast-{i}")))
        .collect();
    let mut heights = HeightMap::new();
    for (i, id) in ids.iter().enumerate().step_by(2) {
        heights.record(id, 48.0 + i as f32);
    }

    c.bench_function("accumulate_offsets", |b| {
        b.iter(|| black_box(accumulate(ids.iter(), black_box(20.0), 12.0, &heights)));
    });
}

fn bench_config(c: &mut Criterion) {
    let base = ToastConfig::default();
    let patch = ConfigPatch::default()
        .time_to_dismiss(5000)
        .placement(Placement::Top)
        .bg_color(BgColorPatch {
            success: Some("olive".to_string()),
            ..BgColorPatch::default()
        });

    c.bench_function("config_merge", |b| {
        b.iter(|| black_box(base.merged(black_box(&patch))));
    });
}

criterion_group!(benches, bench_store, bench_runtime, bench_layout, bench_config);
criterion_main!(benches);
