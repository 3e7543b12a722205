// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_infinite_scroll::{
    InfiniteScroll, InfiniteScrollConfig, ScrollAxis, SizingConfig, build_padded,
};

fn bench_build_padded(c: &mut Criterion) {
    let mut group = c.benchmark_group("infinite_scroll/build_padded");

    // Padding is bounded by the viewport, so cost should track `len` once
    // `len` dominates `2 * padding`.
    for len in [8usize, 128, 2_048, 32_768] {
        let data: Vec<u64> = (0..(len as u64)).collect();
        group.throughput(Throughput::Elements(len as u64));

        for viewport in [400.0_f64, 4_000.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("viewport_{viewport}"), len),
                &data,
                |b, data| {
                    b.iter(|| black_box(build_padded(black_box(data), 40.0, viewport)));
                },
            );
        }
    }

    group.finish();
}

fn bench_scroll_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("infinite_scroll/on_scroll_changed");

    let config = InfiniteScrollConfig::new(
        ScrollAxis::Horizontal,
        SizingConfig::FixedExtent {
            extent: 40.0,
            spacing: 4.0,
        },
    );
    let offsets: Vec<f64> = (0..10_000).map(|i| f64::from(i) * 3.5).collect();
    group.throughput(Throughput::Elements(offsets.len() as u64));

    group.bench_function("fling_forward", |b| {
        let data: Vec<u32> = (0..64).collect();
        let mut scroll = InfiniteScroll::new(data, Size::new(800.0, 120.0), config)
            .expect("bench configuration is valid");
        b.iter(|| {
            let mut offset = scroll.scroll_offset();
            for delta in &offsets {
                offset += delta.min(12.0);
                if let Some(corrected) = scroll.on_scroll_changed(black_box(offset)) {
                    offset = corrected;
                }
            }
            black_box(offset)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_build_padded, bench_scroll_stream);
criterion_main!(benches);
