// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the hot paths of a wheel gesture.
//!
//! Measures:
//! - Day-count lookups across a century of months
//! - Settling a wheel after a drag
//! - Rebuilding the day list after a month change

use criterion::{criterion_group, criterion_main, Criterion};
use dob_picker::domain::calendar::{day_count, day_series};
use dob_picker::domain::wheel::ItemHeight;
use dob_picker::domain::DateSelection;
use dob_picker::domain::ReferenceDate;
use dob_picker::ui::scroll_picker::{Metrics, WheelState};
use std::hint::black_box;

fn bench_day_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar");

    group.bench_function("day_count_century", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for year in 1950..2050 {
                for month in 1..=12 {
                    total += day_count(black_box(year), black_box(month));
                }
            }
            black_box(total)
        });
    });

    group.bench_function("set_month_with_clamp", |b| {
        let Some(reference) = ReferenceDate::from_ymd(2023, 1, 31) else {
            return;
        };
        b.iter(|| {
            let mut selection = DateSelection::default();
            black_box(selection.set_month(black_box(4), &reference))
        });
    });

    group.finish();
}

fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel");
    let metrics = Metrics::new(ItemHeight::new(20.0), 200.0);

    group.bench_function("settle_year_wheel", |b| {
        let years: Vec<i32> = (1950..=2050).collect();
        let mut state = WheelState::new(years, metrics, Some(2000));
        state.mount();
        let mut step = 0.0f32;
        b.iter(|| {
            step = (step + 7.3) % 2000.0;
            black_box(state.settle(black_box(step)))
        });
    });

    group.bench_function("rebuild_day_list", |b| {
        let mut state = WheelState::new(day_series(31), metrics, Some(31));
        b.iter(|| {
            state.set_items(day_series(black_box(30)));
            state.set_items(day_series(black_box(31)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_day_count, bench_settle);
criterion_main!(benches);
