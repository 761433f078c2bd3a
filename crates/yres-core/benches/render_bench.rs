//! Benchmarks for card rendering and flip dispatch
//!
//! Run with: cargo bench -p yres-core
//!
//! Covers:
//! - Feed validation
//! - Full-grid markup rendering
//! - Toggle dispatch through a mounted page

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;
use yres_core::{
    render_grid, validate_records, CardOptions, Control, EventTarget, Page, ProgramRecord,
    UiEvent,
};

fn feed_values(count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|i| {
            json!({
                "id": format!("program-{}", i),
                "title": format!("Program {}", i),
                "category": "stem",
                "ageGrade": "Grades 5-8",
                "duration": "8 weeks",
                "location": "Markham",
                "dateRange": "Jan - Mar",
                "price": "$120",
                "tags": ["coding", "teams", "lego", "arduino"],
                "spotsLeft": i % 7,
                "details": ["Hands-on builds", "Final showcase"],
                "shortBlurb": "Build and code robots.",
                "thumbnail": "img/robotics.jpg",
                "alt": "Students with a robot",
                "ctaHref": "https://example.org/register",
                "ctaText": "Register"
            })
        })
        .collect()
}

fn records(count: usize) -> Vec<ProgramRecord> {
    validate_records(feed_values(count)).records
}

// ============================================================================
// Feed Benchmarks
// ============================================================================

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_records");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || feed_values(size),
                |values| black_box(validate_records(values)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// ============================================================================
// Render Benchmarks
// ============================================================================

fn bench_render_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_grid");

    for size in [10, 100, 1000] {
        let mut page = Page::new();
        page.container_mut("grid")
            .initialize(records(size), CardOptions::default());

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &page, |b, page| {
            b.iter(|| black_box(render_grid(page.container("grid").unwrap())))
        });
    }

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_toggle_dispatch(c: &mut Criterion) {
    let mut page = Page::new();
    page.container_mut("grid")
        .initialize(records(100), CardOptions::default());

    let mut index = 0usize;
    c.bench_function("toggle_across_100_cards", |b| {
        b.iter(|| {
            index = (index + 1) % 100;
            let event = UiEvent::Click {
                target: Some(EventTarget::control(
                    "grid",
                    format!("program-{}", index),
                    Control::Toggle,
                )),
            };
            black_box(page.dispatch(event))
        })
    });
}

criterion_group!(benches, bench_validate, bench_render_grid, bench_toggle_dispatch);
criterion_main!(benches);
