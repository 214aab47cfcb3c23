//! Viewport benchmark: Measure list windowing and full select frames.
//!
//! Target: < 20µs for a 10 000-option select frame

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flyprompt::{
    render_window, FixedGeometry, PromptView, SelectOption, SelectView, Theme, ViewportRequest,
    Window,
};

fn window_compute(c: &mut Criterion) {
    c.bench_function("window_compute_sweep_1000", |b| {
        b.iter(|| {
            (0..1000)
                .map(|cursor| Window::compute(1000, black_box(cursor), Some(10), 40).start)
                .sum::<usize>()
        })
    });
}

fn window_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_window_by_len");
    let items: Vec<String> = (0..10_000).map(|i| format!("option {i}")).collect();

    for len in [10, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let request = ViewportRequest {
                items: &items[..len],
                cursor: len / 2,
                max_items: None,
                row_budget: 20,
            };
            b.iter(|| {
                render_window(black_box(&request), "...", |item, active| {
                    if active {
                        format!("> {item}")
                    } else {
                        format!("  {item}")
                    }
                })
            })
        });
    }

    group.finish();
}

fn select_frame(c: &mut Criterion) {
    let theme = Theme::ansi(true);
    let geometry = FixedGeometry::new(120, 40);
    let options = (0..10_000)
        .map(|i| SelectOption::new(i).with_hint("hint"))
        .collect();
    let view = SelectView {
        cursor: 5_000,
        ..SelectView::new("Pick one", options)
    };

    c.bench_function("select_frame_10000", |b| {
        b.iter(|| black_box(&view).render(&theme, &geometry))
    });
}

criterion_group!(benches, window_compute, window_render, select_frame);
criterion_main!(benches);
