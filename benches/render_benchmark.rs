//! Performance benchmarks for drawing the task list and computing statistics
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::{backend::TestBackend, Terminal};
use taskdeck::app::App;
use taskdeck::config::Preferences;
use taskdeck::stats::{compute_stats, detailed_report};
use taskdeck::ui;

/// An App holding `count` tasks of mixed priority, every third one completed.
fn app_with_tasks(count: usize) -> App {
    let prefs = Preferences::default()
        .with_seed_samples(false)
        .with_max_tasks(count.max(1));
    let mut app = App::new(prefs);
    for i in 0..count {
        let priority = (i % 5) as i64 + 1;
        let id = app
            .manager
            .add_with_priority(&format!("Benchmark task number {}", i), priority)
            .unwrap();
        if i % 3 == 0 {
            app.manager.toggle_completion(id).unwrap();
        }
    }
    app.drain_messages();
    app.counters.finish();
    app
}

/// Benchmark a full-screen draw
fn bench_full_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_render");

    for size in [0, 10, 50, 500].iter() {
        let mut app = app_with_tasks(*size);
        app.show_stats = true;
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(format!("{}_tasks", size)), &app, |b, app| {
            b.iter(|| {
                terminal.draw(|f| ui::render(f, black_box(app))).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark the statistics engine on its own
fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");

    for size in [10, 500, 5000].iter() {
        let app = app_with_tasks(*size);
        let tasks = app.manager.tasks();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("compute_stats", size), tasks, |b, tasks| {
            b.iter(|| black_box(compute_stats(black_box(tasks))));
        });
        group.bench_with_input(BenchmarkId::new("detailed_report", size), tasks, |b, tasks| {
            b.iter(|| black_box(detailed_report(black_box(tasks))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_render, bench_stats);
criterion_main!(benches);
