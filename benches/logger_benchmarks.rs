//! Criterion benchmarks for rust_console_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_console_logger::prelude::*;
use std::sync::Arc;

/// Console that discards everything, so only formatting cost is measured
struct NullConsole;

impl Console for NullConsole {
    fn write(&mut self, message: &str, _: Option<ConsoleColor>, _: Option<ConsoleColor>) -> Result<()> {
        black_box(message);
        Ok(())
    }

    fn write_line(
        &mut self,
        message: &str,
        _: Option<ConsoleColor>,
        _: Option<ConsoleColor>,
    ) -> Result<()> {
        black_box(message);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

fn sample_event() -> ConsoleLogEvent {
    ConsoleLogEvent::new(
        LogLevel::Warning,
        "Bench.Component",
        42,
        "Request failed\nretrying with backoff",
    )
    .with_scopes(vec![Arc::from("RequestId:42"), Arc::from("Handler:orders")])
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let event = sample_event();
    let formats = [
        ("default", ConsoleLoggerFormat::Default),
        ("systemd", ConsoleLoggerFormat::Systemd),
    ];

    for (name, format) in formats {
        let formatter = ConsoleFormatter::new(format, FormatterConfig::new());
        group.bench_function(name, |b| {
            let mut console = NullConsole;
            b.iter(|| formatter.format(black_box(&event), &mut console));
        });
    }

    let timestamped = ConsoleFormatter::new(
        ConsoleLoggerFormat::Systemd,
        FormatterConfig::new().with_custom_timestamp("%Y-%m-%d %H:%M:%S "),
    );
    group.bench_function("systemd_timestamp", |b| {
        let mut console = NullConsole;
        b.iter(|| timestamped.format(black_box(&event), &mut console));
    });

    group.finish();
}

// ============================================================================
// Logging Path Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let provider = ConsoleLoggerProvider::builder()
        .options(ConsoleLoggerOptions::new().with_min_level(LogLevel::Information))
        .consoles(NullConsole, NullConsole)
        .build()
        .expect("Failed to build provider");
    let logger = provider.create_logger("Bench");

    group.bench_function("enqueue", |b| {
        b.iter(|| logger.info(black_box("Benchmark message")));
    });

    group.bench_function("filtered", |b| {
        b.iter(|| logger.debug(black_box("Filtered message")));
    });

    let _scope = logger.begin_scope("Tenant:acme");
    let scoped = ConsoleLoggerProvider::builder()
        .options(ConsoleLoggerOptions::new().with_include_scopes(true))
        .consoles(NullConsole, NullConsole)
        .scopes(logger.scopes())
        .build()
        .expect("Failed to build provider");
    let scoped_logger = scoped.create_logger("Bench");

    group.bench_function("enqueue_with_scopes", |b| {
        b.iter(|| scoped_logger.info(black_box("Scoped message")));
    });

    group.finish();
    provider.shutdown();
    scoped.shutdown();
}

criterion_group!(benches, bench_formatters, bench_logging);
criterion_main!(benches);
