//! systemd/journald console layout example
//!
//! Each event becomes one `<pri>`-prefixed line, so journald records the
//! right priority. Try: cargo run --example systemd_layout | systemd-cat
//!
//! Run with: cargo run --example systemd_layout

use rust_console_logger::prelude::*;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    let options = ConsoleLoggerOptions::from_json(
        r#"{
            "format": "systemd",
            "include_scopes": true,
            "category_levels": { "Demo.Noisy": "Warning" }
        }"#,
    )?;
    let provider = Arc::new(ConsoleLoggerProvider::new(options)?);

    // Multi-line text is flattened onto one line
    provider.submit(
        LogLevel::Information,
        "Demo.Service",
        10,
        None,
        "Service started\nlistening on :8080",
        |s, _| s.to_string(),
    );

    // Filtered by the category level; the renderer never runs
    provider
        .create_logger("Demo.Noisy.Cache")
        .debug("cache hit");

    // Concurrent producers each keep their own scopes
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let provider = Arc::clone(&provider);
            thread::spawn(move || {
                let logger = provider.create_logger("Demo.Worker");
                let _job = logger.begin_scope(format!("Job:{}", worker));
                for step in 0..3 {
                    logger.info(format!("step {}", step));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().ok();
    }

    provider.shutdown();
    let metrics = provider.metrics();
    eprintln!(
        "written={} failures={} backpressure={}",
        metrics.events_written(),
        metrics.write_failures(),
        metrics.backpressure_events()
    );
    Ok(())
}
