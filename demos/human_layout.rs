//! Human-readable console layout example
//!
//! Demonstrates colored multi-line output, scopes, stderr routing and
//! error descriptions.
//!
//! Run with: cargo run --example human_layout

use rust_console_logger::prelude::*;
use rust_console_logger::info;
use std::thread;

fn main() -> Result<()> {
    println!("=== Rust Console Logger - Human Layout Example ===\n");

    let provider = ConsoleLoggerProvider::new(
        ConsoleLoggerOptions::new()
            .with_timestamp_format("%H:%M:%S ")
            .with_include_scopes(true)
            .with_stderr_threshold(LogLevel::Error),
    )?;
    let logger = provider.create_logger("Demo.Orders");

    // 1. Every level, each with its colored token
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message (stderr)");
    logger.critical("This is a critical message (stderr)");

    // 2. Continuation lines stay under the message column
    logger.info("First line\nsecond line\nthird line");

    // 3. Scopes belong to the thread that pushed them
    let _request = logger.begin_scope("RequestId:42");
    info!(logger, "Checkout started for {} items", 3);
    let worker = logger.clone();
    thread::spawn(move || worker.info("Worker thread has no request scope"))
        .join()
        .ok();

    // 4. Errors are logged with their full source chain
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "inventory.json missing");
    logger.log_error(LogLevel::Error, 500, &err, "Checkout failed");

    provider.shutdown();
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
