use std::env;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Console logging goes to stderr so the report on stdout stays clean.
pub fn init_logger() -> impl Drop {
    let console_filter =
        EnvFilter::new(env::var("TRACING_LEVEL").unwrap_or_else(|_| "warn".to_string()));
    let file_filter =
        EnvFilter::new(env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

    let log_file_path =
        env::var("LOG_FILE_PATH").unwrap_or_else(|_| "./logs/same-same.log".to_string());

    let file_appender = tracing_appender::rolling::never("./", log_file_path);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .pretty()
                .with_file(false)
                .without_time()
                .with_ansi(true)
                .with_filter(console_filter),
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(file_filter),
        )
        .init();

    info!("Tracing is configured for stderr and file logging.");

    guard
}
