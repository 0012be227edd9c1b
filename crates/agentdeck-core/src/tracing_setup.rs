use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing for the application.
///
/// The TUI owns the terminal, so nothing is ever written to stdout/stderr
/// while the app runs. Set `AGENTDECK_LOG_FILE` to a path to capture an
/// env-filtered debug log there instead (RUST_LOG controls the filter).
pub fn init_tracing() {
    let registry = tracing_subscriber::registry();

    match std::env::var("AGENTDECK_LOG_FILE") {
        Ok(log_path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("Failed to open log file");

            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

            let file_layer = fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_filter(filter);

            registry.with(file_layer).init();
            eprintln!("File logging enabled: {}", log_path);
        }
        Err(_) => {
            // No layers: spans and events are recorded nowhere, but
            // `tracing` macros stay cheap no-ops with a subscriber installed.
            registry.init();
        }
    }
}
