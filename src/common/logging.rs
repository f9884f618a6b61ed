//! Structured logging initialization via `tracing`.

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` (default `info`). Output goes to stderr so the
/// CSV written on stdout stays clean.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
