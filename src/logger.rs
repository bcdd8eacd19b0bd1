use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the tracing subscriber.
///
/// The level is controlled through `RUST_LOG`, defaulting to `info`.
///
/// - RUST_LOG=debug mctest selfcheck
/// - RUST_LOG=mctest::runner=trace mctest selfcheck
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logger initialized");
    }
}
