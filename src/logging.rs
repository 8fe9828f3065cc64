use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber for the `tracing` events this crate emits.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (e.g. `"debug"`) is
/// used. Returns `false` if a global subscriber was already installed.
pub fn init_tracing(default_level: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .try_init()
        .is_ok()
}
