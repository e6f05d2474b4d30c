use tracing_subscriber::EnvFilter;

/// Install a test subscriber so lenient-mode warnings are visible when
/// running with `RUST_LOG`. Safe to call from every test; only the first
/// call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
