use tracing_subscriber::EnvFilter;

/// Initialize console logging for an embedder without its own subscriber.
///
/// Filter defaults to "info" unless RUST_LOG overrides it. Fails if a global
/// subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
