use tracing_subscriber::EnvFilter;

/// Configures tracing once at application startup for the entire process.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `info`,
/// `beer_stock::service=debug`) is used. An unparsable filter falls back to `info`.
pub fn setup_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
