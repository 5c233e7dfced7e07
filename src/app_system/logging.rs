use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Diagnostics go to stderr so that stdout
/// carries only command output.
pub fn setup_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
