use tracing_subscriber::EnvFilter;

// json logs for log shippers, level from RUST_LOG (defaults to info)
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // ANSI color codes garble aggregated json logs.
        .with_ansi(false)
        .json()
        .init();
}
