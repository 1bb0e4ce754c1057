use tracing_subscriber::EnvFilter;

/// Overrides the log filter, e.g. `SHOPSMART_LOG=shopsmart=trace`.
pub const LOG_ENV: &str = "SHOPSMART_LOG";

/// Install the stderr subscriber. Default level is `warn`, `debug` with `-v`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
