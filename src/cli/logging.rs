use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over the
/// verbosity flag. Calling this twice keeps the first subscriber.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "innkeep=debug" } else { "innkeep=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
