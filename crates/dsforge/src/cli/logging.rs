//! Log output for the command line.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `dsforge_codegen=debug`.
pub const LOG_ENV: &str = "DSFORGE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber. `verbose` overrides the filter with `debug`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
