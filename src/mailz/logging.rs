use env_logger::{Builder, Env};

/// Logs go to stderr so they never mix with command output.
/// `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    // A second init (tests driving the CLI in-process) is harmless
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
