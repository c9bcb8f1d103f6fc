use env_logger::{Builder, Env};
use log::LevelFilter;

/// Install the global logger.
///
/// `RUST_LOG` overrides the level, otherwise `verbose` shows debug messages
/// and the default shows info and above.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder =
        Builder::from_env(Env::default().default_filter_or(level.to_string()));

    // Fails only if a logger is already installed.
    let _ = builder.try_init();
}
