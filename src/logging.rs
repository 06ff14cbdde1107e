//! Global logger setup for the binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Render backends log every frame at `info`; keep them at `warn` unless the
/// user asks for them through `RUST_LOG`.
const QUIET_CRATES: [&str; 3] = ["wgpu", "naga", "winit"];

/// Builds the default `RUST_LOG`-style filter for the requested verbosity.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     stride::logging::default_filter(true),
///     "debug,wgpu=warn,naga=warn,winit=warn"
/// );
/// ```
#[must_use]
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut filter = level.to_string().to_lowercase();
    for krate in QUIET_CRATES {
        filter.push_str(&format!(",{krate}=warn"));
    }
    filter
}

/// Initializes the global logger.
///
/// When `verbose` is `true`, bake and bridge diagnostics at debug level are
/// printed. Otherwise only info level and above are shown. `RUST_LOG`
/// overrides both.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}
