use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter, e.g. `TRAMPGEN_LOG=debug`.
pub const LOG_ENV: &str = "TRAMPGEN_LOG";

/// Install a stderr subscriber when `TRAMPGEN_LOG` is set. Does nothing
/// otherwise, and is safe to call more than once.
pub fn init() {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!("tracing initialized");
        }
    }
}
