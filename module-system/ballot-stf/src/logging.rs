use anyhow::anyhow;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `filter`. Fails if a global subscriber
/// is already installed.
pub fn init_logging(filter: &str) -> anyhow::Result<()> {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    let env_filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => builder.parse_lossy(directives),
        Err(_) => builder.parse_lossy(filter),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to install the log subscriber: {e}"))
}
