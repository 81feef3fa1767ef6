use std::env;

use anyhow::anyhow;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _};

const LOG_LEVEL_VAR: &str = "CLASSEMENT_LOG_LEVEL";

/// Install the global subscriber. Level and per-module directives come from
/// `CLASSEMENT_LOG_LEVEL` (default `info`); `off` disables output.
pub fn init_logger() -> anyhow::Result<()> {
    let level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "info".to_string());
    let env_filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_level(true)
            .with_target(true),
    );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to set global tracing subscriber: {e}"))?;

    tracing::debug!("logging at {level}");
    Ok(())
}
