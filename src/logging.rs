// logging.rs

use anyhow::Context as _;
use tracing::Subscriber;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::Settings;

pub const LOG_FILE: &str = "application.log";

fn filter(settings: &Settings, default: &str) -> EnvFilter {
    settings
        .log_filter
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Console shows warnings and up on stderr; `<log_dir>/application.log`
/// gets everything from debug. `RUST_LOG` replaces both defaults.
pub fn build_subscriber(settings: &Settings) -> anyhow::Result<impl Subscriber + Send + Sync + 'static> {
    let file = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(&settings.log_dir)
        .with_context(|| format!("failed to open log file in {}", settings.log_dir.display()))?;

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter(settings, "warn"));
    let file = fmt::layer()
        .with_ansi(false)
        .with_writer(file)
        .with_filter(filter(settings, "debug"));

    Ok(tracing_subscriber::registry().with(console).with(file))
}

pub fn init_logging(settings: &Settings) -> anyhow::Result<()> {
    if settings.test_mode {
        return Ok(());
    }

    build_subscriber(settings)?
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    tracing::info!(environment = %settings.environment, "logging configured");
    Ok(())
}
