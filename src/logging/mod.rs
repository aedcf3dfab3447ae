pub mod config;

use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub use config::{LogConfig, LogFormat};

/// Initialize console logging, plus a JSON log file when a directory is set
///
/// Console output goes to stderr so normalized text on stdout stays clean.
/// The file is rotated daily by `tracing-appender`. RUST_LOG, when set,
/// overrides the console filter.
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.console_log_level));

    let console_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed(),
    };

    let file_layer = match &config.log_dir {
        Some(log_dir) => {
            fs::create_dir_all(log_dir)?;
            let appender = tracing_appender::rolling::daily(log_dir, "normalizer.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);

            // Dropping the guard would close the log file
            std::mem::forget(guard);

            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_filter(EnvFilter::new(&config.file_log_level)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    if let Some(log_dir) = &config.log_dir {
        tracing::info!("Logging to {}", log_dir.display());
    }

    Ok(())
}

/// Log platform information on startup
pub fn log_platform_info() {
    tracing::debug!(
        platform = std::env::consts::OS,
        architecture = std::env::consts::ARCH,
        version = env!("CARGO_PKG_VERSION"),
        "Normalizer starting"
    );
}
