//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFile;
use crate::infrastructure::paths;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber writing to the plugin log file.
///
/// Level is taken from `config.trace_level`, defaulting to `"info"`.
/// An unparseable directive falls back to `"info"` as well.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if that fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(RotatingFile::new(paths::log_file_path()))
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
