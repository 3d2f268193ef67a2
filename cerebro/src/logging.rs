use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with file-based logging.
/// Logs go to <config_dir>/cerebro/logs/cerebro-YYYY-MM-DD-HH-MM-SS.log since the TUI owns stdout.
pub fn init_logging() -> Result<PathBuf> {
    let logs_dir = dirs::config_dir()
        .ok_or(anyhow::anyhow!("Could not find config directory"))?
        .join("cerebro")
        .join("logs");
    init_logging_in(&logs_dir)
}

pub fn init_logging_in(logs_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(logs_dir)?;

    let log_filename = log_file_name(Local::now());
    let log_path = logs_dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    // The writer flushes on drop; keep it for the whole run
    std::mem::forget(guard);

    Ok(log_path)
}

fn log_file_name(now: chrono::DateTime<Local>) -> String {
    format!("cerebro-{}.log", now.format("%Y-%m-%d-%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn file_name_carries_timestamp() {
        let now = Local.with_ymd_and_hms(2025, 3, 14, 9, 5, 7).unwrap();
        assert_eq!(log_file_name(now), "cerebro-2025-03-14-09-05-07.log");
    }
}
