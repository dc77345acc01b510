use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;

/// Install the global logger described by `config`
///
/// Does nothing when logging is disabled. Fails if a logger is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.level_filter()?);

    let dispatch = if config.to_file {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch.chain(file)
    } else {
        dispatch.chain(std::io::stderr())
    };

    dispatch.apply().context("Logger already initialized")?;
    Ok(())
}

/// Path of the log file used when `to_file` is set
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
}
