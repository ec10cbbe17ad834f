//! JSON files for review logs and scheduler configuration.

use crate::error::Result;
use crate::models::{ReviewLogEntry, SchedulerConfig};
use log::info;
use std::fs;
use std::path::Path;

/// Writes review log entries to `path` as a pretty-printed JSON array.
pub fn export_log_to_path(entries: &[ReviewLogEntry], path: impl AsRef<Path>) -> Result<()> {
    let json_string = serde_json::to_string_pretty(entries)?;
    fs::write(path.as_ref(), json_string)?;
    info!(
        "event=log_exported entries={} path={}",
        entries.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Reads review log entries previously written by `export_log_to_path`.
pub fn import_log(path: impl AsRef<Path>) -> Result<Vec<ReviewLogEntry>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn export_config_to_path(config: &SchedulerConfig, path: impl AsRef<Path>) -> Result<()> {
    let json_string = serde_json::to_string_pretty(config)?;
    fs::write(path, json_string)?;
    Ok(())
}

/// Loads and validates a scheduler config. Missing fields take their defaults.
pub fn import_config(path: impl AsRef<Path>) -> Result<SchedulerConfig> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config = SchedulerConfig::from_json_str(&contents)?;
    info!("event=config_loaded path={}", path.as_ref().display());
    Ok(config)
}
