//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{RepairflowError, Result};
use crate::schemas::{Config, Stage, WorkOrderSnapshot};

use super::paths::get_config_path;

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file is not valid JSON or does not match the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    tracing::debug!(path = %path.display(), "reading json");
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RepairflowError::FileNotFound(path.display().to_string())
        } else {
            RepairflowError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        RepairflowError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Writes to a temp file and renames it into place.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| RepairflowError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;
    tracing::debug!(path = %path.display(), "wrote json");

    Ok(())
}

/// Read the config.json file for a project, or defaults if it doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path).map_err(|e| match e {
        RepairflowError::InvalidJson(msg) => RepairflowError::ConfigError(msg),
        other => other,
    })
}

/// Read a work-order snapshot file.
pub fn read_snapshot(path: &Path) -> Result<WorkOrderSnapshot> {
    read_json(path)
}

/// Write a work-order snapshot file.
pub fn write_snapshot(path: &Path, snapshot: &WorkOrderSnapshot) -> Result<()> {
    write_json(path, snapshot)
}

/// Record a new stage in a work-order file.
///
/// Only `currentStage` changes; every other key in the file is kept as is.
pub fn write_snapshot_stage(path: &Path, stage: Stage) -> Result<()> {
    let mut document: serde_json::Value = read_json(path)?;
    let object = document.as_object_mut().ok_or_else(|| {
        RepairflowError::InvalidJson(format!(
            "Work order in {} is not a JSON object",
            path.display()
        ))
    })?;
    object.insert(
        "currentStage".to_string(),
        serde_json::Value::String(stage.as_str().to_string()),
    );
    write_json(path, &document)
}
