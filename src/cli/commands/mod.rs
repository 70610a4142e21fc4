//! CLI command implementations

pub mod advance;
pub mod check;
pub mod next;
pub mod stages;
pub mod stepper;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::load_config;
use crate::errors::{RepairflowError, Result};
use crate::fs::{resolve_cwd, resolve_path};
use crate::schemas::{Config, Locale};

/// Resolved working directory and configuration shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub cwd: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// Resolve the working directory and load its configuration
    pub fn load(cwd: Option<&Path>, locale: Option<Locale>) -> Result<Self> {
        let cwd = resolve_cwd(cwd);
        let config = load_config(&cwd, locale)?;
        Ok(CommandContext { cwd, config })
    }

    /// Resolve a path argument against the working directory
    pub fn path(&self, path: &Path) -> PathBuf {
        resolve_path(&self.cwd, path)
    }
}

/// Pretty-print a value as JSON
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| RepairflowError::InvalidJson(e.to_string()))
}
