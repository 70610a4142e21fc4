//! File system utilities for repairflow
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{
    read_config, read_json, read_snapshot, write_json, write_snapshot, write_snapshot_stage,
};
pub use paths::{get_config_path, get_repairflow_dir, resolve_cwd, resolve_path};
