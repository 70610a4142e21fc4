//! Repairflow - Work-order workflow engine for repair-shop management
//!
//! This library provides:
//! - Schema definitions for stages, work-order snapshots and status updates
//! - The workflow engine: stage order, transition graph and prerequisites
//! - Stepper classification and localized stage labels
//! - File system utilities for reading/writing JSON
//! - The `repairflow` command-line surface

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod locale;
pub mod schemas;
pub mod stepper;

// Re-export commonly used types
pub use errors::{RepairflowError, Result};
pub use schemas::{Stage, StatusUpdateRequest, WorkOrderSnapshot};
