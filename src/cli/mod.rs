//! CLI module for repairflow
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::{Locale, Stage};

/// Repairflow - Work-order workflow checks for repair shops
#[derive(Parser, Debug)]
#[command(name = "repairflow")]
#[command(version)]
#[command(about = "Check and apply work-order stage transitions for a repair shop")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Locale for stage labels (th, en); overrides config.json
    #[arg(long, global = true)]
    pub locale: Option<Locale>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the workflow stages in pipeline order
    Stages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the stages reachable from a stage
    Next {
        /// Current stage (triage, quotation, execution, qa, closure, warranty)
        stage: Stage,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the prerequisites for moving a work order to a stage
    Check {
        /// Path to the work-order snapshot JSON
        snapshot: PathBuf,

        /// Target stage
        #[arg(long)]
        to: Stage,

        /// Source stage (defaults to the snapshot's current stage)
        #[arg(long)]
        from: Option<Stage>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show workflow progress as a stepper
    Stepper {
        /// Current stage
        #[arg(required_unless_present = "snapshot")]
        stage: Option<Stage>,

        /// Read the current stage from a work-order snapshot instead
        #[arg(long, conflicts_with = "stage")]
        snapshot: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a work order to another stage and print the status update
    Advance {
        /// Path to the work-order snapshot JSON
        snapshot: PathBuf,

        /// Target stage
        #[arg(long)]
        to: Stage,

        /// Note recorded with the status change
        #[arg(long)]
        note: Option<String>,

        /// Save the advanced snapshot back to the file
        #[arg(long)]
        write: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
