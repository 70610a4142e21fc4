//! Stage transition logic
//!
//! Pure functions for applying a stage change to a work-order snapshot.

use crate::schemas::{Stage, WorkOrderSnapshot};

use super::validation::check_prerequisites;

/// Result of a stage transition attempt
#[derive(Debug)]
pub enum TransitionResult {
    /// Transition approved
    Success {
        /// Copy of the snapshot at the target stage
        next: WorkOrderSnapshot,
    },
    /// Transition refused
    Rejected {
        /// Every unmet condition
        reasons: Vec<String>,
    },
}

impl TransitionResult {
    /// Check if the transition was successful
    pub fn is_success(&self) -> bool {
        matches!(self, TransitionResult::Success { .. })
    }

    /// Check if the transition was refused
    pub fn is_rejected(&self) -> bool {
        matches!(self, TransitionResult::Rejected { .. })
    }

    /// Get the advanced snapshot if the transition was successful
    pub fn snapshot(self) -> Option<WorkOrderSnapshot> {
        match self {
            TransitionResult::Success { next } => Some(next),
            TransitionResult::Rejected { .. } => None,
        }
    }

    /// Get the rejection reasons (empty on success)
    pub fn reasons(&self) -> &[String] {
        match self {
            TransitionResult::Success { .. } => &[],
            TransitionResult::Rejected { reasons } => reasons,
        }
    }
}

/// Pure function that moves a snapshot to `target`.
///
/// The input is never mutated. On success the returned snapshot is a copy
/// with `current_stage` set to `target`; the backend still owns the real
/// work order and may refuse the change.
pub fn apply_stage_transition(snapshot: &WorkOrderSnapshot, target: Stage) -> TransitionResult {
    let check = check_prerequisites(snapshot.current_stage, target, snapshot);
    if !check.allowed {
        return TransitionResult::Rejected {
            reasons: check.reasons,
        };
    }

    TransitionResult::Success {
        next: snapshot.clone().with_stage(target),
    }
}
