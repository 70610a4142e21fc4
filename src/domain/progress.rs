//! Stage-relative classification for stepper rendering

use serde::{Deserialize, Serialize};

use crate::schemas::Stage;

use super::states::index_of;

/// Where a stage sits relative to a work order's current stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Current,
    Future,
}

pub fn is_current(stage: Stage, current: Stage) -> bool {
    stage == current
}

pub fn is_completed(stage: Stage, current: Stage) -> bool {
    index_of(stage) < index_of(current)
}

pub fn is_future(stage: Stage, current: Stage) -> bool {
    index_of(stage) > index_of(current)
}

/// Fold the three predicates into a single value.
pub fn classify(stage: Stage, current: Stage) -> StepState {
    match index_of(stage).cmp(&index_of(current)) {
        std::cmp::Ordering::Less => StepState::Completed,
        std::cmp::Ordering::Equal => StepState::Current,
        std::cmp::Ordering::Greater => StepState::Future,
    }
}
