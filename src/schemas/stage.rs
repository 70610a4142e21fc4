//! Stage schema - The six phases of the repair workflow

use serde::{Deserialize, Serialize};

use crate::errors::RepairflowError;

/// A phase of the repair workflow.
///
/// Variants are declared in pipeline order; the order is meaningful to the
/// stepper predicates in `domain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    /// Intake and diagnosis
    #[default]
    Triage,
    /// Cost estimate issued to the customer
    Quotation,
    /// Repair work in progress
    Execution,
    /// Quality assurance
    Qa,
    /// Job closed and billed
    Closure,
    /// Post-repair warranty period
    Warranty,
}

impl Stage {
    /// Wire name of the stage, as used by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Triage => "TRIAGE",
            Stage::Quotation => "QUOTATION",
            Stage::Execution => "EXECUTION",
            Stage::Qa => "QA",
            Stage::Closure => "CLOSURE",
            Stage::Warranty => "WARRANTY",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Stage {
    type Err = RepairflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRIAGE" => Ok(Stage::Triage),
            "QUOTATION" => Ok(Stage::Quotation),
            "EXECUTION" => Ok(Stage::Execution),
            "QA" => Ok(Stage::Qa),
            "CLOSURE" => Ok(Stage::Closure),
            "WARRANTY" => Ok(Stage::Warranty),
            _ => Err(RepairflowError::UnknownStage(s.to_string())),
        }
    }
}
