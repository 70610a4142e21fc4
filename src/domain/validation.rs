//! Prerequisite rules for stage transitions
//!
//! Guards are keyed on the target stage only. Moving back into a stage
//! re-checks the same field that was required to reach it the first time.

use serde::{Deserialize, Serialize};

use crate::schemas::{Stage, WorkOrderSnapshot};

use super::states::can_transition;

pub const ESTIMATED_COST_REQUIRED: &str = "estimated cost required";
pub const TECHNICIAN_REQUIRED: &str = "technician assignment required";
pub const DIAGNOSTIC_REQUIRED: &str = "at least one diagnostic record required";
pub const ACTUAL_COST_REQUIRED: &str = "actual cost required";

/// Outcome of a prerequisite check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrerequisitesResult {
    /// True exactly when `reasons` is empty
    pub allowed: bool,

    /// Every unmet condition, in rule order
    pub reasons: Vec<String>,
}

impl PrerequisitesResult {
    pub fn from_reasons(reasons: Vec<String>) -> Self {
        PrerequisitesResult {
            allowed: reasons.is_empty(),
            reasons,
        }
    }
}

/// Validate entering the quotation stage
pub fn can_enter_quotation(snapshot: &WorkOrderSnapshot) -> Option<&'static str> {
    (!snapshot.has_estimated_cost()).then_some(ESTIMATED_COST_REQUIRED)
}

/// Validate entering the execution stage
pub fn can_enter_execution(snapshot: &WorkOrderSnapshot) -> Option<&'static str> {
    (!snapshot.has_technician()).then_some(TECHNICIAN_REQUIRED)
}

/// Validate entering the qa stage
pub fn can_enter_qa(snapshot: &WorkOrderSnapshot) -> Option<&'static str> {
    (!snapshot.has_diagnostics()).then_some(DIAGNOSTIC_REQUIRED)
}

/// Validate entering the closure stage
pub fn can_enter_closure(snapshot: &WorkOrderSnapshot) -> Option<&'static str> {
    (!snapshot.has_actual_cost()).then_some(ACTUAL_COST_REQUIRED)
}

/// Check every prerequisite for moving `from → to`.
///
/// All unmet conditions are collected; the graph check comes last. Never
/// fails: missing data is reported in `reasons`.
pub fn check_prerequisites(
    from: Stage,
    to: Stage,
    snapshot: &WorkOrderSnapshot,
) -> PrerequisitesResult {
    let mut reasons = Vec::new();

    let field_guard = match to {
        Stage::Quotation => can_enter_quotation(snapshot),
        Stage::Execution => can_enter_execution(snapshot),
        Stage::Qa => can_enter_qa(snapshot),
        Stage::Closure => can_enter_closure(snapshot),
        Stage::Triage | Stage::Warranty => None,
    };
    if let Some(reason) = field_guard {
        reasons.push(reason.to_string());
    }

    if !can_transition(from, to) {
        reasons.push(format!("transition from {} to {} is not permitted", from, to));
    }

    PrerequisitesResult::from_reasons(reasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::DiagnosticRecord;

    fn empty() -> WorkOrderSnapshot {
        WorkOrderSnapshot::default()
    }

    #[test]
    fn test_quotation_requires_estimated_cost() {
        let result = check_prerequisites(Stage::Triage, Stage::Quotation, &empty());
        assert!(!result.allowed);
        assert_eq!(result.reasons, vec![ESTIMATED_COST_REQUIRED.to_string()]);

        let snapshot = empty().with_estimated_cost(Some(5000.0));
        let result = check_prerequisites(Stage::Triage, Stage::Quotation, &snapshot);
        assert!(result.allowed);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_zero_estimate_is_missing() {
        let snapshot = empty().with_estimated_cost(Some(0.0));
        assert_eq!(can_enter_quotation(&snapshot), Some(ESTIMATED_COST_REQUIRED));
    }

    #[test]
    fn test_execution_requires_technician() {
        let result = check_prerequisites(Stage::Quotation, Stage::Execution, &empty());
        assert!(!result.allowed);
        assert_eq!(result.reasons, vec![TECHNICIAN_REQUIRED.to_string()]);

        let snapshot = empty().with_technician(Some("tech-3".into()));
        assert!(check_prerequisites(Stage::Quotation, Stage::Execution, &snapshot).allowed);
    }

    #[test]
    fn test_qa_requires_diagnostic() {
        let result = check_prerequisites(Stage::Execution, Stage::Qa, &empty());
        assert!(!result.allowed);
        assert_eq!(result.reasons, vec![DIAGNOSTIC_REQUIRED.to_string()]);

        let snapshot = empty().with_diagnostic(DiagnosticRecord::new("d1"));
        assert!(check_prerequisites(Stage::Execution, Stage::Qa, &snapshot).allowed);
    }

    #[test]
    fn test_closure_requires_actual_cost() {
        let result = check_prerequisites(Stage::Qa, Stage::Closure, &empty());
        assert_eq!(result.reasons, vec![ACTUAL_COST_REQUIRED.to_string()]);

        let snapshot = empty().with_actual_cost(Some(2750.0));
        assert!(check_prerequisites(Stage::Qa, Stage::Closure, &snapshot).allowed);
    }

    #[test]
    fn test_warranty_has_no_field_guard() {
        let result = check_prerequisites(Stage::Closure, Stage::Warranty, &empty());
        assert!(result.allowed);
    }

    #[test]
    fn test_backward_edge_rechecks_target_guard() {
        // Rework loop from execution back to quotation still needs an estimate
        let result = check_prerequisites(Stage::Execution, Stage::Quotation, &empty());
        assert_eq!(result.reasons, vec![ESTIMATED_COST_REQUIRED.to_string()]);

        let result = check_prerequisites(Stage::Quotation, Stage::Triage, &empty());
        assert!(result.allowed);
    }

    #[test]
    fn test_skipping_collects_guard_and_graph_reasons() {
        let result = check_prerequisites(Stage::Triage, Stage::Execution, &empty());
        assert!(!result.allowed);
        assert_eq!(
            result.reasons,
            vec![
                TECHNICIAN_REQUIRED.to_string(),
                "transition from TRIAGE to EXECUTION is not permitted".to_string(),
            ]
        );
    }

    #[test]
    fn test_graph_reason_alone_when_guard_satisfied() {
        let snapshot = empty().with_technician(Some("tech-1".into()));
        let result = check_prerequisites(Stage::Triage, Stage::Execution, &snapshot);
        assert_eq!(
            result.reasons,
            vec!["transition from TRIAGE to EXECUTION is not permitted".to_string()]
        );
    }

    #[test]
    fn test_unguarded_target_only_fails_on_graph() {
        let result = check_prerequisites(Stage::Warranty, Stage::Triage, &empty());
        assert_eq!(
            result.reasons,
            vec!["transition from WARRANTY to TRIAGE is not permitted".to_string()]
        );
    }

    #[test]
    fn test_result_serialization() {
        let result = check_prerequisites(Stage::Triage, Stage::Quotation, &empty());
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"allowed":false,"reasons":["estimated cost required"]}"#);
    }
}
