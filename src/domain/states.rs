//! Workflow stage catalog and transition graph
//!
//! The pipeline order is linear:
//! triage → quotation → execution → qa → closure → warranty
//!
//! The transition graph is not. Quotation, execution and qa may step back one
//! stage for rework; closure only moves forward and warranty is terminal.

use crate::schemas::Stage;

/// The canonical ordering of workflow stages.
///
/// This is the source of truth for stage ordering. The completed/current/future
/// classification is derived from it, never from the transition graph.
pub const STAGES: &[Stage] = &[
    Stage::Triage,
    Stage::Quotation,
    Stage::Execution,
    Stage::Qa,
    Stage::Closure,
    Stage::Warranty,
];

/// Get the 0-based index of a stage in the pipeline.
pub fn index_of(stage: Stage) -> usize {
    match stage {
        Stage::Triage => 0,
        Stage::Quotation => 1,
        Stage::Execution => 2,
        Stage::Qa => 3,
        Stage::Closure => 4,
        Stage::Warranty => 5,
    }
}

/// Stages directly reachable from `stage`, forward edge first.
pub fn reachable_from(stage: Stage) -> &'static [Stage] {
    match stage {
        Stage::Triage => &[Stage::Quotation],
        Stage::Quotation => &[Stage::Execution, Stage::Triage],
        Stage::Execution => &[Stage::Qa, Stage::Quotation],
        Stage::Qa => &[Stage::Closure, Stage::Execution],
        Stage::Closure => &[Stage::Warranty],
        Stage::Warranty => &[],
    }
}

/// Whether the graph has an edge `from → to`.
pub fn can_transition(from: Stage, to: Stage) -> bool {
    reachable_from(from).contains(&to)
}

/// Returns the stages a work order may move to next.
///
/// Progression comes before rework so a status dialog can preselect the first
/// entry.
pub fn next_possible_statuses(current: Stage) -> Vec<Stage> {
    reachable_from(current).to_vec()
}

/// The stage every work order starts in.
pub fn initial_stage() -> Stage {
    Stage::Triage
}

/// Check if a stage is the terminal stage (warranty).
pub fn is_terminal_stage(stage: Stage) -> bool {
    reachable_from(stage).is_empty()
}
