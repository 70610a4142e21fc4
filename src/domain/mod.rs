//! Workflow engine: stage catalog, transitions and prerequisites
//!
//! Everything here is pure and holds no state. The engine is advisory; the
//! backend re-validates every stage change it receives.

mod progress;
mod states;
mod transitions;
mod validation;


pub use progress::{classify, is_completed, is_current, is_future, StepState};
pub use states::{
    can_transition, index_of, initial_stage, is_terminal_stage, next_possible_statuses,
    reachable_from, STAGES,
};
pub use transitions::{apply_stage_transition, TransitionResult};
pub use validation::{
    can_enter_closure, can_enter_execution, can_enter_qa, can_enter_quotation,
    check_prerequisites, PrerequisitesResult, ACTUAL_COST_REQUIRED, DIAGNOSTIC_REQUIRED,
    ESTIMATED_COST_REQUIRED, TECHNICIAN_REQUIRED,
};
