//! Stepper model for the work-order progress display

use serde::Serialize;

use crate::domain::{classify, index_of, StepState, STAGES};
use crate::locale::{stage_description, stage_label};
use crate::schemas::{Locale, Stage};

/// One step of the stepper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub stage: Stage,
    pub index: usize,
    pub state: StepState,
    pub label: &'static str,
    pub description: &'static str,
}

/// Build the six steps in pipeline order relative to `current`
pub fn build_steps(current: Stage, locale: Locale) -> Vec<Step> {
    STAGES
        .iter()
        .map(|&stage| Step {
            stage,
            index: index_of(stage),
            state: classify(stage, current),
            label: stage_label(stage, locale),
            description: stage_description(stage, locale),
        })
        .collect()
}

/// Render steps as plain text, one line each
pub fn render_steps(steps: &[Step], show_descriptions: bool) -> String {
    let mut lines = Vec::with_capacity(steps.len());
    for step in steps {
        let mut line = format!(
            "{} {}. {} ({})",
            get_step_icon(step.state),
            step.index + 1,
            step.label,
            step.stage
        );
        if show_descriptions {
            line.push_str(" - ");
            line.push_str(step.description);
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn get_step_icon(state: StepState) -> &'static str {
    match state {
        StepState::Completed => "✓",
        StepState::Current => "→",
        StepState::Future => "○",
    }
}
