//! Advance command - Apply a stage change to a work-order snapshot
//!
//! Prints the status-update request the caller should send to the backend.
//! Nothing is sent from here; the backend remains the authority.

use std::path::Path;

use serde::Serialize;

use super::{to_json, CommandContext};
use crate::domain::{apply_stage_transition, TransitionResult};
use crate::errors::{RepairflowError, Result};
use crate::fs::{read_snapshot, write_snapshot_stage};
use crate::schemas::{Stage, StatusUpdateRequest, WorkOrderSnapshot};

/// Outcome of an approved advance
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceOutcome {
    pub request: StatusUpdateRequest,
    pub snapshot: WorkOrderSnapshot,
}

/// Apply `to` to `snapshot`, producing the request and the advanced snapshot.
pub fn advance(
    snapshot: &WorkOrderSnapshot,
    to: Stage,
    note: Option<String>,
) -> Result<AdvanceOutcome> {
    match apply_stage_transition(snapshot, to) {
        TransitionResult::Success { next } => Ok(AdvanceOutcome {
            request: StatusUpdateRequest::for_transition(snapshot, to, note),
            snapshot: next,
        }),
        TransitionResult::Rejected { reasons } => Err(RepairflowError::TransitionRejected {
            from: snapshot.current_stage.to_string(),
            to: to.to_string(),
            reasons,
        }),
    }
}

/// Render an approved advance
pub fn render(outcome: &AdvanceOutcome, json: bool) -> Result<String> {
    if json {
        return to_json(outcome);
    }
    let request = &outcome.request;
    let mut text = format!("{} -> {}: approved", request.from, request.to);
    if let Some(id) = &request.work_order_id {
        text.push_str(&format!(" for {}", id));
    }
    text.push('\n');
    text.push_str(&to_json(request)?);
    Ok(text)
}

/// Move the work order in `snapshot_path` to `to`.
///
/// With `write`, the new stage is recorded in the file; its other keys are
/// left untouched.
pub fn run(
    ctx: &CommandContext,
    snapshot_path: &Path,
    to: Stage,
    note: Option<String>,
    write: bool,
    json: bool,
) -> Result<()> {
    let path = ctx.path(snapshot_path);
    let snapshot = read_snapshot(&path)?;

    let outcome = match advance(&snapshot, to, note) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!(from = %snapshot.current_stage, %to, "transition rejected");
            return Err(e);
        }
    };
    tracing::info!(from = %snapshot.current_stage, %to, "transition approved");

    if write {
        write_snapshot_stage(&path, outcome.snapshot.current_stage)?;
        tracing::info!(path = %path.display(), "snapshot updated");
    }

    println!("{}", render(&outcome, json)?);
    Ok(())
}
