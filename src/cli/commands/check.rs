//! Check command - Validate a proposed stage change

use std::path::Path;

use serde::Serialize;

use super::{to_json, CommandContext};
use crate::domain::{check_prerequisites, PrerequisitesResult};
use crate::errors::{RepairflowError, Result};
use crate::fs::read_snapshot;
use crate::schemas::{Stage, WorkOrderSnapshot};

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    from: Stage,
    to: Stage,
    #[serde(flatten)]
    result: &'a PrerequisitesResult,
}

/// Evaluate a transition against a snapshot. `from` defaults to the
/// snapshot's current stage.
pub fn evaluate(
    snapshot: &WorkOrderSnapshot,
    from: Option<Stage>,
    to: Stage,
) -> (Stage, PrerequisitesResult) {
    let from = from.unwrap_or(snapshot.current_stage);
    (from, check_prerequisites(from, to, snapshot))
}

/// Render a check result
pub fn render(from: Stage, to: Stage, result: &PrerequisitesResult, json: bool) -> Result<String> {
    if json {
        return to_json(&CheckReport { from, to, result });
    }
    if result.allowed {
        return Ok(format!("{} -> {}: allowed", from, to));
    }
    let mut lines = vec![format!("{} -> {}: blocked", from, to)];
    lines.extend(result.reasons.iter().map(|r| format!("  - {}", r)));
    Ok(lines.join("\n"))
}

/// Check the prerequisites for moving the work order in `snapshot_path` to `to`.
///
/// Prints the report either way; a blocked transition returns
/// `TransitionRejected` so the process exits non-zero.
pub fn run(
    ctx: &CommandContext,
    snapshot_path: &Path,
    from: Option<Stage>,
    to: Stage,
    json: bool,
) -> Result<()> {
    let snapshot = read_snapshot(&ctx.path(snapshot_path))?;
    let (from, result) = evaluate(&snapshot, from, to);

    println!("{}", render(from, to, &result, json)?);

    if !result.allowed {
        tracing::warn!(%from, %to, reasons = result.reasons.len(), "transition rejected");
        return Err(RepairflowError::TransitionRejected {
            from: from.to_string(),
            to: to.to_string(),
            reasons: result.reasons,
        });
    }
    Ok(())
}
