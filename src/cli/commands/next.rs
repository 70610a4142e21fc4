//! Next command - Show the stages reachable from a stage

use serde::Serialize;

use super::{to_json, CommandContext};
use crate::domain::next_possible_statuses;
use crate::errors::Result;
use crate::locale::stage_label;
use crate::schemas::{Config, Stage};

#[derive(Debug, Serialize)]
struct NextOption {
    stage: Stage,
    label: &'static str,
}

/// Render the options a status dialog would offer, progression first
pub fn render(config: &Config, stage: Stage, json: bool) -> Result<String> {
    let options: Vec<NextOption> = next_possible_statuses(stage)
        .into_iter()
        .map(|stage| NextOption {
            stage,
            label: stage_label(stage, config.locale),
        })
        .collect();

    if json {
        return to_json(&options);
    }
    if options.is_empty() {
        return Ok(format!("{} is terminal; no further stages", stage));
    }
    Ok(options
        .iter()
        .map(|o| format!("{} ({})", o.stage, o.label))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Show the stages reachable from `stage`
pub fn run(ctx: &CommandContext, stage: Stage, json: bool) -> Result<()> {
    println!("{}", render(&ctx.config, stage, json)?);
    Ok(())
}
