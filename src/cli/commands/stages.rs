//! Stages command - List the workflow stages

use serde::Serialize;

use super::{to_json, CommandContext};
use crate::domain::{index_of, is_terminal_stage, next_possible_statuses, STAGES};
use crate::errors::Result;
use crate::locale::{stage_description, stage_label};
use crate::schemas::{Config, Stage};

#[derive(Debug, Serialize)]
struct StageEntry {
    stage: Stage,
    index: usize,
    label: &'static str,
    description: &'static str,
    next: Vec<Stage>,
    terminal: bool,
}

fn catalog(config: &Config) -> Vec<StageEntry> {
    STAGES
        .iter()
        .map(|&stage| StageEntry {
            stage,
            index: index_of(stage),
            label: stage_label(stage, config.locale),
            description: stage_description(stage, config.locale),
            next: next_possible_statuses(stage),
            terminal: is_terminal_stage(stage),
        })
        .collect()
}

/// Render the stage catalog
pub fn render(config: &Config, json: bool) -> Result<String> {
    let entries = catalog(config);
    if json {
        return to_json(&entries);
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            let next = if entry.terminal {
                "(terminal)".to_string()
            } else {
                entry
                    .next
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let mut line = format!(
                "{}. {:<10} {} -> {}",
                entry.index + 1,
                entry.stage.as_str(),
                entry.label,
                next
            );
            if config.show_descriptions {
                line.push_str(&format!("\n   {}", entry.description));
            }
            line
        })
        .collect();
    Ok(lines.join("\n"))
}

/// List the workflow stages in pipeline order
pub fn run(ctx: &CommandContext, json: bool) -> Result<()> {
    println!("{}", render(&ctx.config, json)?);
    Ok(())
}
