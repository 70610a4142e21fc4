//! Stepper command - Show workflow progress

use std::path::Path;

use super::{to_json, CommandContext};
use crate::errors::{RepairflowError, Result};
use crate::fs::read_snapshot;
use crate::schemas::{Config, Stage};
use crate::stepper::{build_steps, render_steps};

/// Render the stepper for `current`
pub fn render(config: &Config, current: Stage, json: bool) -> Result<String> {
    let steps = build_steps(current, config.locale);
    if json {
        return to_json(&steps);
    }
    Ok(render_steps(&steps, config.show_descriptions))
}

/// Show progress for a stage, or for the stage recorded in a snapshot
pub fn run(
    ctx: &CommandContext,
    stage: Option<Stage>,
    snapshot_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let current = match (stage, snapshot_path) {
        (Some(stage), _) => stage,
        (None, Some(path)) => read_snapshot(&ctx.path(path))?.current_stage,
        (None, None) => {
            return Err(RepairflowError::ConfigError(
                "either a stage or --snapshot is required".to_string(),
            ))
        }
    };

    println!("{}", render(&ctx.config, current, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::Locale;
    use tempfile::TempDir;

    #[test]
    fn test_render_text() {
        let config = Config {
            locale: Locale::En,
            ..Default::default()
        };
        let text = render(&config, Stage::Execution, false).unwrap();
        assert!(text.starts_with("✓ 1. Triage (TRIAGE)\n✓ 2. Quotation (QUOTATION)\n→ 3. Execution"));
    }

    #[test]
    fn test_render_json() {
        let json = render(&Config::default(), Stage::Closure, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[4]["state"], "current");
        assert_eq!(value[5]["state"], "future");
    }

    #[test]
    fn test_run_from_snapshot() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("wo.json"), r#"{"currentStage": "QA"}"#).unwrap();
        let ctx = CommandContext::load(Some(temp.path()), None).unwrap();

        assert!(run(&ctx, None, Some(Path::new("wo.json")), false).is_ok());
    }

    #[test]
    fn test_run_without_stage_or_snapshot() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::load(Some(temp.path()), None).unwrap();

        assert_eq!(run(&ctx, None, None, false).unwrap_err().code(), "CONFIG_ERROR");
    }
}
