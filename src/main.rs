//! Repairflow CLI - Check and apply work-order stage transitions

use clap::Parser;
use repairflow::cli::commands::{self, CommandContext};
use repairflow::cli::{Cli, Commands};
use repairflow::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so command output stays clean
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> repairflow::Result<()> {
    let Some(command) = cli.command else {
        // Default to showing help - clap handles this
        println!("Use --help for usage information");
        return Ok(());
    };

    let ctx = CommandContext::load(cli.cwd.as_deref(), cli.locale)?;

    match command {
        Commands::Stages { json } => commands::stages::run(&ctx, json),
        Commands::Next { stage, json } => commands::next::run(&ctx, stage, json),
        Commands::Check {
            snapshot,
            to,
            from,
            json,
        } => commands::check::run(&ctx, &snapshot, from, to, json),
        Commands::Stepper {
            stage,
            snapshot,
            json,
        } => commands::stepper::run(&ctx, stage, snapshot.as_deref(), json),
        Commands::Advance {
            snapshot,
            to,
            note,
            write,
            json,
        } => commands::advance::run(&ctx, &snapshot, to, note, write, json),
    }
}
