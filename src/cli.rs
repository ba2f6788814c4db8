//! Command-line interface for the splitter.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::error::Result;
use crate::plan::SplitPlan;
use crate::splitter::{persist, split_source};

/// Partial Splitter - Split oversized C# service classes into partial class files.
#[derive(Parser)]
#[command(name = "partial-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a source file according to a split plan.
    Split {
        /// Source file to split (rewritten in place)
        file: PathBuf,

        /// Split plan YAML file (region rules and overrides)
        #[arg(short, long)]
        plan: PathBuf,

        /// Show proposed outputs without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            file,
            plan,
            dry_run,
        } => split_command(&file, &plan, dry_run),
    }
}

/// Execute the split command.
fn split_command(file: &Path, plan_path: &Path, dry_run: bool) -> Result<()> {
    let plan_yaml = fs::read_to_string(plan_path)?;
    let plan = SplitPlan::from_yaml(&plan_yaml)?;

    let outcome = split_source(file, &plan)?;

    for doc in &outcome.outputs {
        let lines = doc.content.lines().count();
        println!(
            "  {} ({} lines)",
            style(doc.path.display()).cyan(),
            lines
        );
    }
    println!();

    if dry_run {
        println!(
            "{} {} bucket documents proposed (dry run, nothing written)",
            style("Done:").green().bold(),
            outcome.bucket_count
        );
        return Ok(());
    }

    persist(&outcome.outputs)?;

    println!(
        "{} {} bucket documents produced",
        style("Done:").green().bold(),
        outcome.bucket_count
    );

    Ok(())
}
