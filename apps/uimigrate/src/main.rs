use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;
use uimigrate_core::SystemRunner;
use uimigrate_radix::{
    Config, MigrationPlan, RADIX_UI_PACKAGE, SpinnerReporter, execute_radix_migration,
    print_cancelled_message, print_summary,
};

#[derive(Parser)]
#[command(name = "uimigrate")]
#[command(about = "Source migrations for projects built on generated UI components", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Migrate @radix-ui/react-* imports to the radix-ui package
    Radix(Config),
    /// List available migrations
    List,
}

const MIGRATIONS: &[(&str, &str)] =
    &[("radix", "Migrate from @radix-ui/react-* packages to the radix-ui package.")];

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    match cli.command {
        Commands::List => {
            writeln!(stdout, "{}", "Available migrations:".bold())?;
            for (name, description) in MIGRATIONS {
                writeln!(stdout, "  {}  {}", name.cyan(), description)?;
            }
            stdout.flush()?;
            Ok(())
        }
        Commands::Radix(cfg) => run_radix(&cfg, &mut stdout),
    }
}

fn run_radix<W: Write>(cfg: &Config, stdout: &mut W) -> Result<()> {
    let project = cfg.project()?;
    let plan = MigrationPlan::new(&project)?;
    let package_manager = cfg.resolve_package_manager(&project);
    info!(
        "Migrating {} files with {} (using {} threads)",
        plan.files.len(),
        package_manager,
        rayon::current_num_threads()
    );

    if !cfg.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "We will migrate {} files in {} to {}. Continue?",
                plan.files.len(),
                plan.ui.display(),
                RADIX_UI_PACKAGE
            ))
            .default(true)
            .interact()
            .context("Failed to read confirmation, pass --yes to skip it")?;

        if !confirmed {
            print_cancelled_message(stdout)?;
            return Ok(());
        }
    }

    let start = Instant::now();
    let reporter = SpinnerReporter::new("Migrating to radix-ui...");
    let report =
        execute_radix_migration(&project, &plan, package_manager, &SystemRunner, &reporter)?;

    print_summary(stdout, &report, start.elapsed().as_millis())?;
    Ok(())
}
