use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use project_setup::layout::ScaffoldLayout;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Create the project folder structure (run this first)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory to scaffold into (defaults to the current directory)
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Output results as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report which folders and the marker are in place (no changes made)
    Check,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "project_setup=debug,setup_folders=debug"
    } else {
        "project_setup=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let layout = ScaffoldLayout::default();
    debug!(
        root = %cli.root.display(),
        directories = layout.directories.len(),
        "layout resolved"
    );

    match cli.command {
        None => {
            commands::setup::execute(&cli.root, &layout, cli.json)?;
        }
        Some(Commands::Check) => {
            let exit_code = commands::check::execute(&cli.root, &layout, cli.json)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
