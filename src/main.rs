//! ACE workspace - lay out instrument panels on a pannable, zoomable canvas
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use ace_editor::app::config;
use ace_editor::core::logging;
use ace_editor::host::{is_ace_project, open_project, ProjectHost, PROJECT_FILE};
use clap::Parser;

/// ACE workspace - lay out instrument panels in the terminal
#[derive(Parser, Debug)]
#[command(name = "ace")]
#[command(about = "A terminal workspace for flight-simulator instrument panels", long_about = None)]
struct Args {
    /// Path to the ACE project directory
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Write a default .ace/config.toml into the project and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Get project path from args or use current directory
    let path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        let written = config::init_config_dir(&path)?;
        println!("Settings: {}", written.display());
        return Ok(());
    }

    if !is_ace_project(&path) {
        eprintln!("❌ No ACE project found in: {}", path.display());
        eprintln!();
        eprintln!("An ACE project directory contains an {} file.", PROJECT_FILE);
        eprintln!("Hint: pass the project path as an argument:");
        eprintln!("      ace /path/to/project");
        std::process::exit(1);
    }

    logging::init()?;

    let project = open_project(&path)?;
    let host = ProjectHost::new(project.clone());
    ace_editor::run_with_project(project, host).await?;

    Ok(())
}
