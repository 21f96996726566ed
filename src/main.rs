//! CLI entry point for multiselect
//!
//! Replays command scripts against a fresh store and prints the
//! resulting selection state.

use clap::{Parser, Subcommand};
use colored::*;
use multiselect_store::{
    script::{read_script, replay},
    MultiSelectStore, StoreConfig,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "multiselect")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every store mutation to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a script and print the final store
    Run {
        /// Path to the command script
        script: PathBuf,

        /// Path to a JSON store config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a JSON snapshot instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Parse a script without running it
    Check {
        /// Path to the command script
        script: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    match cli.command {
        Commands::Run {
            script,
            config,
            json,
        } => run_script(&script, config.as_deref(), json)?,
        Commands::Check { script } => check_script(&script)?,
    }

    Ok(())
}

/// Expand tilde in a user-supplied path
fn expand_path(path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Replay a script and print the resulting store
fn run_script(script_path: &Path, config_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => StoreConfig::load(&expand_path(path)?)?,
        None => StoreConfig::default(),
    };

    let path = expand_path(script_path)?;
    let lines = read_script(&path)?;

    let mut store: MultiSelectStore<String> = MultiSelectStore::with_config(&config);
    replay(&mut store, &lines)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
        return Ok(());
    }

    println!("{}", format!("Store after: {}\n", path.display()).bold());

    for (key, item) in store.iter() {
        let marker = if store.is_selected(key) {
            "●".green().bold()
        } else {
            "○".dimmed()
        };

        println!("{} {} → {}", marker, key.cyan(), item);
    }

    println!(
        "\n{} {} item{}, {} selected",
        "✓".green(),
        store.len(),
        if store.len() == 1 { "" } else { "s" },
        store.selected_count()
    );

    Ok(())
}

/// Parse a script and report problems
fn check_script(script_path: &Path) -> anyhow::Result<()> {
    let path = expand_path(script_path)?;

    println!("{} Parsing script: {}", "→".cyan(), path.display());

    match read_script(&path) {
        Ok(lines) => {
            println!("{} Found {} commands", "✓".green(), lines.len());
            for line in &lines {
                println!("  {} {}", format!("{:>4}", line.line).dimmed(), line.command);
            }
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}
