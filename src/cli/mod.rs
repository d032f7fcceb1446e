//! Command-line interface for solution-kb
//!
//! Provides `add`, `list`, `show`, `export`, `clear`, `examples` and
//! `completions` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, CliOverrides, Config};
use crate::store::{FileStorage, Store};

mod add;
mod clear;
mod completions;
mod examples;
mod export;
mod list;
mod show;
mod utils;

/// Keep AI-generated business analyses in a local knowledge base
#[derive(Parser)]
#[command(name = "solution-kb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (solution-kb.toml or solution-kb.yml)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the knowledge base
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an AI analysis result to the knowledge base
    Add(add::AddArgs),

    /// List stored records, newest first
    List(list::ListArgs),

    /// Show one record as Markdown
    Show(show::ShowArgs),

    /// Export records as Markdown, CSV or JSON
    Export(export::ExportArgs),

    /// Remove every record from the knowledge base
    Clear(clear::ClearArgs),

    /// Print sample business problems to start from
    Examples,

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let session = || -> Result<Session> {
        let cwd = std::env::current_dir()?;
        let config = load_config(&cwd, cli.config.as_deref())?.merge_cli(CliOverrides {
            data_dir: cli.data_dir.clone(),
            ..CliOverrides::default()
        });
        tracing::debug!(data_dir = %config.data_dir.display(), "resolved configuration");
        Ok(Session { config })
    };

    match &cli.command {
        Commands::Add(args) => add::run(args, session()?),
        Commands::List(args) => list::run(args, session()?),
        Commands::Show(args) => show::run(args, session()?),
        Commands::Export(args) => export::run(args, session()?),
        Commands::Clear(args) => clear::run(args, session()?),
        Commands::Examples => examples::run(),
        Commands::Completions(args) => completions::run(args),
    }
}

/// Resolved configuration shared by the subcommands.
pub struct Session {
    pub config: Config,
}

impl Session {
    pub fn open_store(&self) -> Store<FileStorage> {
        let storage = FileStorage::new(&self.config.data_dir);
        tracing::debug!(root = %storage.root().display(), "opening knowledge base");
        Store::load(storage)
    }
}
