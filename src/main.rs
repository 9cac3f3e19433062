mod assets;
mod cli;
mod config;
mod error;
mod export;
mod parser;
mod resume;
mod skills;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::config::Config;

fn main() -> Result<()> {
    // Initialize tracing - only show warnings by default, use RUST_LOG=debug for more detail
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init { force } => {
            cli::commands::init::run(force)?;
        }
        Commands::Resume {
            source,
            output,
            sections,
            stdout,
        } => {
            let config = Config::load(config_path)?;
            cli::commands::resume::run(&config, source, output, sections, stdout)?;
        }
        Commands::Skills {
            record,
            skills,
            json,
        } => {
            let config = Config::load(config_path)?;
            cli::commands::skills::run(&config, record, skills, json)?;
        }
        Commands::Portfolio { docx, output } => {
            let config = Config::load(config_path)?;
            cli::commands::portfolio::run(&config, docx, output)?;
        }
        Commands::Certificates { dir, json } => {
            let config = Config::load(config_path)?;
            cli::commands::certificates::run(&config, dir, json)?;
        }
        Commands::Gallery { dir, json } => {
            let config = Config::load(config_path)?;
            cli::commands::gallery::run(&config, dir, json)?;
        }
        Commands::Doctor => {
            cli::commands::doctor::run(config_path)?;
        }
    }

    Ok(())
}
