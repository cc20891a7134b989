use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use tempwatch_core::{Config, provider::provider_from_config};

use crate::{app, prompt::TerminalPrompter};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tempwatch", version, about = "Daily temperature report for a date range")]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask for a date range and print the report (default).
    Report,

    /// Interactively set location, anomaly threshold and request timeout.
    Configure,

    /// Print where the config file lives.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Report) {
            Command::Report => {
                let config = Config::load()?;
                let source = provider_from_config(&config)?;
                let mut prompter = TerminalPrompter;
                let mut stdout = std::io::stdout();

                app::run_report(&source, &mut prompter, &mut stdout, &config).await?;
            }
            Command::Configure => configure()?,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let name = Text::new("Location name:")
        .with_default(&cfg.location.name)
        .prompt()
        .context("Failed to read location name")?;
    cfg.location.name = name;

    cfg.location.latitude = CustomType::<f64>::new("Latitude:")
        .with_default(cfg.location.latitude)
        .with_error_message("Please enter a number, e.g. 17.385")
        .prompt()
        .context("Failed to read latitude")?;

    cfg.location.longitude = CustomType::<f64>::new("Longitude:")
        .with_default(cfg.location.longitude)
        .with_error_message("Please enter a number, e.g. 78.4867")
        .prompt()
        .context("Failed to read longitude")?;

    cfg.anomaly_threshold = CustomType::<f64>::new("Anomaly threshold (°C):")
        .with_default(cfg.anomaly_threshold)
        .with_error_message("Please enter a number")
        .prompt()
        .context("Failed to read anomaly threshold")?;

    cfg.request_timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(cfg.request_timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Failed to read request timeout")?;

    let path = cfg.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}
