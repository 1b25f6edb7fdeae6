use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fetchtour_core::TourConfig;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the default configuration to ~/.fetchtour/config.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the resolved configuration (file, env and flags applied)
    Show,
    /// Print the configuration file path
    Path,
}

impl ConfigCommands {
    /// Only `show` needs the current file to parse
    pub fn reads_config(&self) -> bool {
        matches!(self, ConfigCommands::Show)
    }
}

pub fn run_config(resolved: &TourConfig, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init { force } => {
            let path = TourConfig::config_path();
            if path.exists() && !force {
                println!("Config already exists at {} (use --force to overwrite)", path.display());
                return Ok(());
            }

            TourConfig::default()
                .save_to(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote default config");
            println!("Wrote {}", path.display());
        }
        ConfigCommands::Show => {
            print!("{}", resolved.to_toml().context("Failed to render config")?);
        }
        ConfigCommands::Path => {
            println!("{}", TourConfig::config_path().display());
        }
    }

    Ok(())
}
