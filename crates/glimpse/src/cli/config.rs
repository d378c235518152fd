//! The `glimpse config` command for configuration management.

use clap::{Args, Subcommand};
use glimpse_core::{config::resolve_env_var, Config};

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display current configuration
    Show {
        /// Also report whether the endpoint and key resolve
        #[arg(long)]
        check: bool,
    },

    /// Show config file path
    Path,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { check } => {
            let config = Config::load()?;
            let toml = config.to_toml()?;
            println!("{}", toml);

            if check {
                // The key itself is never printed, only whether it resolves
                report_credential("endpoint", &config.azure.endpoint);
                report_credential("api_key", &config.azure.api_key);
            }
        }

        ConfigCommand::Path => {
            let path = Config::default_path();
            println!("{}", path.display());
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at: {}\nUse --force to overwrite.",
                    path.display()
                );
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let config = Config::default();
            let toml = config.to_toml()?;
            std::fs::write(&path, toml)?;

            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn report_credential(field: &str, value: &str) {
    match resolve_env_var(value) {
        Some(_) => println!("azure.{field}: resolves"),
        None => println!("azure.{field}: NOT SET ({value})"),
    }
}
