//! Glimpse CLI - describe and analyze images with Azure Computer Vision.
//!
//! Glimpse submits a local image file or a remote image URL to the Computer
//! Vision API and prints the results: the headline use is generating a
//! natural-language caption for a picture.
//!
//! # Usage
//!
//! ```bash
//! # Caption a local image
//! glimpse describe photo.jpg
//!
//! # Caption a remote image with all candidates
//! glimpse describe https://example.com/landmark.jpg --all-candidates
//!
//! # Full analysis with selected features
//! glimpse analyze photo.jpg --features description,tags,color
//!
//! # View configuration
//! glimpse config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Glimpse - describe and analyze images with Azure Computer Vision.
#[derive(Parser, Debug)]
#[command(name = "glimpse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a caption for an image
    Describe(cli::describe::DescribeArgs),

    /// Run feature-selection analysis on an image
    Analyze(cli::analyze::AnalyzeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match glimpse_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `glimpse config path`."
            );
            glimpse_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("glimpse v{}", glimpse_core::VERSION);

    // A failed run exits non-zero; the error and its chain go to stderr.
    match cli.command {
        Commands::Describe(args) => cli::describe::execute(args, &config).await,
        Commands::Analyze(args) => cli::analyze::execute(args, &config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
