//! The `glimpse describe` command: caption an image.

use super::ImageArg;
use clap::Args;
use glimpse_core::{output, AzureVision, Config, DescribeOptions, Describer, OutputFormat};

/// Arguments for the `describe` command.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Image file path or http(s) URL
    #[arg(required = true)]
    pub image: String,

    /// Number of caption candidates to request
    #[arg(long)]
    pub max_candidates: Option<u32>,

    /// Print every caption candidate with its confidence
    #[arg(long)]
    pub all_candidates: bool,

    /// Emit the description as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Execute the describe command.
pub async fn execute(args: DescribeArgs, config: &Config) -> anyhow::Result<()> {
    let backend = AzureVision::from_config(&config.azure)?;
    tracing::info!("Using endpoint {}", backend.endpoint());

    let mut options = DescribeOptions::from_config(&config.request);
    if let Some(max_candidates) = args.max_candidates {
        options.max_candidates = max_candidates;
    }
    if args.all_candidates && args.max_candidates.is_none() {
        // One candidate would make --all-candidates pointless
        options.max_candidates = 3;
    }
    let describer = Describer::new(Box::new(backend), options);

    let description = match ImageArg::parse(&args.image) {
        ImageArg::Url(url) => describer.describe_url(&url).await?,
        ImageArg::Path(path) => describer.describe_file(&path).await?,
    };

    let as_json =
        args.json || OutputFormat::parse(&config.output.format) == Some(OutputFormat::Json);
    if as_json {
        println!("{}", output::to_json(&description, config.output.pretty)?);
        return Ok(());
    }

    if args.all_candidates {
        print!("{}", output::render_description(&description));
    } else {
        let caption = description.top_caption()?;
        println!("Description:");
        println!("\t{}", caption.text);
    }

    Ok(())
}
