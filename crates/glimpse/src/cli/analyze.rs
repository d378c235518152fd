//! The `glimpse analyze` command: feature-selection analysis.

use super::types::FeatureArg;
use super::ImageArg;
use clap::Args;
use glimpse_core::{
    output, AzureVision, Config, DescribeOptions, Describer, FeatureSet, OutputFormat,
};

/// Arguments for the `analyze` command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Image file path or http(s) URL
    #[arg(required = true)]
    pub image: String,

    /// Visual features to request (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',', default_value = "description")]
    pub features: Vec<FeatureArg>,

    /// Emit the raw analysis as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Execute the analyze command.
pub async fn execute(args: AnalyzeArgs, config: &Config) -> anyhow::Result<()> {
    let backend = AzureVision::from_config(&config.azure)?;
    tracing::info!("Using endpoint {}", backend.endpoint());

    let features = FeatureSet::new(args.features.iter().map(|&f| f.into()).collect())?;
    let describer = Describer::new(
        Box::new(backend),
        DescribeOptions::from_config(&config.request),
    );

    let analysis = match ImageArg::parse(&args.image) {
        ImageArg::Url(url) => describer.analyze_url(&url, &features).await?,
        ImageArg::Path(path) => describer.analyze_file(&path, &features).await?,
    };

    let as_json =
        args.json || OutputFormat::parse(&config.output.format) == Some(OutputFormat::Json);
    if as_json {
        println!("{}", output::to_json(&analysis, config.output.pretty)?);
    } else {
        print!("{}", output::render_report(&analysis));
    }

    Ok(())
}
