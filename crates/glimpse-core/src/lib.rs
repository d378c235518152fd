//! Glimpse Core - Azure Computer Vision client library.
//!
//! Glimpse takes an image (a local file or a remote URL), submits it to the
//! Computer Vision analysis API, and hands back typed results: caption
//! candidates, tags, categories, color information, and more.
//!
//! # Architecture
//!
//! ```text
//! Image (path or URL) → read → VisionBackend (Azure REST) → typed analysis → report/JSON
//! ```
//!
//! The remote call sits behind the [`VisionBackend`] trait so tests can
//! substitute a double for the real HTTP client.
//!
//! # Usage
//!
//! ```rust,ignore
//! use glimpse_core::{AzureVision, Config, DescribeOptions, Describer};
//!
//! #[tokio::main]
//! async fn main() -> glimpse_core::Result<()> {
//!     let config = Config::load()?;
//!     let backend = AzureVision::from_config(&config.azure)?;
//!     let describer = Describer::new(Box::new(backend), DescribeOptions::default());
//!
//!     let description = describer.describe_file("./image.jpg".as_ref()).await?;
//!     println!("{}", description.top_caption()?.text);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod output;
pub mod types;
pub mod vision;

// Re-exports for convenient access
pub use config::{AzureConfig, Config, LoggingConfig, OutputConfig, RequestConfig};
pub use error::{ConfigError, GlimpseError, Result, VisionError, VisionResult};
pub use output::OutputFormat;
pub use types::{Caption, Description, ImageAnalysis};
pub use vision::{
    AzureVision, DescribeOptions, Describer, FeatureSet, ImageSource, VisionBackend, VisualFeature,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
