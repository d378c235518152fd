//! The describe workflow: read an image, call the backend, hand back
//! the typed analysis.
//!
//! Holds no state between runs — the same inputs against the same backend
//! produce the same output.

use super::provider::{FeatureSet, ImageSource, VisionBackend};
use super::retry;
use crate::config::RequestConfig;
use crate::error::{VisionError, VisionResult};
use crate::types::{Description, ImageAnalysis};
use std::path::Path;
use std::time::Duration;

/// Knobs for a single vision request.
#[derive(Debug, Clone)]
pub struct DescribeOptions {
    /// Per-request deadline in milliseconds
    pub timeout_ms: u64,
    /// Maximum retries on transient failures
    pub retry_attempts: u32,
    /// Base backoff delay in milliseconds
    pub retry_delay_ms: u64,
    /// Caption candidates to request from the describe operation
    pub max_candidates: u32,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 60_000,
            retry_attempts: 2,
            retry_delay_ms: 1000,
            max_candidates: 1,
        }
    }
}

impl DescribeOptions {
    /// Build options from the `[request]` config section.
    pub fn from_config(config: &RequestConfig) -> Self {
        Self {
            timeout_ms: config.timeout_ms,
            retry_attempts: config.retry_attempts,
            retry_delay_ms: config.retry_delay_ms,
            max_candidates: config.max_candidates,
        }
    }
}

/// Which remote operation a run drives.
enum AnalysisRequest {
    Describe { max_candidates: u32 },
    Analyze(FeatureSet),
}

/// The image-describe workflow over a substitutable backend.
pub struct Describer {
    backend: Box<dyn VisionBackend>,
    options: DescribeOptions,
}

impl Describer {
    pub fn new(backend: Box<dyn VisionBackend>, options: DescribeOptions) -> Self {
        Self { backend, options }
    }

    /// Caption a local image file.
    ///
    /// A filesystem error surfaces here; no network call is attempted.
    pub async fn describe_file(&self, path: &Path) -> VisionResult<Description> {
        let source = read_image(path).await?;
        let request = AnalysisRequest::Describe {
            max_candidates: self.options.max_candidates,
        };
        self.send(&source, &request).await?.into_description()
    }

    /// Caption a remote image the service fetches itself.
    pub async fn describe_url(&self, url: &str) -> VisionResult<Description> {
        let source = ImageSource::Url(url.to_string());
        let request = AnalysisRequest::Describe {
            max_candidates: self.options.max_candidates,
        };
        self.send(&source, &request).await?.into_description()
    }

    /// Run feature-selection analysis on a local image file.
    pub async fn analyze_file(
        &self,
        path: &Path,
        features: &FeatureSet,
    ) -> VisionResult<ImageAnalysis> {
        let source = read_image(path).await?;
        self.send(&source, &AnalysisRequest::Analyze(features.clone()))
            .await
    }

    /// Run feature-selection analysis on a remote image.
    pub async fn analyze_url(
        &self,
        url: &str,
        features: &FeatureSet,
    ) -> VisionResult<ImageAnalysis> {
        let source = ImageSource::Url(url.to_string());
        self.send(&source, &AnalysisRequest::Analyze(features.clone()))
            .await
    }

    /// Drive one request with a deadline and bounded retries on transient
    /// failures. Auth and client errors are terminal on the first attempt.
    async fn send(
        &self,
        source: &ImageSource,
        request: &AnalysisRequest,
    ) -> VisionResult<ImageAnalysis> {
        let mut last_error = VisionError::Timeout {
            timeout_ms: self.options.timeout_ms,
        };

        for attempt in 0..=self.options.retry_attempts {
            if attempt > 0 {
                let delay = retry::backoff_duration(attempt - 1, self.options.retry_delay_ms);
                tracing::debug!(
                    "Retry {attempt}/{} via {} after {delay:?}",
                    self.options.retry_attempts,
                    self.backend.name()
                );
                tokio::time::sleep(delay).await;
            }

            let call = async {
                match request {
                    AnalysisRequest::Describe { max_candidates } => {
                        self.backend.describe(source, *max_candidates).await
                    }
                    AnalysisRequest::Analyze(features) => {
                        self.backend.analyze(source, features).await
                    }
                }
            };

            match tokio::time::timeout(Duration::from_millis(self.options.timeout_ms), call).await
            {
                Ok(Ok(analysis)) => return Ok(analysis),
                Ok(Err(e)) => {
                    let retryable = retry::is_retryable(&e);
                    last_error = e;
                    if !retryable {
                        break;
                    }
                }
                Err(_) => {
                    // Deadline elapsed; timeouts are retryable
                    last_error = VisionError::Timeout {
                        timeout_ms: self.options.timeout_ms,
                    };
                }
            }
        }

        Err(last_error)
    }
}

/// Read the full contents of an image file into an owned source.
async fn read_image(path: &Path) -> VisionResult<ImageSource> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| VisionError::ReadImage {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(ImageSource::Bytes(bytes))
}
