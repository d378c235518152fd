//! Vision backend trait and request building blocks.
//!
//! Defines the boundary between the describe workflow and the remote
//! service, so tests can substitute a double for the real HTTP client.

use crate::error::{VisionError, VisionResult};
use crate::types::ImageAnalysis;
use async_trait::async_trait;
use std::fmt;

/// An image to analyze: raw bytes read from disk, or a URL the service
/// fetches itself.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Full file contents, sent as an octet-stream body
    Bytes(Vec<u8>),
    /// Publicly reachable image URL, sent as a JSON body
    Url(String),
}

impl ImageSource {
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

/// Enumerated capabilities of the analyze operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualFeature {
    Description,
    Tags,
    Categories,
    Color,
    Faces,
    Objects,
    Brands,
    Adult,
    ImageType,
}

impl VisualFeature {
    /// Wire name used in the visualFeatures query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualFeature::Description => "Description",
            VisualFeature::Tags => "Tags",
            VisualFeature::Categories => "Categories",
            VisualFeature::Color => "Color",
            VisualFeature::Faces => "Faces",
            VisualFeature::Objects => "Objects",
            VisualFeature::Brands => "Brands",
            VisualFeature::Adult => "Adult",
            VisualFeature::ImageType => "ImageType",
        }
    }
}

impl fmt::Display for VisualFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-empty selection of visual features for an analyze call.
///
/// The service rejects an empty visualFeatures parameter with a user
/// error; constructing the set through here surfaces that locally,
/// before any bytes go over the wire.
#[derive(Debug, Clone)]
pub struct FeatureSet(Vec<VisualFeature>);

impl FeatureSet {
    /// Build a feature set, deduplicating while preserving order.
    pub fn new(features: Vec<VisualFeature>) -> VisionResult<Self> {
        if features.is_empty() {
            return Err(VisionError::EmptyFeatures);
        }
        let mut deduped = Vec::with_capacity(features.len());
        for feature in features {
            if !deduped.contains(&feature) {
                deduped.push(feature);
            }
        }
        Ok(Self(deduped))
    }

    /// Description only — the set the describe workflow uses.
    pub fn description() -> Self {
        Self(vec![VisualFeature::Description])
    }

    pub fn features(&self) -> &[VisualFeature] {
        &self.0
    }

    /// Comma-joined value for the visualFeatures query parameter.
    pub fn to_query(&self) -> String {
        self.0
            .iter()
            .map(VisualFeature::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Trait implemented by every vision analysis backend.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the describer holds a `Box<dyn VisionBackend>` so tests can swap in
/// a double).
#[async_trait]
pub trait VisionBackend: Send + Sync {
    /// Backend name for logging (e.g., "azure").
    fn name(&self) -> &str;

    /// Generate caption candidates for an image.
    async fn describe(
        &self,
        source: &ImageSource,
        max_candidates: u32,
    ) -> VisionResult<ImageAnalysis>;

    /// Run feature-selection analysis on an image.
    async fn analyze(
        &self,
        source: &ImageSource,
        features: &FeatureSet,
    ) -> VisionResult<ImageAnalysis>;
}
