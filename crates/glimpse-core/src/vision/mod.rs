//! Vision analysis: the backend trait, the Azure REST implementation,
//! and the describe workflow built on top of them.

pub(crate) mod azure;
pub(crate) mod describer;
pub(crate) mod provider;
pub(crate) mod retry;

pub use azure::AzureVision;
pub use describer::{DescribeOptions, Describer};
pub use provider::{FeatureSet, ImageSource, VisionBackend, VisualFeature};
