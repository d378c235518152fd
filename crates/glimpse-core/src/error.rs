//! Error types for the glimpse vision client.
//!
//! Errors are organized by stage so callers can tell a missing credential
//! from an unreadable file from a service-side failure without parsing text.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for glimpse operations.
#[derive(Error, Debug)]
pub enum GlimpseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Vision workflow errors
    #[error("Vision error: {0}")]
    Vision(#[from] VisionError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors from the vision workflow, organized by stage: credential
/// resolution, reading the image, the remote call, and the shape of
/// what came back.
#[derive(Error, Debug)]
pub enum VisionError {
    /// A credential reference resolved to nothing
    #[error("{name} is not set. Export the {name} environment variable or set it in the config file.")]
    MissingCredential { name: String },

    /// The image file could not be read
    #[error("Failed to read image {path:?}: {source}")]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request never produced a response (DNS, TLS, connection)
    #[error("Request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    /// The service answered with a non-success status
    #[error("Computer Vision API error {status_code} ({code}): {message}")]
    Api {
        status_code: u16,
        code: String,
        message: String,
    },

    /// The response body did not match the expected shape
    #[error("Failed to decode analysis response: {message}")]
    Decode { message: String },

    /// The call did not complete within the deadline
    #[error("Vision request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// The service returned an empty caption list (ambiguous image)
    #[error("The service returned no captions for this image")]
    NoCaptions,

    /// An analyze request was built with no features selected
    #[error("At least one visual feature must be requested")]
    EmptyFeatures,
}

/// Convenience type alias for glimpse results.
pub type Result<T> = std::result::Result<T, GlimpseError>;

/// Convenience type alias for vision-specific results.
pub type VisionResult<T> = std::result::Result<T, VisionError>;
