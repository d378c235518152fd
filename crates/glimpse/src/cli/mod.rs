//! Command implementations for the glimpse binary.

pub mod analyze;
pub mod config;
pub mod describe;
pub mod types;

use std::path::PathBuf;

/// An image argument is either a URL the service fetches itself or a
/// local path (with ~ expanded).
pub(crate) enum ImageArg {
    Url(String),
    Path(PathBuf),
}

impl ImageArg {
    pub(crate) fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Self::Url(input.to_string())
        } else {
            Self::Path(PathBuf::from(shellexpand::tilde(input).into_owned()))
        }
    }
}
