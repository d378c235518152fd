//! Retry utilities for transient vision-call failures.
//!
//! Provides classification of retryable errors and exponential backoff.

use crate::error::VisionError;
use std::time::Duration;

/// Determine whether a vision error is worth retrying.
///
/// Retryable errors: timeouts, rate limits (429), server errors (5xx),
/// connection-level failures. Non-retryable: auth failures, bad requests,
/// unreadable files, result-shape errors.
pub fn is_retryable(error: &VisionError) -> bool {
    match error {
        VisionError::Timeout { .. } => true,
        VisionError::Api { status_code, .. } => {
            *status_code == 429 || (500..=599).contains(status_code)
        }
        // Transport errors carry no status; classify from the message
        VisionError::Request { message, .. } => {
            message.contains("timed out") || message.contains("connect")
        }
        _ => false,
    }
}

/// Calculate exponential backoff duration for a given attempt.
///
/// Uses `base_delay * 2^attempt` with a cap at 30 seconds.
pub fn backoff_duration(attempt: u32, base_delay_ms: u64) -> Duration {
    let delay = base_delay_ms.saturating_mul(2u64.saturating_pow(attempt));
    Duration::from_millis(delay.min(30_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status_code: u16) -> VisionError {
        VisionError::Api {
            status_code,
            code: status_code.to_string(),
            message: "test".to_string(),
        }
    }

    #[test]
    fn test_timeout_is_retryable() {
        assert!(is_retryable(&VisionError::Timeout { timeout_ms: 60000 }));
    }

    #[test]
    fn test_rate_limit_is_retryable() {
        assert!(is_retryable(&api_error(429)));
    }

    #[test]
    fn test_server_error_is_retryable() {
        assert!(is_retryable(&api_error(503)));
    }

    #[test]
    fn test_auth_error_not_retryable() {
        assert!(!is_retryable(&api_error(401)));
    }

    #[test]
    fn test_bad_request_not_retryable() {
        assert!(!is_retryable(&api_error(400)));
    }

    #[test]
    fn test_connection_error_retryable() {
        let err = VisionError::Request {
            endpoint: "https://example.invalid".to_string(),
            message: "error trying to connect: dns error".to_string(),
        };
        assert!(is_retryable(&err));
    }

    #[test]
    fn test_no_captions_not_retryable() {
        assert!(!is_retryable(&VisionError::NoCaptions));
    }

    #[test]
    fn test_read_error_not_retryable() {
        let err = VisionError::ReadImage {
            path: "missing.jpg".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(!is_retryable(&err));
    }

    #[test]
    fn test_backoff_exponential() {
        assert_eq!(backoff_duration(0, 1000), Duration::from_millis(1000));
        assert_eq!(backoff_duration(1, 1000), Duration::from_millis(2000));
        assert_eq!(backoff_duration(2, 1000), Duration::from_millis(4000));
    }

    #[test]
    fn test_backoff_capped_at_30s() {
        assert_eq!(backoff_duration(10, 1000), Duration::from_millis(30_000));
    }
}
