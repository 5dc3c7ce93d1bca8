//! Publish error type.

use reqwest::StatusCode;
use thiserror::Error;

/// Why a publish did not go through.
///
/// Callers treat every variant the same way; the variants only change the
/// message and the attached source.
#[derive(Debug, Error)]
pub enum PublishError {
    /// No file was selected, or it vanished before the click.
    #[error("File not found")]
    NotFound,

    /// The storage read was rejected.
    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),

    /// The request could not be sent or no response came back.
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("{}", response_message(*status, body))]
    Response { status: StatusCode, body: String },
}

fn response_message(status: StatusCode, body: &str) -> String {
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(PublishError::NotFound.to_string(), "File not found");
    }

    #[test]
    fn test_response_message_includes_body() {
        let err = PublishError::Response {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error: boom");
    }

    #[test]
    fn test_response_message_without_body() {
        let err = PublishError::Response {
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP 401 Unauthorized");
    }
}
