//! Errors raised by the Backlog API client.

use thiserror::Error;

/// Failures of a single upstream call
#[derive(Debug, Error)]
pub enum BacklogError {
  #[error("Request to Backlog failed: {0}")]
  Request(#[source] reqwest::Error),
  #[error("Authentication failed. Please check the Backlog API key.")]
  Authentication,
  #[error("Unexpected error: HTTP {status} - {message}")]
  UnexpectedStatus { status: u16, message: String },
  #[error("Failed to parse Backlog response: {0}")]
  Decode(#[source] serde_json::Error),
}
