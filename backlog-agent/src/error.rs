use backlog_api::BacklogError;
use thiserror::Error;

/// Failures that end an invocation without a response envelope
#[derive(Debug, Error)]
pub enum DispatchError {
  #[error(transparent)]
  Backlog(#[from] BacklogError),
  #[error("Failed to encode response body: {0}")]
  Encode(#[from] serde_json::Error),
  #[error("No route for API path '{0}'")]
  RouteNotFound(String),
}
