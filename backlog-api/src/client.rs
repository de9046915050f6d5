//! # Backlog HTTP Client
//!
//! HTTP client for Backlog API v2. Authentication is an API key passed as a
//! query parameter on every request.

use backlog_core::BacklogSettings;
use reqwest::{Client, RequestBuilder, header};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::consts::{API_KEY_PARAM, USER_AGENT};
use crate::error::BacklogError;
use crate::models::BacklogErrorBody;

/// Represents a Backlog API client
pub struct BacklogClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) api_key: String,
}

impl BacklogClient {
  /// Create a new Backlog client from resolved settings
  pub fn new(settings: &BacklogSettings) -> Self {
    Self {
      client: Client::new(),
      base_url: settings.base_url.clone(),
      api_key: settings.api_key.clone(),
    }
  }

  /// Start an authenticated GET request for an `/api/v2` resource
  pub(crate) fn get(&self, resource: &str) -> RequestBuilder {
    let url = format!("{}/api/v2/{}", self.base_url, resource);
    trace!("Backlog API URL: {}", url);

    self
      .client
      .get(url)
      .header(header::USER_AGENT, USER_AGENT)
      .query(&[(API_KEY_PARAM, self.api_key.as_str())])
  }

  /// Send a request and decode a successful JSON body
  pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, BacklogError> {
    // The request URL carries the API key, so it never reaches the error text.
    let response = request.send().await.map_err(|err| BacklogError::Request(err.without_url()))?;

    let status = response.status();
    debug!("Backlog API response status: {}", status);

    if status.is_success() {
      let body = response
        .text()
        .await
        .map_err(|err| BacklogError::Request(err.without_url()))?;
      return serde_json::from_str(&body).map_err(BacklogError::Decode);
    }

    let error_text = response.text().await.unwrap_or_default();
    warn!("Backlog API error: HTTP {} - {}", status, error_text);

    match status {
      reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => Err(BacklogError::Authentication),
      _ => Err(BacklogError::UnexpectedStatus {
        status: status.as_u16(),
        message: describe_error_body(&error_text),
      }),
    }
  }
}

/// Prefer the messages from Backlog's structured error body, falling back to
/// the raw text.
fn describe_error_body(text: &str) -> String {
  match serde_json::from_str::<BacklogErrorBody>(text) {
    Ok(body) if !body.errors.is_empty() => body
      .errors
      .iter()
      .map(|error| error.message.as_str())
      .collect::<Vec<_>>()
      .join("; "),
    _ => text.to_string(),
  }
}
