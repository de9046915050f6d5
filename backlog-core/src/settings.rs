//! Upstream tracker settings resolved from the secret bundle.

use std::fmt;

use url::Url;

use crate::secrets::{SecretBundle, SecretError};

/// Secret key holding the tracker API key.
pub const API_KEY_SECRET: &str = "BacklogApiKey";

/// Secret key holding the tracker base URL.
pub const BASE_URL_SECRET: &str = "BacklogBaseURL";

/// Immutable settings handed to the tracker client
#[derive(Clone, PartialEq, Eq)]
pub struct BacklogSettings {
  pub api_key: String,
  /// Base URL without a trailing slash
  pub base_url: String,
}

impl BacklogSettings {
  /// Build settings from explicit values, validating the base URL.
  pub fn new(api_key: &str, base_url: &str) -> Result<Self, SecretError> {
    Url::parse(base_url).map_err(|source| SecretError::InvalidBaseUrl {
      value: base_url.to_string(),
      source,
    })?;

    Ok(Self {
      api_key: api_key.to_string(),
      base_url: base_url.trim_end_matches('/').to_string(),
    })
  }

  /// Resolve both values eagerly so a misconfigured secret fails at cold start.
  pub fn from_bundle(bundle: &SecretBundle) -> Result<Self, SecretError> {
    let api_key = bundle.get(API_KEY_SECRET)?;
    let base_url = bundle.get(BASE_URL_SECRET)?;
    Self::new(api_key, base_url)
  }
}

impl fmt::Debug for BacklogSettings {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BacklogSettings")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .finish()
  }
}
