//! # Secret Provider
//!
//! Fetches the named secret bundle exactly once at cold start and exposes
//! key-based lookup into it. The bundle is immutable after loading; nothing
//! refreshes it for the lifetime of the process.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Errors raised while loading or reading the secret bundle
#[derive(Debug, Error)]
pub enum SecretError {
  #[error("Failed to retrieve secret '{secret_id}': {message}")]
  Provider { secret_id: String, message: String },
  #[error("Secret '{0}' has no string value")]
  EmptySecret(String),
  #[error("Secret '{secret_id}' is not a JSON object of string values")]
  Malformed {
    secret_id: String,
    #[source]
    source: serde_json::Error,
  },
  #[error("Key '{key}' not found in secret '{secret_id}'")]
  NotFound { secret_id: String, key: String },
  #[error("Secret value '{value}' is not a valid base URL")]
  InvalidBaseUrl {
    value: String,
    #[source]
    source: url::ParseError,
  },
}

/// A store able to return the raw string payload of a named secret.
pub trait SecretSource {
  /// Fetch the raw payload for `secret_id`.
  fn fetch(&self, secret_id: &str) -> impl Future<Output = Result<String, SecretError>> + Send;
}

/// Secret source backed by AWS Secrets Manager
pub struct AwsSecretsManager {
  client: Client,
}

impl AwsSecretsManager {
  /// Build a Secrets Manager client for the given region using the default
  /// credential chain.
  pub async fn new(region: &str) -> Self {
    let config = aws_config::defaults(BehaviorVersion::latest())
      .region(Region::new(region.to_string()))
      .load()
      .await;

    Self {
      client: Client::new(&config),
    }
  }
}

impl SecretSource for AwsSecretsManager {
  #[instrument(skip(self), level = "debug")]
  async fn fetch(&self, secret_id: &str) -> Result<String, SecretError> {
    let output = self
      .client
      .get_secret_value()
      .secret_id(secret_id)
      .send()
      .await
      .map_err(|err| SecretError::Provider {
        secret_id: secret_id.to_string(),
        message: DisplayErrorContext(&err).to_string(),
      })?;

    output
      .secret_string()
      .map(str::to_string)
      .ok_or_else(|| SecretError::EmptySecret(secret_id.to_string()))
  }
}

/// Key/value secrets loaded once and held for the process lifetime
#[derive(Clone)]
pub struct SecretBundle {
  secret_id: String,
  values: HashMap<String, String>,
}

impl SecretBundle {
  /// Fetch `secret_id` from `source` and parse it into a bundle.
  pub async fn load<S: SecretSource>(source: &S, secret_id: &str) -> Result<Self, SecretError> {
    info!("Loading secret bundle '{}'", secret_id);
    let raw = source.fetch(secret_id).await?;
    let bundle = Self::parse(secret_id, &raw)?;
    debug!("Secret bundle '{}' holds {} keys", secret_id, bundle.values.len());
    Ok(bundle)
  }

  /// Parse a raw secret payload. The payload must be a JSON object whose
  /// values are all strings.
  pub fn parse(secret_id: &str, raw: &str) -> Result<Self, SecretError> {
    let values = serde_json::from_str::<HashMap<String, String>>(raw).map_err(|source| SecretError::Malformed {
      secret_id: secret_id.to_string(),
      source,
    })?;

    Ok(Self {
      secret_id: secret_id.to_string(),
      values,
    })
  }

  /// Look up a single value by key.
  pub fn get(&self, key: &str) -> Result<&str, SecretError> {
    self
      .values
      .get(key)
      .map(String::as_str)
      .ok_or_else(|| SecretError::NotFound {
        secret_id: self.secret_id.clone(),
        key: key.to_string(),
      })
  }
}

// Values stay out of logs; only the key names are shown.
impl fmt::Debug for SecretBundle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
    keys.sort_unstable();
    f.debug_struct("SecretBundle")
      .field("secret_id", &self.secret_id)
      .field("keys", &keys)
      .finish()
  }
}
