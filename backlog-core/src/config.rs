//! Process configuration read from the environment.
//!
//! The function has no configuration files. Everything it needs to locate
//! its secret bundle comes from variables set on the deployment.

use thiserror::Error;

/// Environment variable holding the secret identifier.
pub const ENV_SECRET_NAME: &str = "SECRET_NAME";

/// Environment variable holding the region of the secret store.
pub const ENV_REGION_NAME: &str = "REGION_NAME";

/// Environment variable toggling strict routing of unknown API paths.
pub const ENV_STRICT_ROUTES: &str = "BACKLOG_STRICT_ROUTES";

/// Errors raised while reading process configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Required environment variable '{0}' is not set")]
  MissingVar(&'static str),
}

/// Configuration resolved once at cold start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  /// Identifier of the secret bundle in the secret store
  pub secret_name: String,
  /// Region the secret store lives in
  pub region: String,
  /// Reject unknown API paths instead of answering with an empty body
  pub strict_routes: bool,
}

impl AppConfig {
  /// Load configuration from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Load configuration through an arbitrary variable lookup.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let required = |name: &'static str| {
      lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
    };

    Ok(Self {
      secret_name: required(ENV_SECRET_NAME)?,
      region: required(ENV_REGION_NAME)?,
      strict_routes: lookup(ENV_STRICT_ROUTES).as_deref().is_some_and(parse_flag),
    })
  }
}

/// Interpret common truthy spellings of a boolean flag.
fn parse_flag(value: &str) -> bool {
  matches!(
    value.trim().to_ascii_lowercase().as_str(),
    "1" | "true" | "yes" | "on"
  )
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use backlog_test_utils::EnvVarGuard;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| vars.get(name).cloned()
  }

  #[test]
  fn test_from_lookup_reads_required_vars() {
    let config = AppConfig::from_lookup(lookup_from(&[
      (ENV_SECRET_NAME, "backlog/credentials"),
      (ENV_REGION_NAME, "ap-northeast-1"),
    ]))
    .unwrap();

    assert_eq!(config.secret_name, "backlog/credentials");
    assert_eq!(config.region, "ap-northeast-1");
    assert!(!config.strict_routes);
  }

  #[test]
  fn test_missing_secret_name_is_reported() {
    let err = AppConfig::from_lookup(lookup_from(&[(ENV_REGION_NAME, "ap-northeast-1")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingVar(ENV_SECRET_NAME));
    assert!(err.to_string().contains("SECRET_NAME"));
  }

  #[test]
  fn test_blank_region_counts_as_missing() {
    let err = AppConfig::from_lookup(lookup_from(&[
      (ENV_SECRET_NAME, "backlog/credentials"),
      (ENV_REGION_NAME, "   "),
    ]))
    .unwrap_err();
    assert_eq!(err, ConfigError::MissingVar(ENV_REGION_NAME));
  }

  #[test]
  fn test_strict_routes_flag_spellings() {
    for (raw, expected) in [("1", true), ("TRUE", true), ("yes", true), (" on ", true), ("0", false), ("nope", false)] {
      let config = AppConfig::from_lookup(lookup_from(&[
        (ENV_SECRET_NAME, "s"),
        (ENV_REGION_NAME, "r"),
        (ENV_STRICT_ROUTES, raw),
      ]))
      .unwrap();
      assert_eq!(config.strict_routes, expected, "flag value {raw:?}");
    }
  }

  #[test]
  fn test_from_env_uses_process_environment() {
    let secret = EnvVarGuard::new(ENV_SECRET_NAME);
    let region = EnvVarGuard::new(ENV_REGION_NAME);
    let strict = EnvVarGuard::new(ENV_STRICT_ROUTES);
    secret.set("backlog/env-secret");
    region.set("us-east-1");
    strict.remove();

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.secret_name, "backlog/env-secret");
    assert_eq!(config.region, "us-east-1");
    assert!(!config.strict_routes);
  }
}
