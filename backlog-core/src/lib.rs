//! # Backlog Core
//!
//! Shared building blocks for the Backlog search function: environment
//! configuration, the one-shot secret bundle loaded at cold start, the
//! resolved tracker settings, and small text helpers used when projecting
//! upstream records.

pub mod config;
pub mod secrets;
pub mod settings;
pub mod text;

pub use config::{AppConfig, ConfigError};
pub use secrets::{AwsSecretsManager, SecretBundle, SecretError, SecretSource};
pub use settings::BacklogSettings;
pub use text::truncate;
