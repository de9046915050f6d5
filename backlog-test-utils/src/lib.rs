//! Test utilities shared across the backlog-search workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable isolation ([`EnvVarGuard`])
//! - Mock Backlog API servers ([`MockBacklog`])
//! - Upstream record fixtures ([`fixtures`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod upstream;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use upstream::{MockBacklog, TEST_API_KEY};
