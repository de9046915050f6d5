//! # Backlog API Endpoints
//!
//! Search endpoint implementations for the Backlog resources the agent can
//! query.

pub mod issues;
pub mod wikis;
