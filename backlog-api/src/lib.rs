//! # Backlog API Client
//!
//! Read-only Backlog API v2 integration for the two searches the agent
//! exposes: issues and wikis. Upstream records are projected into the reduced
//! summary shapes returned to the agent.

mod client;
mod consts;
mod endpoints;
mod error;
pub mod models;
mod query;

// Re-export the client
pub use client::BacklogClient;
pub use consts::{ISSUE_PAGE_SIZE, WIKI_CONTENT_LENGTH};
pub use error::BacklogError;
// Re-export models
pub use models::{
  BacklogIssue, BacklogStatus, BacklogUser, BacklogWiki, IssueSearchResult, IssueSummary, WikiSearchResult,
  WikiSummary,
};
pub use query::QueryParams;
