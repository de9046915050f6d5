//! Constants for the backlog-api client.

/// User-Agent header value for the Backlog API client
pub const USER_AGENT: &str = concat!("backlog-search/", env!("CARGO_PKG_VERSION"));

/// Issue records requested per search
pub const ISSUE_PAGE_SIZE: u32 = 10;

/// Characters of wiki content kept before truncation
pub const WIKI_CONTENT_LENGTH: usize = 100;

/// Query parameter carrying the API key
pub(crate) const API_KEY_PARAM: &str = "apiKey";

/// Query parameter carrying the page size
pub(crate) const COUNT_PARAM: &str = "count";
