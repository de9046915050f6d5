//! # Backlog Wiki Endpoints
//!
//! Wiki search against `/api/v2/wikis`. There is no page size; Backlog
//! returns every page matching the caller's filters.

use tracing::{debug, info, instrument};

use crate::client::BacklogClient;
use crate::error::BacklogError;
use crate::models::{BacklogWiki, WikiSearchResult};
use crate::query::QueryParams;

impl BacklogClient {
  /// Search wiki pages and project them into summaries with truncated content.
  ///
  /// # Errors
  ///
  /// Returns an error if the request cannot be sent, Backlog answers with a
  /// non-2xx status, or the body is not a list of wiki pages.
  #[instrument(skip(self, params), level = "debug")]
  pub async fn search_wikis(&self, params: &QueryParams) -> Result<WikiSearchResult, BacklogError> {
    info!("Searching wikis with parameters: {:?}", params.names().collect::<Vec<_>>());

    let request = self.get("wikis").query(params.as_pairs());

    let records: Vec<BacklogWiki> = self.send_json(request).await?;
    debug!("Received {} wiki pages", records.len());

    Ok(WikiSearchResult::from_records(records))
  }
}
