//! # Backlog Issue Endpoints
//!
//! Issue search against `/api/v2/issues`, limited to a single page of
//! [`ISSUE_PAGE_SIZE`] records.

use tracing::{debug, info, instrument, trace};

use crate::client::BacklogClient;
use crate::consts::{COUNT_PARAM, ISSUE_PAGE_SIZE};
use crate::error::BacklogError;
use crate::models::{BacklogIssue, IssueSearchResult};
use crate::query::QueryParams;

impl BacklogClient {
  /// Search issues and project them into summaries.
  ///
  /// The fixed `count` is sent ahead of the caller's parameters. A caller
  /// supplied `count` is appended as a second pair rather than replacing it,
  /// leaving Backlog to decide which one applies.
  ///
  /// # Errors
  ///
  /// Returns an error if the request cannot be sent, Backlog answers with a
  /// non-2xx status, or the body is not a list of issues.
  #[instrument(skip(self, params), level = "debug")]
  pub async fn search_issues(&self, params: &QueryParams) -> Result<IssueSearchResult, BacklogError> {
    info!("Searching issues with parameters: {:?}", params.names().collect::<Vec<_>>());

    let request = self
      .get("issues")
      .query(&[(COUNT_PARAM, ISSUE_PAGE_SIZE)])
      .query(params.as_pairs());

    let records: Vec<BacklogIssue> = self.send_json(request).await?;
    debug!("Received {} issues", records.len());
    trace!("Issues: {:?}", records);

    Ok(IssueSearchResult::from_records(records))
  }
}

#[cfg(test)]
mod tests {
  use backlog_core::BacklogSettings;
  use backlog_test_utils::upstream::ISSUES_PATH;
  use backlog_test_utils::{MockBacklog, TEST_API_KEY, fixtures};
  use serde_json::json;

  use super::*;

  fn client_for(mock: &MockBacklog) -> BacklogClient {
    BacklogClient::new(&BacklogSettings::new(TEST_API_KEY, &mock.uri()).unwrap())
  }

  #[tokio::test]
  async fn test_search_issues_projects_records() -> Result<(), BacklogError> {
    let mock = MockBacklog::start().await;
    mock
      .mount_issues(json!([
        fixtures::issue("TEST-1", "Fix bug", Some("Open"), None, Some("2024-01-01")),
        fixtures::issue("TEST-2", "No status", None, Some("Carol"), Some("2024-05-05")),
      ]))
      .await;
    let client = client_for(&mock);

    let result = client
      .search_issues(&QueryParams::from_pairs([("keyword", "bug")]))
      .await?;

    assert_eq!(result.issues.len(), 2);
    assert_eq!(result.issues[0].issue_key, "TEST-1");
    assert_eq!(result.issues[0].status.as_deref(), Some("Open"));
    assert_eq!(result.issues[0].due_date.as_deref(), Some("2024-01-01"));
    assert_eq!(result.issues[1].status, None);
    assert_eq!(result.issues[1].due_date, None);
    assert_eq!(result.issues[1].assignee.as_deref(), Some("Carol"));

    Ok(())
  }

  #[tokio::test]
  async fn test_query_order_is_api_key_count_then_caller_params() -> Result<(), BacklogError> {
    let mock = MockBacklog::start().await;
    mock.mount_issues(json!([])).await;
    let client = client_for(&mock);

    client
      .search_issues(&QueryParams::from_pairs([
        ("keyword", "bug"),
        ("projectId[]", "42"),
        ("keyword", "crash"),
      ]))
      .await?;

    let queries = mock.received_queries().await;
    assert_eq!(
      queries,
      vec!["apiKey=test-api-key&count=10&keyword=crash&projectId%5B%5D=42".to_string()]
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_caller_count_is_sent_after_fixed_count() -> Result<(), BacklogError> {
    let mock = MockBacklog::start().await;
    mock.mount_issues(json!([])).await;
    let client = client_for(&mock);

    client
      .search_issues(&QueryParams::from_pairs([("count", "50")]))
      .await?;

    let queries = mock.received_queries().await;
    assert_eq!(queries, vec!["apiKey=test-api-key&count=10&count=50".to_string()]);

    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_unauthorized() {
    let mock = MockBacklog::start().await;
    mock
      .mount_status(ISSUES_PATH, 401, fixtures::error_body("Authenticate error.", 11))
      .await;
    let client = client_for(&mock);

    let result = client.search_issues(&QueryParams::new()).await;
    assert!(matches!(result, Err(BacklogError::Authentication)));
  }

  #[tokio::test]
  async fn test_search_issues_reports_backlog_error_message() {
    let mock = MockBacklog::start().await;
    mock
      .mount_status(ISSUES_PATH, 400, fixtures::error_body("No project.", 6))
      .await;
    let client = client_for(&mock);

    let err = client.search_issues(&QueryParams::new()).await.unwrap_err();
    match err {
      BacklogError::UnexpectedStatus { status, message } => {
        assert_eq!(status, 400);
        assert_eq!(message, "No project.");
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[tokio::test]
  async fn test_search_issues_rejects_unexpected_shape() {
    let mock = MockBacklog::start().await;
    mock.mount_raw(ISSUES_PATH, 200, r#"{"issueKey":"TEST-1"}"#).await;
    let client = client_for(&mock);

    let result = client.search_issues(&QueryParams::new()).await;
    assert!(matches!(result, Err(BacklogError::Decode(_))));
  }
}
