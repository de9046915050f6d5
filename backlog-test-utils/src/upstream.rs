//! Mock Backlog API server for tests
//!
//! Wraps a [`wiremock::MockServer`] with helpers that mount the two search
//! endpoints the function calls.

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key the mocks expect on every request
pub const TEST_API_KEY: &str = "test-api-key";

/// Path of the issue listing endpoint
pub const ISSUES_PATH: &str = "/api/v2/issues";

/// Path of the wiki listing endpoint
pub const WIKIS_PATH: &str = "/api/v2/wikis";

/// A running mock Backlog instance
pub struct MockBacklog {
  pub server: MockServer,
}

impl MockBacklog {
  /// Start a new mock server on a random local port
  pub async fn start() -> Self {
    Self {
      server: MockServer::start().await,
    }
  }

  /// Base URL to place in the tracker settings
  pub fn uri(&self) -> String {
    self.server.uri()
  }

  /// Answer authenticated issue searches with `issues`
  pub async fn mount_issues(&self, issues: Value) {
    Mock::given(method("GET"))
      .and(path(ISSUES_PATH))
      .and(query_param("apiKey", TEST_API_KEY))
      .and(query_param("count", "10"))
      .respond_with(ResponseTemplate::new(200).set_body_json(issues))
      .mount(&self.server)
      .await;
  }

  /// Answer authenticated wiki searches with `wikis`
  pub async fn mount_wikis(&self, wikis: Value) {
    Mock::given(method("GET"))
      .and(path(WIKIS_PATH))
      .and(query_param("apiKey", TEST_API_KEY))
      .respond_with(ResponseTemplate::new(200).set_body_json(wikis))
      .mount(&self.server)
      .await;
  }

  /// Answer any request to `endpoint` with the given status and JSON body
  pub async fn mount_status(&self, endpoint: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
      .and(path(endpoint))
      .respond_with(ResponseTemplate::new(status).set_body_json(body))
      .mount(&self.server)
      .await;
  }

  /// Answer any request to `endpoint` with a raw, non-JSON body
  pub async fn mount_raw(&self, endpoint: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
      .and(path(endpoint))
      .respond_with(ResponseTemplate::new(status).set_body_string(body))
      .mount(&self.server)
      .await;
  }

  /// Query strings of every request the server has received, in order
  pub async fn received_queries(&self) -> Vec<String> {
    self
      .server
      .received_requests()
      .await
      .unwrap_or_default()
      .iter()
      .map(|request| request.url.query().unwrap_or_default().to_string())
      .collect()
  }
}
