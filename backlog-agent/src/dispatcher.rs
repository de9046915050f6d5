//! # Request Dispatcher
//!
//! Routes an action request to the matching Backlog search and wraps the
//! encoded result in the response envelope. Each invocation is independent;
//! the only shared state is the client built at cold start.

use backlog_api::BacklogClient;
use tracing::{info, instrument, warn};

use crate::envelope::{ActionRequest, ActionResponse};
use crate::error::DispatchError;

/// Body returned for API paths with no matching search
pub const EMPTY_BODY: &str = "{}";

/// Searches reachable through the action group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
  Issues,
  Wikis,
  Unknown,
}

impl Route {
  /// Match an API path exactly
  pub fn from_api_path(api_path: &str) -> Self {
    match api_path {
      "/issues" => Self::Issues,
      "/wikis" => Self::Wikis,
      _ => Self::Unknown,
    }
  }
}

/// Single entry point for action requests
pub struct Dispatcher {
  client: BacklogClient,
  strict_routes: bool,
}

impl Dispatcher {
  /// Create a dispatcher. With `strict_routes` unknown paths fail instead of
  /// answering with an empty body.
  pub const fn new(client: BacklogClient, strict_routes: bool) -> Self {
    Self { client, strict_routes }
  }

  /// Handle one invocation.
  ///
  /// # Errors
  ///
  /// Upstream, decoding and encoding failures end the invocation with an
  /// error instead of a crafted response. In strict mode an unknown API path
  /// fails with [`DispatchError::RouteNotFound`].
  #[instrument(skip_all, fields(api_path = %request.api_path), level = "debug")]
  pub async fn handle(&self, request: ActionRequest) -> Result<ActionResponse, DispatchError> {
    info!(
      action_group = %request.action_group,
      http_method = %request.http_method,
      session_id = request.session_id.as_deref().unwrap_or_default(),
      input_text = request.input_text.as_deref().unwrap_or_default(),
      parameters = %request.parameter_summary(),
      "Received action request for {}",
      request.api_path
    );

    let params = request.query_params();
    let body = match Route::from_api_path(&request.api_path) {
      Route::Issues => serde_json::to_string(&self.client.search_issues(&params).await?)?,
      Route::Wikis => serde_json::to_string(&self.client.search_wikis(&params).await?)?,
      Route::Unknown if self.strict_routes => {
        return Err(DispatchError::RouteNotFound(request.api_path));
      }
      Route::Unknown => {
        warn!("No search matches API path '{}', answering with an empty body", request.api_path);
        EMPTY_BODY.to_string()
      }
    };

    Ok(ActionResponse::ok(&request, body))
  }
}

#[cfg(test)]
mod tests {
  use backlog_core::BacklogSettings;
  use serde_json::json;

  use super::*;

  // Unknown routes never reach the network, so an unroutable base URL is fine.
  fn offline_dispatcher(strict_routes: bool) -> Dispatcher {
    let settings = BacklogSettings::new("unused", "http://127.0.0.1:9").unwrap();
    Dispatcher::new(BacklogClient::new(&settings), strict_routes)
  }

  fn request(api_path: &str) -> ActionRequest {
    serde_json::from_value(json!({
        "actionGroup": "BacklogSearch",
        "apiPath": api_path,
        "httpMethod": "GET",
        "parameters": []
    }))
    .unwrap()
  }

  #[test]
  fn test_route_matching_is_exact() {
    assert_eq!(Route::from_api_path("/issues"), Route::Issues);
    assert_eq!(Route::from_api_path("/wikis"), Route::Wikis);
    assert_eq!(Route::from_api_path("/issues/"), Route::Unknown);
    assert_eq!(Route::from_api_path("/Issues"), Route::Unknown);
    assert_eq!(Route::from_api_path(""), Route::Unknown);
  }

  #[tokio::test]
  async fn test_unknown_path_answers_empty_body() {
    let response = offline_dispatcher(false).handle(request("/unknown")).await.unwrap();

    assert_eq!(response.body(), EMPTY_BODY);
    assert_eq!(response.response.http_status_code, 200);
    assert_eq!(response.response.api_path, "/unknown");
  }

  #[tokio::test]
  async fn test_unknown_path_fails_in_strict_mode() {
    let err = offline_dispatcher(true).handle(request("/projects")).await.unwrap_err();

    assert!(matches!(err, DispatchError::RouteNotFound(ref path) if path == "/projects"));
  }
}
