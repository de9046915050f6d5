//! # Action Envelope
//!
//! Request and response shapes of the agent framework's action-group
//! contract. Only `actionGroup`, `apiPath`, `httpMethod` and `parameters`
//! drive behaviour; the remaining request fields are accepted for logging.

use backlog_api::QueryParams;
use serde::{Deserialize, Serialize};

/// Version tag the agent framework expects on every response
pub const MESSAGE_VERSION: &str = "1.0";

/// Content type key the body is published under
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Inbound invocation descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
  pub action_group: String,
  pub api_path: String,
  pub http_method: String,
  #[serde(default)]
  pub parameters: Vec<Parameter>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message_version: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub session_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub input_text: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub agent: Option<AgentInfo>,
}

impl ActionRequest {
  /// Fold the parameter list into a query mapping (last value wins)
  pub fn query_params(&self) -> QueryParams {
    self
      .parameters
      .iter()
      .map(|param| (param.name.as_str(), param.value.as_str()))
      .collect()
  }

  /// Parameters rendered as `name=value` pairs in request order, for logging
  pub fn parameter_summary(&self) -> String {
    self
      .parameters
      .iter()
      .map(|param| format!("{}={}", param.name, param.value))
      .collect::<Vec<_>>()
      .join(", ")
  }
}

/// A single named parameter supplied by the agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,
  pub value: String,
}

/// Identity of the invoking agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInfo {
  pub name: Option<String>,
  pub id: Option<String>,
  pub alias: Option<String>,
  pub version: Option<String>,
}

/// Outbound envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
  pub message_version: String,
  pub response: ActionResult,
}

/// The echoed request descriptor plus the result body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
  pub action_group: String,
  pub api_path: String,
  pub http_method: String,
  pub http_status_code: u16,
  pub response_body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
  #[serde(rename = "application/json")]
  pub json: JsonBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonBody {
  /// JSON text of the operation result
  pub body: String,
}

impl ActionResponse {
  /// Wrap an encoded body, echoing the request descriptor. The status code is
  /// always 200.
  pub fn ok(request: &ActionRequest, body: String) -> Self {
    Self {
      message_version: MESSAGE_VERSION.to_string(),
      response: ActionResult {
        action_group: request.action_group.clone(),
        api_path: request.api_path.clone(),
        http_method: request.http_method.clone(),
        http_status_code: 200,
        response_body: ResponseBody {
          json: JsonBody { body },
        },
      },
    }
  }

  /// The encoded result body
  pub fn body(&self) -> &str {
    &self.response.response_body.json.body
  }
}
