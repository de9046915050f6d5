//! JSON fixtures shaped like Backlog API v2 records.

use serde_json::{Value, json};

/// A Backlog issue record with the fields the projection reads plus some
/// of the noise the real API returns.
pub fn issue(issue_key: &str, summary: &str, status: Option<&str>, assignee: Option<&str>, due_date: Option<&str>) -> Value {
  json!({
      "id": 1,
      "projectId": 1,
      "issueKey": issue_key,
      "keyId": 1,
      "issueType": { "id": 2, "projectId": 1, "name": "Task", "color": "#7ea800", "displayOrder": 0 },
      "summary": summary,
      "description": "",
      "priority": { "id": 3, "name": "Normal" },
      "status": status.map(|name| json!({ "id": 1, "projectId": 1, "name": name, "color": "#ed8077", "displayOrder": 1000 })),
      "assignee": assignee.map(|name| json!({ "id": 5, "userId": "user5", "name": name, "roleType": 1, "lang": "ja" })),
      "dueDate": due_date,
      "created": "2024-01-01T00:00:00Z",
      "updated": "2024-01-02T00:00:00Z"
  })
}

/// A Backlog wiki record.
pub fn wiki(name: &str, content: &str) -> Value {
  json!({
      "id": 1,
      "projectId": 1,
      "name": name,
      "content": content,
      "tags": [],
      "created": "2024-01-01T00:00:00Z",
      "updated": "2024-01-02T00:00:00Z"
  })
}

/// The error body Backlog returns alongside non-2xx responses.
pub fn error_body(message: &str, code: u32) -> Value {
  json!({
      "errors": [
          { "message": message, "code": code, "moreInfo": "" }
      ]
  })
}
