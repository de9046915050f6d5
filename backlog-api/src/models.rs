use backlog_core::truncate;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::consts::WIKI_CONTENT_LENGTH;

/// Represents a Backlog issue as returned by `/api/v2/issues`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogIssue {
  pub issue_key: String,
  pub summary: String,
  #[serde(default, deserialize_with = "non_empty_object")]
  pub status: Option<BacklogStatus>,
  #[serde(default, deserialize_with = "non_empty_object")]
  pub assignee: Option<BacklogUser>,
  pub due_date: Option<String>,
}

/// Treat `null` and `{}` alike as an absent sub-object.
fn non_empty_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  match Option::<Map<String, Value>>::deserialize(deserializer)? {
    Some(object) if !object.is_empty() => serde_json::from_value(Value::Object(object))
      .map(Some)
      .map_err(D::Error::custom),
    _ => Ok(None),
  }
}

/// Represents a Backlog issue status
#[derive(Debug, Deserialize)]
pub struct BacklogStatus {
  pub name: String,
}

/// Represents a Backlog user
#[derive(Debug, Deserialize)]
pub struct BacklogUser {
  pub name: String,
}

/// Represents a Backlog wiki page as returned by `/api/v2/wikis`
#[derive(Debug, Deserialize)]
pub struct BacklogWiki {
  pub name: String,
  pub content: String,
}

/// Error body Backlog sends with non-2xx responses
#[derive(Debug, Deserialize)]
pub struct BacklogErrorBody {
  pub errors: Vec<BacklogErrorDetail>,
}

/// A single entry of [`BacklogErrorBody`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogErrorDetail {
  pub message: String,
  pub code: Option<i64>,
  pub more_info: Option<String>,
}

/// Reduced issue shape returned to the agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
  pub issue_key: String,
  pub summary: String,
  pub status: Option<String>,
  pub assignee: Option<String>,
  pub due_date: Option<String>,
}

impl From<BacklogIssue> for IssueSummary {
  fn from(issue: BacklogIssue) -> Self {
    // The due date is only reported for issues that carry a status.
    let due_date = issue.status.as_ref().and(issue.due_date);

    Self {
      issue_key: issue.issue_key,
      summary: issue.summary,
      status: issue.status.map(|status| status.name),
      assignee: issue.assignee.map(|user| user.name),
      due_date,
    }
  }
}

/// Reduced wiki shape returned to the agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WikiSummary {
  pub name: String,
  pub content: String,
}

impl From<BacklogWiki> for WikiSummary {
  fn from(wiki: BacklogWiki) -> Self {
    Self {
      name: wiki.name,
      content: truncate(&wiki.content, WIKI_CONTENT_LENGTH),
    }
  }
}

/// Body of a successful issue search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSearchResult {
  pub issues: Vec<IssueSummary>,
}

impl IssueSearchResult {
  pub fn from_records(records: Vec<BacklogIssue>) -> Self {
    Self {
      issues: records.into_iter().map(IssueSummary::from).collect(),
    }
  }
}

/// Body of a successful wiki search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WikiSearchResult {
  /// Wiki summaries; the agent's schema names this list `issues`
  pub issues: Vec<WikiSummary>,
}

impl WikiSearchResult {
  pub fn from_records(records: Vec<BacklogWiki>) -> Self {
    Self {
      issues: records.into_iter().map(WikiSummary::from).collect(),
    }
  }
}
