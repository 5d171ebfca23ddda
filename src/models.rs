use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::search::difficulty::Difficulty;

/// An issue as surfaced to the UI. Rebuilt from upstream data on every
/// search; `difficulty` and `is_saved` are derived per response and are
/// never cached across requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Upstream issue identifier, stable across requests
    pub id: String,
    pub title: String,
    /// Empty string when upstream omits the body
    pub body: String,
    pub url: String,
    /// `owner/name` of the owning repository
    pub repository: String,
    pub repository_url: String,
    /// Lowercase primary language of the repository, or `"unknown"`
    pub language: String,
    /// Label names in upstream order, duplicates possible
    pub labels: Vec<String>,
    /// Always `"open"` by construction: the search query is restricted
    /// to open issues
    pub state: String,
    pub comments: u64,
    pub created_at: String,
    pub updated_at: String,
    pub difficulty: Difficulty,
    /// `"true"` or `"false"`, joined against the saved-issue set
    pub is_saved: String,
}

/// A saved-issue record. `issue_id` is a weak reference: no existence
/// check is made against a live issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedIssue {
    pub id: Uuid,
    pub issue_id: String,
    pub saved_at: DateTime<Utc>,
}

/// Sort key passed through to the upstream search API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Updated,
    Created,
    Comments,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Updated => "updated",
            SortKey::Created => "created",
            SortKey::Comments => "comments",
        }
    }
}

/// Persisted filter preferences. A single logical row exists at a time;
/// the id is generated on first update and reused afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub difficulties: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub query: String,
}

/// Filter preferences update (same shape as `SearchFilters`, no id)
#[derive(Debug, Clone, Deserialize)]
pub struct FilterUpdate {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub difficulties: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub query: String,
}

/// Query parameters for GET /api/issues. The list fields accept repeated
/// parameters (`?languages=rust&languages=go`) or a single value.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueSearchParams {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub difficulties: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

/// Search response payload
#[derive(Debug, Clone, Serialize)]
pub struct IssueSearchResponse {
    pub issues: Vec<Issue>,
    pub total_count: u64,
    pub page: u32,
    pub per_page: u32,
}
