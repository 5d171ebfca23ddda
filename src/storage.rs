use std::collections::HashSet;

use chrono::Utc;
use parking_lot::RwLock;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{FilterUpdate, SavedIssue, SearchFilters};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Issue already saved")]
    AlreadySaved,
    #[error("Issue not found in saved list")]
    NotFound,
}

/// Persistence capability the pipeline depends on. A constructed instance
/// is handed to the request context through `AppState`; a durable backend
/// can be substituted without touching the search pipeline.
pub trait SavedIssueStore: Send + Sync {
    /// Create a saved record for `issue_id`. Uniqueness is enforced here,
    /// not by a storage-level constraint.
    fn save(&self, issue_id: &str) -> Result<SavedIssue, StorageError>;
    /// Remove exactly one record matching `issue_id`.
    fn unsave(&self, issue_id: &str) -> Result<(), StorageError>;
    fn is_saved(&self, issue_id: &str) -> bool;
    fn saved_issues(&self) -> Vec<SavedIssue>;
    fn saved_ids(&self) -> HashSet<String>;
    fn filters(&self) -> Option<SearchFilters>;
    /// Replace the single preferences slot, last-write-wins. The row id
    /// is generated on first update and reused afterwards.
    fn update_filters(&self, update: FilterUpdate) -> SearchFilters;
}

/// In-memory store. Everything is lost on restart by design.
#[derive(Default)]
pub struct MemStorage {
    saved: RwLock<Vec<SavedIssue>>,
    filters: RwLock<Option<SearchFilters>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SavedIssueStore for MemStorage {
    fn save(&self, issue_id: &str) -> Result<SavedIssue, StorageError> {
        let mut saved = self.saved.write();
        if saved.iter().any(|s| s.issue_id == issue_id) {
            return Err(StorageError::AlreadySaved);
        }

        let record = SavedIssue {
            id: Uuid::new_v4(),
            issue_id: issue_id.to_string(),
            saved_at: Utc::now(),
        };
        saved.push(record.clone());
        Ok(record)
    }

    fn unsave(&self, issue_id: &str) -> Result<(), StorageError> {
        let mut saved = self.saved.write();
        match saved.iter().position(|s| s.issue_id == issue_id) {
            Some(idx) => {
                saved.remove(idx);
                Ok(())
            }
            None => Err(StorageError::NotFound),
        }
    }

    fn is_saved(&self, issue_id: &str) -> bool {
        self.saved.read().iter().any(|s| s.issue_id == issue_id)
    }

    fn saved_issues(&self) -> Vec<SavedIssue> {
        self.saved.read().clone()
    }

    fn saved_ids(&self) -> HashSet<String> {
        self.saved
            .read()
            .iter()
            .map(|s| s.issue_id.clone())
            .collect()
    }

    fn filters(&self) -> Option<SearchFilters> {
        self.filters.read().clone()
    }

    fn update_filters(&self, update: FilterUpdate) -> SearchFilters {
        let mut slot = self.filters.write();
        let id = slot
            .as_ref()
            .and_then(|f| f.id)
            .or_else(|| Some(Uuid::new_v4()));

        let filters = SearchFilters {
            id,
            languages: update.languages,
            difficulties: update.difficulties,
            labels: update.labels,
            sort: update.sort,
            query: update.query,
        };
        *slot = Some(filters.clone());
        filters
    }
}
