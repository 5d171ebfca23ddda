use std::sync::Arc;

use crate::config::Config;
use crate::github::client::GithubClient;
use crate::storage::{MemStorage, SavedIssueStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub github: Arc<GithubClient>,
    pub storage: Arc<dyn SavedIssueStore>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let github = GithubClient::new(&config.github)?;

        Ok(Self {
            config,
            github: Arc::new(github),
            storage: Arc::new(MemStorage::new()),
        })
    }
}
