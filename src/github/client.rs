use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::GithubConfig;
use crate::models::SortKey;

const USER_AGENT: &str = "issue-finder";

/// Raw issue as returned by the GitHub search API. Only the fields the
/// pipeline consumes are deserialized; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubIssue {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub html_url: String,
    pub repository_url: String,
    pub labels: Vec<GithubLabel>,
    pub state: String,
    pub comments: u64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubLabel {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubSearchResponse {
    pub items: Vec<GithubIssue>,
    pub total_count: u64,
}

/// Repository metadata from the per-issue `repository_url` lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepository {
    pub full_name: String,
    pub language: Option<String>,
}

/// Thin client over the GitHub REST API. One reqwest client is built at
/// startup and shared across all requests.
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", USER_AGENT);

        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("token {token}"));
        }

        req
    }

    /// One page of issue search results, sorted descending by the given
    /// key. `page` and `per_page` pass through unvalidated.
    pub async fn search_issues(
        &self,
        query: &str,
        sort: SortKey,
        page: u32,
        per_page: u32,
    ) -> Result<GithubSearchResponse> {
        let url = format!("{}/search/issues", self.base_url);

        let resp = self
            .get(&url)
            .query(&[
                ("q", query.to_string()),
                ("sort", sort.as_str().to_string()),
                ("order", "desc".to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ])
            .send()
            .await
            .context("Failed to call GitHub search API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("GitHub search API returned {status}: {body}");
        }

        resp.json()
            .await
            .context("Failed to parse GitHub search response")
    }

    /// Repository metadata lookup via the `repository_url` carried on
    /// each search result.
    pub async fn fetch_repository(&self, repo_url: &str) -> Result<GithubRepository> {
        let resp = self
            .get(repo_url)
            .send()
            .await
            .context("Failed to call GitHub repository API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            anyhow::bail!("GitHub repository API returned {status}");
        }

        resp.json()
            .await
            .context("Failed to parse GitHub repository response")
    }
}
