use std::collections::HashSet;
use std::future::Future;

use anyhow::Result;
use futures_util::future::join_all;

use crate::github::client::{GithubIssue, GithubRepository};
use crate::models::Issue;
use crate::search::difficulty;
use crate::search::query;

/// One page of raw search results, before enrichment.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub items: Vec<GithubIssue>,
    pub total_count: u64,
}

/// Run the primary search and, when it comes back empty for a request
/// that selected the easy difficulty, retry once with the broadened
/// query (quoted label searches are often stricter than intended
/// upstream). A successful fallback fully replaces the primary result;
/// a failed fallback is swallowed and the empty primary result stands.
/// Only the easy difficulty triggers the fallback.
pub async fn run_search<S, Fut>(
    search: S,
    built_query: &str,
    difficulties: &[String],
) -> Result<SearchPage>
where
    S: Fn(String) -> Fut,
    Fut: Future<Output = Result<SearchPage>>,
{
    let primary = search(built_query.to_string()).await?;

    let wants_easy = difficulties.iter().any(|d| d == "easy");
    if primary.total_count == 0 && wants_easy {
        let broadened = query::broaden_for_easy(built_query);
        tracing::info!("No results with strict labels, retrying broader easy search: {broadened}");
        match search(broadened).await {
            Ok(page) => return Ok(page),
            Err(e) => {
                tracing::warn!("Broader easy search failed, keeping empty result: {e:#}");
            }
        }
    }

    Ok(primary)
}

/// Resolve each issue's owning repository concurrently and map into the
/// response shape. One lookup per issue; all lookups are independent and
/// a failure degrades only that issue (repository name derived from the
/// issue's HTML URL, language unresolved).
pub async fn enrich_issues<F, Fut>(fetch_repo: F, items: Vec<GithubIssue>) -> Vec<Issue>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<GithubRepository>>,
{
    let lookups = items.into_iter().map(|raw| {
        let fetch_repo = &fetch_repo;
        async move {
            match fetch_repo(raw.repository_url.clone()).await {
                Ok(repo) => map_issue(raw, repo.full_name, repo.language),
                Err(e) => {
                    tracing::warn!("Repository lookup failed for {}: {e:#}", raw.html_url);
                    let slug = repo_slug_from_html_url(&raw.html_url);
                    map_issue(raw, slug, None)
                }
            }
        }
    });

    join_all(lookups).await
}

/// Tag each issue's saved state by membership in the saved-issue id set.
pub fn mark_saved(issues: &mut [Issue], saved_ids: &HashSet<String>) {
    for issue in issues.iter_mut() {
        issue.is_saved = if saved_ids.contains(&issue.id) {
            "true"
        } else {
            "false"
        }
        .to_string();
    }
}

/// Derive `owner/repo` from an issue's HTML URL: the 2nd and 3rd path
/// segments after the host.
fn repo_slug_from_html_url(html_url: &str) -> String {
    html_url
        .split('/')
        .skip(3)
        .take(2)
        .collect::<Vec<_>>()
        .join("/")
}

fn map_issue(raw: GithubIssue, repo_full_name: String, language: Option<String>) -> Issue {
    let labels: Vec<String> = raw.labels.into_iter().map(|l| l.name).collect();
    let difficulty = difficulty::classify(&labels);

    Issue {
        id: raw.id.to_string(),
        title: raw.title,
        body: raw.body.unwrap_or_default(),
        url: raw.html_url,
        repository_url: format!("https://github.com/{repo_full_name}"),
        repository: repo_full_name,
        language: language
            .map(|l| l.to_lowercase())
            .unwrap_or_else(|| "unknown".to_string()),
        labels,
        state: raw.state,
        comments: raw.comments,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
        difficulty,
        is_saved: "false".to_string(),
    }
}
