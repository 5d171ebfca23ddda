//! Integration tests for the issue search pipeline.
//!
//! These exercise query construction, the fallback orchestration, the
//! enrichment fan-out, and the saved-state merge without a live GitHub
//! upstream: the orchestrator and enricher take the upstream call as a
//! closure, so the tests inject counting and failing stubs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use issue_finder::github::client::{GithubIssue, GithubLabel, GithubRepository};
use issue_finder::search::pipeline::{self, SearchPage};
use issue_finder::search::query;
use issue_finder::storage::{MemStorage, SavedIssueStore};

/// Helper: a raw search result as the GitHub API would return it.
fn raw_issue(id: u64, owner_repo: &str, labels: &[&str]) -> GithubIssue {
    GithubIssue {
        id,
        title: format!("Issue {id}"),
        body: Some("Steps to reproduce...".to_string()),
        html_url: format!("https://github.com/{owner_repo}/issues/{id}"),
        repository_url: format!("https://api.github.com/repos/{owner_repo}"),
        labels: labels
            .iter()
            .map(|n| GithubLabel {
                name: n.to_string(),
            })
            .collect(),
        state: "open".to_string(),
        comments: 3,
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: "2024-06-01T00:00:00Z".to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_empty_easy_search_falls_back_exactly_once() {
    let calls = AtomicUsize::new(0);
    let queries = Mutex::new(Vec::new());
    let built = query::build_query("", &strings(&["rust"]), &strings(&["easy"]), &[]);

    let page = pipeline::run_search(
        |q: String| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            queries.lock().unwrap().push(q);
            async move {
                if n == 0 {
                    Ok(SearchPage {
                        items: vec![],
                        total_count: 0,
                    })
                } else {
                    Ok(SearchPage {
                        items: vec![raw_issue(1, "rust-lang/rust", &["good first issue"])],
                        total_count: 1,
                    })
                }
            }
        },
        &built,
        &strings(&["easy"]),
    )
    .await
    .unwrap();

    // Fallback fully replaces the empty primary result
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items.len(), 1);

    let queries = queries.lock().unwrap();
    assert_eq!(
        queries[0],
        "state:open (language:rust) (label:\"good first issue\" label:\"beginner\" \
         label:\"easy\" label:\"good-first-issue\" label:\"first-timers-only\" \
         label:\"first-time\" label:\"newcomer\")"
    );
    assert_eq!(queries[1], "state:open (language:rust) good first issue");
}

#[tokio::test]
async fn test_empty_advanced_search_does_not_fall_back() {
    let calls = AtomicUsize::new(0);
    let built = query::build_query("", &[], &strings(&["advanced"]), &[]);

    let page = pipeline::run_search(
        |_q: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                Ok(SearchPage {
                    items: vec![],
                    total_count: 0,
                })
            }
        },
        &built,
        &strings(&["advanced"]),
    )
    .await
    .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn test_non_empty_easy_search_does_not_fall_back() {
    let calls = AtomicUsize::new(0);
    let built = query::build_query("", &[], &strings(&["easy"]), &[]);

    let page = pipeline::run_search(
        |_q: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                Ok(SearchPage {
                    items: vec![raw_issue(5, "octo/cat", &["easy"])],
                    total_count: 1,
                })
            }
        },
        &built,
        &strings(&["easy"]),
    )
    .await
    .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(page.total_count, 1);
}

#[tokio::test]
async fn test_failed_fallback_keeps_empty_primary_result() {
    let calls = AtomicUsize::new(0);
    let built = query::build_query("", &[], &strings(&["easy"]), &[]);

    let page = pipeline::run_search(
        |_q: String| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Ok(SearchPage {
                        items: vec![],
                        total_count: 0,
                    })
                } else {
                    Err(anyhow::anyhow!("403 rate limit exceeded"))
                }
            }
        },
        &built,
        &strings(&["easy"]),
    )
    .await
    .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(page.total_count, 0);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_failed_primary_search_propagates() {
    let result = pipeline::run_search(
        |_q: String| async move {
            Err::<SearchPage, _>(anyhow::anyhow!("503 Service Unavailable"))
        },
        "state:open",
        &[],
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_one_failed_lookup_degrades_only_that_issue() {
    let items = vec![
        raw_issue(1, "a/one", &[]),
        raw_issue(2, "b/two", &[]),
        raw_issue(3, "c/three", &[]),
    ];

    let issues = pipeline::enrich_issues(
        |repo_url: String| async move {
            if repo_url.ends_with("b/two") {
                Err(anyhow::anyhow!("404 Not Found"))
            } else if repo_url.ends_with("a/one") {
                Ok(GithubRepository {
                    full_name: "a/one".to_string(),
                    language: Some("Rust".to_string()),
                })
            } else {
                Ok(GithubRepository {
                    full_name: "c/three".to_string(),
                    language: Some("Go".to_string()),
                })
            }
        },
        items,
    )
    .await;

    assert_eq!(issues.len(), 3);
    assert_eq!(issues[0].repository, "a/one");
    assert_eq!(issues[0].language, "rust");
    // Degraded: repository derived from the HTML URL, language unknown
    assert_eq!(issues[1].repository, "b/two");
    assert_eq!(issues[1].language, "unknown");
    assert_eq!(issues[2].repository, "c/three");
    assert_eq!(issues[2].language, "go");
}

#[tokio::test]
async fn test_saved_issue_is_tagged_in_search_results() {
    let store = MemStorage::new();
    store.save("42").unwrap();

    let items = vec![raw_issue(42, "a/one", &[]), raw_issue(7, "b/two", &[])];
    let mut issues = pipeline::enrich_issues(
        |_repo_url: String| async move {
            Ok(GithubRepository {
                full_name: "a/one".to_string(),
                language: None,
            })
        },
        items,
    )
    .await;

    pipeline::mark_saved(&mut issues, &store.saved_ids());

    assert_eq!(issues[0].id, "42");
    assert_eq!(issues[0].is_saved, "true");
    assert_eq!(issues[1].is_saved, "false");
}

#[tokio::test]
async fn test_enrichment_preserves_labels_and_derives_difficulty() {
    let items = vec![raw_issue(9, "octo/cat", &["bug", "Good First Issue"])];
    let issues = pipeline::enrich_issues(
        |_repo_url: String| async move {
            Ok(GithubRepository {
                full_name: "octo/cat".to_string(),
                language: Some("TypeScript".to_string()),
            })
        },
        items,
    )
    .await;

    assert_eq!(issues[0].labels, vec!["bug", "Good First Issue"]);
    assert_eq!(issues[0].difficulty.as_str(), "easy");
    assert_eq!(issues[0].language, "typescript");
    assert_eq!(issues[0].state, "open");
}
