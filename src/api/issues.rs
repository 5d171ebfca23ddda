use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::Query;

use crate::models::{IssueSearchParams, IssueSearchResponse, SavedIssue};
use crate::search::pipeline::{self, SearchPage};
use crate::search::query;
use crate::state::AppState;
use crate::storage::StorageError;

/// GET /api/issues - Search GitHub issues with the given filters:
///   1. Build the upstream query string (languages, difficulties, labels)
///   2. Primary search, with a single broadened retry for empty easy results
///   3. Concurrent repository lookup per issue for the primary language
///   4. Join against the saved-issue set
pub async fn search_issues(
    State(state): State<AppState>,
    Query(params): Query<IssueSearchParams>,
) -> Result<Json<IssueSearchResponse>, (StatusCode, String)> {
    let built = query::build_query(
        &params.query,
        &params.languages,
        &params.difficulties,
        &params.labels,
    );
    tracing::debug!(
        "GitHub search query: {built} (sort={}, page={}, per_page={})",
        params.sort.as_str(),
        params.page,
        params.per_page
    );

    let github = state.github.clone();
    let sort = params.sort;
    let (page, per_page) = (params.page, params.per_page);

    let search_page = pipeline::run_search(
        |q: String| {
            let github = github.clone();
            async move {
                let resp = github.search_issues(&q, sort, page, per_page).await?;
                Ok(SearchPage {
                    items: resp.items,
                    total_count: resp.total_count,
                })
            }
        },
        &built,
        &params.difficulties,
    )
    .await
    .map_err(|e| {
        tracing::error!("GitHub issue search failed: {e:#}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to fetch issues from GitHub: {e:#}"),
        )
    })?;

    let total_count = search_page.total_count;
    let github = state.github.clone();
    let mut issues = pipeline::enrich_issues(
        |repo_url: String| {
            let github = github.clone();
            async move { github.fetch_repository(&repo_url).await }
        },
        search_page.items,
    )
    .await;

    let saved_ids = state.storage.saved_ids();
    pipeline::mark_saved(&mut issues, &saved_ids);

    Ok(Json(IssueSearchResponse {
        issues,
        total_count,
        page: params.page,
        per_page: params.per_page,
    }))
}

/// POST /api/issues/{id}/save - Save an issue by upstream id
pub async fn save_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SavedIssue>, (StatusCode, String)> {
    match state.storage.save(&id) {
        Ok(record) => Ok(Json(record)),
        Err(e @ StorageError::AlreadySaved) => Err((StatusCode::BAD_REQUEST, e.to_string())),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}

#[derive(serde::Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// DELETE /api/issues/{id}/save - Remove an issue from the saved list
pub async fn unsave_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    match state.storage.unsave(&id) {
        Ok(()) => Ok(Json(MessageResponse {
            message: "Issue unsaved successfully".to_string(),
        })),
        Err(e @ StorageError::NotFound) => Err((StatusCode::NOT_FOUND, e.to_string())),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}

/// GET /api/saved-issues - List all saved-issue records
pub async fn list_saved(State(state): State<AppState>) -> Json<Vec<SavedIssue>> {
    Json(state.storage.saved_issues())
}
