use axum::routing::{delete, get, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use issue_finder::api;
use issue_finder::config::Config;
use issue_finder::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("GitHub API base: {}", config.github.api_base);
    tracing::info!(
        "GitHub token: {}",
        if config.github.token.is_some() {
            "configured"
        } else {
            "not set (unauthenticated rate limits apply)"
        }
    );

    let state = AppState::new(config.clone())?;

    let app = Router::new()
        .route("/api/issues", get(api::issues::search_issues))
        .route("/api/issues/{id}/save", post(api::issues::save_issue))
        .route("/api/issues/{id}/save", delete(api::issues::unsave_issue))
        .route("/api/saved-issues", get(api::issues::list_saved))
        .route("/api/filters", get(api::filters::get_filters))
        .route("/api/filters", post(api::filters::update_filters))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
