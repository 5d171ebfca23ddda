//! # issue-finder
//!
//! Backend for discovering open GitHub issues by programming language,
//! difficulty tier, and label. Translates filter state into GitHub
//! Search API queries, enriches results with repository language data,
//! and tracks a small set of saved issues in memory.
//!
//! ## Pipeline
//!
//! ```text
//!   ┌──────────────┐
//!   │  Filter set   │  languages, difficulties, labels, query
//!   └──────┬───────┘
//!          ▼
//!   ┌──────────────┐
//!   │ Query Builder │  state:open + (language:…) + (label:"…")
//!   └──────┬───────┘
//!          ▼
//!   ┌──────────────────────┐
//!   │  Search Orchestrator  │  primary call; single broadened retry
//!   │                       │  when easy results come back empty
//!   └──────┬───────────────┘
//!          ▼
//!   ┌──────────────────────┐
//!   │  Repository Enricher  │  one concurrent lookup per issue,
//!   │                       │  per-issue degradation on failure
//!   └──────┬───────────────┘
//!          ▼
//!   ┌──────────────────────┐
//!   │  Saved-State Merger   │  isSaved join against the store
//!   └──────┬───────────────┘
//!          ▼
//!     Response payload
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the server and GitHub API
//! - [`models`] - API-facing data types: `Issue`, `SavedIssue`, `SearchFilters`
//! - [`search::difficulty`] - Label keyword tables and the difficulty classifier
//! - [`search::query`] - Upstream query assembly and the easy-fallback rewrite
//! - [`search::pipeline`] - Orchestration: fallback search, enrichment fan-out,
//!   saved-state merge
//! - [`github`] - Thin reqwest client over the GitHub search and repository APIs
//! - [`storage`] - `SavedIssueStore` trait and the in-memory implementation
//! - [`api`] - Axum HTTP handlers for issue search, save/unsave, and filters
//! - [`state`] - Shared application state with an injected store instance

pub mod api;
pub mod config;
pub mod github;
pub mod models;
pub mod search;
pub mod state;
pub mod storage;
