use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// GitHub API configuration
    pub github: GithubConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Base URL for the GitHub REST API. Overridable mainly so a proxy
    /// or a local stand-in can be pointed at during development.
    pub api_base: String,
    /// Personal access token. Optional: without it GitHub applies the
    /// lower unauthenticated rate limits upstream.
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9000".to_string(),
            github: GithubConfig::default(),
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("ISSUE_FINDER_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(base) = std::env::var("GITHUB_API_BASE") {
            config.github.api_base = base;
        }
        // GITHUB_API_KEY takes precedence, GITHUB_TOKEN is the common fallback
        if let Ok(token) =
            std::env::var("GITHUB_API_KEY").or_else(|_| std::env::var("GITHUB_TOKEN"))
        {
            if !token.is_empty() {
                config.github.token = Some(token);
            }
        }
        if let Ok(val) = std::env::var("GITHUB_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.github.timeout_secs = v;
            }
        }

        config
    }
}
