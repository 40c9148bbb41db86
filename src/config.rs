use std::net::IpAddr;
use std::time::Duration;

use crate::catalog::preview::DEFAULT_WIDTH;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub preview_width: usize,
    pub github: GitHubConfig,
}

/// Where and how the outbound GitHub calls are made.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub raw_base_url: String,
    pub api_base_url: String,
    pub asset_dir: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            raw_base_url: "https://raw.githubusercontent.com".to_string(),
            api_base_url: "https://api.github.com".to_string(),
            asset_dir: "images".to_string(),
            token: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_or("DATABASE_URL", "sqlite://projex.db");

        let host: IpAddr = env_or("PROJEX_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PROJEX_HOST: {e}"))?;

        let port: u16 = env_or("PROJEX_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid PROJEX_PORT: {e}"))?;

        let log_level = env_or("PROJEX_LOG_LEVEL", "info");

        let preview_width: usize = env_or("PROJEX_PREVIEW_WIDTH", &DEFAULT_WIDTH.to_string())
            .parse()
            .map_err(|e| format!("Invalid PROJEX_PREVIEW_WIDTH: {e}"))?;

        let timeout_secs: u64 = env_or("PROJEX_HTTP_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|e| format!("Invalid PROJEX_HTTP_TIMEOUT_SECS: {e}"))?;

        let defaults = GitHubConfig::default();
        let github = GitHubConfig {
            raw_base_url: trim_base_url(&env_or("PROJEX_GITHUB_RAW_URL", &defaults.raw_base_url)),
            api_base_url: trim_base_url(&env_or("PROJEX_GITHUB_API_URL", &defaults.api_base_url)),
            asset_dir: env_or("PROJEX_ASSET_DIR", &defaults.asset_dir),
            token: non_empty(std::env::var("GITHUB_TOKEN").ok()),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Config {
            database_url,
            host,
            port,
            log_level,
            preview_width,
            github,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_counts_as_unset() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(Some(" abc ".to_string())), Some("abc".to_string()));
    }

    #[test]
    fn base_urls_lose_trailing_slashes() {
        assert_eq!(trim_base_url("https://api.github.com/"), "https://api.github.com");
        assert_eq!(trim_base_url("http://127.0.0.1:9000"), "http://127.0.0.1:9000");
    }
}
