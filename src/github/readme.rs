use reqwest::Client;

use super::RepoRef;

/// Stored as the overview when no README could be retrieved.
pub const README_SENTINEL: &str = "No README found or couldn't fetch it.";

/// Branches tried in order.
const BRANCHES: [&str; 2] = ["main", "master"];

/// Fetches a repository's raw `README.md` once, at registration time.
#[derive(Clone)]
pub struct ReadmeFetcher {
    client: Client,
    raw_base_url: String,
}

impl ReadmeFetcher {
    pub fn new(client: Client, raw_base_url: impl Into<String>) -> Self {
        Self {
            client,
            raw_base_url: raw_base_url.into(),
        }
    }

    /// Return the README body, or text describing why there is none. Never fails.
    pub async fn fetch(&self, github_link: &str) -> String {
        let Some(repo) = RepoRef::parse(github_link) else {
            tracing::warn!("Cannot derive owner/repo from {github_link:?}");
            return README_SENTINEL.to_string();
        };

        match self.fetch_from_branches(&repo).await {
            Ok(Some(body)) => body,
            Ok(None) => {
                tracing::warn!("No README for {}/{} on any branch", repo.owner, repo.name);
                README_SENTINEL.to_string()
            }
            Err(e) => {
                tracing::warn!("README fetch for {}/{} failed: {e}", repo.owner, repo.name);
                format!("Error fetching README: {e}")
            }
        }
    }

    async fn fetch_from_branches(&self, repo: &RepoRef) -> Result<Option<String>, reqwest::Error> {
        for branch in BRANCHES {
            let url = format!(
                "{}/{}/{}/{branch}/README.md",
                self.raw_base_url, repo.owner, repo.name
            );

            let resp = self.client.get(&url).send().await?;
            if resp.status().is_success() {
                tracing::debug!("README for {}/{} found on {branch}", repo.owner, repo.name);
                return Ok(Some(resp.text().await?));
            }

            tracing::debug!("README request {url} returned {}", resp.status());
        }

        Ok(None)
    }
}
