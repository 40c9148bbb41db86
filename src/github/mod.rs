pub mod assets;
pub mod readme;

use reqwest::Client;

use crate::config::GitHubConfig;

/// Substring that locates the `owner/name` part of a repository URL.
pub const HOST_MARKER: &str = "github.com/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Take the first two path segments after the host marker.
    ///
    /// Query strings, fragments and a trailing `.git` are ignored. Returns `None`
    /// when the marker is missing or either segment is empty.
    pub fn parse(url: &str) -> Option<Self> {
        let (_, rest) = url.split_once(HOST_MARKER)?;
        let path = rest.split(['?', '#']).next().unwrap_or_default();

        let mut segments = path.split('/');
        let owner = segments.next()?;
        let name = segments.next()?;
        let name = name.strip_suffix(".git").unwrap_or(name);

        if owner.is_empty() || name.is_empty() {
            return None;
        }

        Some(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

/// Shared outbound client. Every request made through it is bounded by the configured timeout.
pub fn http_client(config: &GitHubConfig) -> Result<Client, String> {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(concat!("projex/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(owner: &str, name: &str) -> Option<RepoRef> {
        Some(RepoRef {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    #[test]
    fn parses_owner_and_name() {
        assert_eq!(RepoRef::parse("https://github.com/alice/demo"), repo("alice", "demo"));
        assert_eq!(
            RepoRef::parse("https://github.com/alice/demo/tree/main/src"),
            repo("alice", "demo")
        );
        assert_eq!(RepoRef::parse("github.com/alice/demo/"), repo("alice", "demo"));
    }

    #[test]
    fn drops_clone_suffix_query_and_fragment() {
        assert_eq!(RepoRef::parse("https://github.com/alice/demo.git"), repo("alice", "demo"));
        assert_eq!(RepoRef::parse("https://github.com/alice/demo?tab=readme"), repo("alice", "demo"));
        assert_eq!(RepoRef::parse("https://github.com/alice/demo#usage"), repo("alice", "demo"));
    }

    #[test]
    fn rejects_urls_without_marker_or_segments() {
        assert_eq!(RepoRef::parse("https://gitlab.com/alice/demo"), None);
        assert_eq!(RepoRef::parse("not a url"), None);
        assert_eq!(RepoRef::parse("https://github.com/alice"), None);
        assert_eq!(RepoRef::parse("https://github.com/alice/"), None);
        assert_eq!(RepoRef::parse("https://github.com//demo"), None);
    }
}
