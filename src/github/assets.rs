use rand::seq::IndexedRandom;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;

use super::RepoRef;

/// Shown when a repository has no usable image of its own.
pub const FALLBACK_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800",
    "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=800",
    "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?w=800",
    "https://images.unsplash.com/photo-1518186285589-2f7649de83e0?w=800",
    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800",
];

const _: () = assert!(!FALLBACK_IMAGES.is_empty());

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];

/// One entry of the contents API directory listing.
#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    download_url: Option<String>,
}

/// Picks an illustrative image for a repository from its asset directory.
#[derive(Clone)]
pub struct AssetProber {
    client: Client,
    api_base_url: String,
    asset_dir: String,
    token: Option<String>,
}

impl AssetProber {
    pub fn new(
        client: Client,
        api_base_url: impl Into<String>,
        asset_dir: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            client,
            api_base_url: api_base_url.into(),
            asset_dir: asset_dir.into(),
            token,
        }
    }

    /// Always yields an image URL: a random repository image, else a random fallback.
    pub async fn probe(&self, github_link: &str) -> String {
        match self.list_images(github_link).await {
            Ok(images) if !images.is_empty() => choose(&images),
            Ok(_) => {
                tracing::debug!("No images in {}/ for {github_link}", self.asset_dir);
                fallback_image()
            }
            Err(e) => {
                tracing::debug!("Image lookup for {github_link} failed: {e}");
                fallback_image()
            }
        }
    }

    async fn list_images(&self, github_link: &str) -> Result<Vec<String>, String> {
        let repo = RepoRef::parse(github_link)
            .ok_or_else(|| "Cannot derive owner/repo from URL".to_string())?;

        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base_url, repo.owner, repo.name, self.asset_dir
        );

        let mut req = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| format!("Contents request failed: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("Contents API returned {}", resp.status()));
        }

        let entries: Vec<ContentEntry> = resp
            .json()
            .await
            .map_err(|e| format!("Unexpected contents listing: {e}"))?;

        Ok(image_urls(entries))
    }
}

fn image_urls(entries: Vec<ContentEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|entry| is_image(&entry.name))
        .filter_map(|entry| entry.download_url)
        .collect()
}

fn is_image(name: &str) -> bool {
    let name = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

fn choose(urls: &[String]) -> String {
    urls.choose(&mut rand::rng()).cloned().unwrap_or_else(fallback_image)
}

pub fn fallback_image() -> String {
    FALLBACK_IMAGES
        .choose(&mut rand::rng())
        .map(|url| url.to_string())
        .unwrap_or_default()
}
