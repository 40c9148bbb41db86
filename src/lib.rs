pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod github;
pub mod models;
pub mod state;
pub mod views;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::github::assets::AssetProber;
use crate::github::readme::ReadmeFetcher;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: SqlitePool, config: Config) -> Result<Router, String> {
    let client = github::http_client(&config.github)?;

    let readme = ReadmeFetcher::new(client.clone(), config.github.raw_base_url.clone());
    let assets = AssetProber::new(
        client,
        config.github.api_base_url.clone(),
        config.github.asset_dir.clone(),
        config.github.token.clone(),
    );

    if config.github.token.is_some() {
        tracing::info!("GitHub token configured for contents API requests");
    } else {
        tracing::info!("No GITHUB_TOKEN set, contents API requests are unauthenticated");
    }

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        readme,
        assets,
    });

    let app = Router::new()
        .merge(views::view_routes())
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state);

    Ok(app)
}

async fn health() -> &'static str {
    "ok"
}
