use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::github::assets::AssetProber;
use crate::github::readme::ReadmeFetcher;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub readme: ReadmeFetcher,
    pub assets: AssetProber,
}
