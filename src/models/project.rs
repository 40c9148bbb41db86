use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered repository and the README text fetched when it was added.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub github_link: String,
    pub overview: String,
    pub created_at: DateTime<Utc>,
}
