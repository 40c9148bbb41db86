use std::net::SocketAddr;
use std::time::Duration;

use reqwest::{Client, Response};
use sqlx::SqlitePool;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use projex::config::{Config, GitHubConfig};
use projex::models::Project;

/// A running test server backed by a temporary SQLite database, with a mock
/// server standing in for both the raw-content host and the contents API.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
    pub github: MockServer,
    _db_dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed")
    }

    /// Submit the add-project form.
    pub async fn add_project(&self, title: &str, github_link: &str) -> Response {
        self.client
            .post(self.url("/add/"))
            .form(&[("title", title), ("github_link", github_link)])
            .send()
            .await
            .expect("add project request failed")
    }

    /// Serve `body` as `README.md` of `owner/repo` on `branch`.
    pub async fn mount_readme(&self, owner: &str, repo: &str, branch: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/{owner}/{repo}/{branch}/README.md")))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.github)
            .await;
    }

    /// All stored projects, newest first.
    pub async fn projects(&self) -> Vec<Project> {
        projex::db::projects::list(&self.pool)
            .await
            .expect("listing projects failed")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Spawn a test app, letting the caller adjust the configuration first.
pub async fn spawn_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let db_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let database_url = format!("sqlite://{}", db_dir.path().join("projex.db").display());

    let pool = projex::db::connect(&database_url)
        .await
        .expect("Failed to open test database");

    let github = MockServer::start().await;

    let mut config = Config {
        database_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
        preview_width: 250,
        github: GitHubConfig {
            raw_base_url: github.uri(),
            api_base_url: github.uri(),
            asset_dir: "images".to_string(),
            token: None,
            timeout: Duration::from_secs(5),
        },
    };
    configure(&mut config);

    let app = projex::build_app(pool.clone(), config).expect("Failed to build app");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        github,
        _db_dir: db_dir,
    }
}
