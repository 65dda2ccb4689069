#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum_test::{TestServer, TestServerConfig};
use chrono::Utc;
use serde_json::json;
use shortly::application::services::{AuthService, LinkService};
use shortly::config::Config;
use shortly::domain::TitleFetcher;
use shortly::error::AppError;
use shortly::infrastructure::persistence::{
    SqliteClickRepository, SqliteLinkRepository, SqliteUserRepository,
};
use shortly::routes::app_router;
use shortly::state::AppState;
use shortly::utils::password::hash_password;
use sqlx::SqlitePool;

/// Title fetcher stub that never touches the network.
pub struct StubTitleFetcher {
    title: Option<String>,
}

impl StubTitleFetcher {
    /// Resolves every URL to the given title.
    pub fn returning(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
        }
    }

    /// Fails every resolution, as an unreachable page would.
    pub fn failing() -> Self {
        Self { title: None }
    }
}

#[async_trait]
impl TitleFetcher for StubTitleFetcher {
    async fn fetch_title(&self, url: &str) -> Result<String, AppError> {
        match &self.title {
            Some(title) => Ok(title.clone()),
            None => Err(AppError::not_found(
                "Unable to resolve page title",
                json!({ "url": url }),
            )),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "warn".to_string(),
        log_format: "text".to_string(),
        session_secret: "integration-test-secret-0123456789abcdef".to_string(),
        session_cookie_name: "sid".to_string(),
        session_max_age_secs: 600,
        protect_links_route: false,
    }
}

pub fn create_test_state(pool: SqlitePool, titles: Arc<dyn TitleFetcher>) -> AppState {
    let pool = Arc::new(pool);

    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let link_repo = Arc::new(SqliteLinkRepository::new(pool.clone()));
    let click_repo = Arc::new(SqliteClickRepository::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(user_repo));
    let link_service = Arc::new(LinkService::new(link_repo, click_repo, titles));

    AppState {
        auth_service,
        link_service,
        protect_links_listing: false,
    }
}

fn make_server(app: Router) -> TestServer {
    let config = TestServerConfig {
        save_cookies: true,
        ..Default::default()
    };
    TestServer::new_with_config(app, config).unwrap()
}

/// Full application server with session cookies persisted between requests.
pub fn test_app(pool: SqlitePool, titles: Arc<dyn TitleFetcher>) -> TestServer {
    let state = create_test_state(pool, titles);
    make_server(app_router(state, &test_config()))
}

/// Same as [`test_app`] but with the `/links` listing behind the session gate.
pub fn test_app_protected(pool: SqlitePool, titles: Arc<dyn TitleFetcher>) -> TestServer {
    let mut state = create_test_state(pool, titles);
    state.protect_links_listing = true;
    make_server(app_router(state, &test_config()))
}

pub async fn create_test_user(pool: &SqlitePool, username: &str, password: &str) -> i64 {
    let hash = hash_password(password).unwrap();
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (username, password, created_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(username)
    .bind(hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str, user_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO links (code, url, title, user_id, created_at) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(code)
    .bind(url)
    .bind("Test page")
    .bind(user_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn link_visits(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT visits FROM links WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_clicks(pool: &SqlitePool, link_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clicks WHERE link_id = ?")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Signs up and stays logged in through the server's cookie jar.
pub async fn signup(server: &TestServer, username: &str, password: &str) {
    let response = server
        .post("/signup")
        .form(&[("username", username), ("password", password)])
        .await;
    assert_eq!(response.status_code(), 303);
}
