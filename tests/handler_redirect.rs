mod common;

use std::sync::Arc;

use sqlx::SqlitePool;

#[sqlx::test]
async fn test_redirect_known_code(pool: SqlitePool) {
    let server = common::test_app(
        pool.clone(),
        Arc::new(common::StubTitleFetcher::returning("Example")),
    );

    let user_id = common::create_test_user(&pool, "alice", "hunter2!").await;
    common::create_test_link(&pool, "abc123", "https://example.com/target", user_id).await;

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_increments_visits_and_logs_click(pool: SqlitePool) {
    let server = common::test_app(
        pool.clone(),
        Arc::new(common::StubTitleFetcher::returning("Example")),
    );

    let user_id = common::create_test_user(&pool, "alice", "hunter2!").await;
    let link_id =
        common::create_test_link(&pool, "abc123", "https://example.com/target", user_id).await;

    server.get("/abc123").await;

    assert_eq!(common::link_visits(&pool, "abc123").await, 1);
    assert_eq!(common::count_clicks(&pool, link_id).await, 1);
}

#[sqlx::test]
async fn test_redirect_visits_accumulate(pool: SqlitePool) {
    let server = common::test_app(
        pool.clone(),
        Arc::new(common::StubTitleFetcher::returning("Example")),
    );

    let user_id = common::create_test_user(&pool, "alice", "hunter2!").await;
    let link_id =
        common::create_test_link(&pool, "abc123", "https://example.com/target", user_id).await;

    for _ in 0..3 {
        let response = server.get("/abc123").await;
        assert_eq!(response.status_code(), 307);
    }

    assert_eq!(common::link_visits(&pool, "abc123").await, 3);
    assert_eq!(common::count_clicks(&pool, link_id).await, 3);
}

#[sqlx::test]
async fn test_redirect_unknown_code_goes_home(pool: SqlitePool) {
    let server = common::test_app(
        pool.clone(),
        Arc::new(common::StubTitleFetcher::returning("Example")),
    );

    let response = server.get("/nosuch").await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/");

    let clicks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(clicks, 0);
}

#[sqlx::test]
async fn test_nested_unknown_path_goes_home(pool: SqlitePool) {
    let server = common::test_app(
        pool.clone(),
        Arc::new(common::StubTitleFetcher::returning("Example")),
    );

    let response = server.get("/some/nested/path").await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/");

    let clicks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(clicks, 0);
}

#[sqlx::test]
async fn test_redirect_needs_no_session(pool: SqlitePool) {
    let server = common::test_app(
        pool.clone(),
        Arc::new(common::StubTitleFetcher::returning("Example")),
    );

    let user_id = common::create_test_user(&pool, "alice", "hunter2!").await;
    common::create_test_link(&pool, "abc123", "https://example.com/target", user_id).await;

    // No signup or login beforehand; resolution is public.
    let response = server.get("/abc123").await;
    assert_eq!(response.status_code(), 307);
}

#[sqlx::test]
async fn test_redirect_does_not_shadow_literal_routes(pool: SqlitePool) {
    let server = common::test_app(
        pool,
        Arc::new(common::StubTitleFetcher::returning("Example")),
    );

    // "login" is a literal route, not a short code.
    let response = server.get("/login").await;
    response.assert_status_ok();
}
