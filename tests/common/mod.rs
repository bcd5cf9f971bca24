#![allow(dead_code)]

use axum_test::TestServer;
use roster_api::api::routes::resource_routes;
use roster_api::server::build_state;
use sqlx::PgPool;

pub async fn create_test_user(pool: &PgPool, name: &str, email: Option<&str>) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_course(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO courses (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn make_server(pool: PgPool) -> TestServer {
    let app = resource_routes().with_state(build_state(pool));
    TestServer::new(app).unwrap()
}
