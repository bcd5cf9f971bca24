mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_course_lifecycle(pool: PgPool) {
    let server = common::make_server(pool);

    let created = server
        .post("/courses")
        .json(&json!({ "name": "Compilers", "description": "Front to back" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    let fetched = server.get(&format!("/courses/{id}")).await;
    fetched.assert_status_ok();
    assert_eq!(
        fetched.json::<Value>(),
        json!({ "id": id, "name": "Compilers", "description": "Front to back" })
    );

    let updated = server
        .put(&format!("/courses/{id}"))
        .json(&json!({ "name": "Advanced Compilers" }))
        .await;
    updated.assert_status_ok();
    assert_eq!(
        updated.json::<Value>(),
        json!({ "id": id, "name": "Advanced Compilers" })
    );

    server
        .delete(&format!("/courses/{id}"))
        .await
        .assert_status_ok();

    server
        .get(&format!("/courses/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_list_courses_default_page(pool: PgPool) {
    for i in 0..12 {
        common::create_test_course(&pool, &format!("course-{i}")).await;
    }
    let server = common::make_server(pool);

    let response = server.get("/courses").add_query_param("count", "abc").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 10);
}

#[sqlx::test]
async fn test_course_invalid_id(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.delete("/courses/first").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Invalid course ID" })
    );
}

#[sqlx::test]
async fn test_create_course_invalid_payload(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server.post("/courses").text("name=Compilers").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Invalid request payload" })
    );
    assert_eq!(common::count_rows(&pool, "courses").await, 0);
}
