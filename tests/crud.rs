//! End-to-end CRUD tests against PostgreSQL.
//!
//! `#[sqlx::test]` provisions an isolated database per test from DATABASE_URL,
//! so these exercise the real query paths: round-trips, 404s on missing rows,
//! and the duplicate-favorite rejection.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use holocron::{api_routes, apply_migrations, AppState};
use sqlx::PgPool;
use tower::ServiceExt;

async fn app(pool: &PgPool) -> Router {
    apply_migrations(pool).await.unwrap();
    api_routes(AppState { pool: pool.clone() })
}

async fn seed_user(pool: &PgPool) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO users (name, last_name, email, password_hash)
        VALUES ('Leia', 'Organa', 'leia@alderaan.example', 'not-a-real-hash')
        RETURNING id
        "#,
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn body_json(body: Body) -> serde_json::Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("DELETE")
        .body(Body::empty())
        .unwrap()
}

#[sqlx::test]
async fn created_planet_round_trips_through_get(pool: PgPool) {
    let app = app(&pool).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/planets",
            r#"{"name":"Tatooine","gravity":1,"terrain":"desert","climate":"arid"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response.into_body()).await;
    assert_eq!(created["name"], "Tatooine");
    assert_eq!(created["gravity"], 1);
    assert_eq!(created["terrain"], "desert");
    assert_eq!(created["climate"], "arid");
    let id = created["id"].as_i64().unwrap();

    let response = app
        .oneshot(get(&format!("/planets/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response.into_body()).await, created);
}

#[sqlx::test]
async fn delete_missing_planet_returns_404(pool: PgPool) {
    let app = app(&pool).await;
    let response = app.oneshot(delete("/planets/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["msg"], "Planet not found");
}

#[sqlx::test]
async fn delete_missing_person_returns_404(pool: PgPool) {
    let app = app(&pool).await;
    let response = app.oneshot(delete("/people/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["msg"], "Person not found");
}

#[sqlx::test]
async fn favorites_of_new_user_are_an_empty_list(pool: PgPool) {
    let app = app(&pool).await;
    let user = seed_user(&pool).await;
    let response = app
        .oneshot(get(&format!("/users/{user}/favorites")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response.into_body()).await, serde_json::json!([]));
}

#[sqlx::test]
async fn favorite_add_returns_joined_view(pool: PgPool) {
    let app = app(&pool).await;
    let user = seed_user(&pool).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/planets",
            r#"{"name":"Hoth","gravity":1,"terrain":"tundra","climate":"frozen"}"#,
        ))
        .await
        .unwrap();
    let planet = body_json(response.into_body()).await["id"].as_i64().unwrap();

    let response = app
        .oneshot(post_empty(&format!("/users/{user}/favorite/planet/{planet}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["id_user"], user);
    assert_eq!(body["user_name"], "Leia");
    assert_eq!(body["planet_name"], "Hoth");
    assert_eq!(body["people_name"], serde_json::Value::Null);
}

#[sqlx::test]
async fn second_identical_favorite_returns_400(pool: PgPool) {
    let app = app(&pool).await;
    let user = seed_user(&pool).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/planets",
            r#"{"name":"Dagobah","gravity":1,"terrain":"swamp","climate":"murky"}"#,
        ))
        .await
        .unwrap();
    let planet = body_json(response.into_body()).await["id"].as_i64().unwrap();
    let uri = format!("/users/{user}/favorite/planet/{planet}");

    let response = app.clone().oneshot(post_empty(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(post_empty(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["msg"], "Planet is already a favorite");
}

#[sqlx::test]
async fn favorite_remove_then_remove_again_returns_404(pool: PgPool) {
    let app = app(&pool).await;
    let user = seed_user(&pool).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/people",
            r#"{"name":"Yoda","height":0.66,"mass":17}"#,
        ))
        .await
        .unwrap();
    let person = body_json(response.into_body()).await["id"].as_i64().unwrap();
    let uri = format!("/users/{user}/favorite/people/{person}");

    let response = app.clone().oneshot(post_empty(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(delete(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["msg"], "Favorite person deleted");

    let response = app.oneshot(delete(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["msg"], "Favorite person not found");
}

#[sqlx::test]
async fn planet_put_keeps_omitted_fields(pool: PgPool) {
    let app = app(&pool).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/planets",
            r#"{"name":"Endor","gravity":1,"terrain":"forest","climate":"temperate"}"#,
        ))
        .await
        .unwrap();
    let id = body_json(response.into_body()).await["id"].as_i64().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/planets/{id}"))
                .method("PUT")
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"climate":"humid"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["name"], "Endor");
    assert_eq!(body["terrain"], "forest");
    assert_eq!(body["climate"], "humid");
}
