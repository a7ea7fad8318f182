#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use prsk_api::config::{LogFormat, ServerConfig};
use prsk_api::routes;
use prsk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        audit_actor: "guest".to_string(),
        log_format: LogFormat::Text,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    routes::build_app(AppState::new(pool, test_config())).unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Create an artist and return its id.
pub async fn create_artist(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/artists",
        serde_json::json!({ "artistName": name, "unitName": "25ji", "content": "night" }),
    )
    .await;
    assert_eq!(response.status(), 201, "artist seed should succeed");
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a track and return its id.
pub async fn create_track(pool: &PgPool, artist_id: i64, title: &str, music_type: i16) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/prsk-music",
        serde_json::json!({
            "title": title,
            "artistId": artist_id,
            "musicType": music_type,
            "youtubeLink": format!("https://youtu.be/{title}"),
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "track seed should succeed");
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a user and return its id.
pub async fn create_user(pool: &PgPool, user_name: &str, password: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/users",
        serde_json::json!({ "userName": user_name, "password": password }),
    )
    .await;
    assert_eq!(response.status(), 201, "user seed should succeed");
    body_json(response).await["id"].as_i64().unwrap()
}
