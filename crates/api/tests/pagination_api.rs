//! Pagination behaviour shared by every list endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_artist, get};
use sqlx::PgPool;

async fn seed_artists(pool: &PgPool, count: usize) {
    for i in 0..count {
        create_artist(pool, &format!("artist-{i:02}")).await;
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_page_of_fifteen(pool: PgPool) {
    seed_artists(&pool, 15).await;

    let response = get(build_test_app(pool), "/artists?page=2&limit=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["artistName"], "artist-10");
    assert_eq!(json["meta"]["totalItems"], 15);
    assert_eq!(json["meta"]["totalPages"], 2);
    assert_eq!(json["meta"]["pageIndex"], 1);
    assert_eq!(json["meta"]["limit"], 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_past_the_end_is_empty(pool: PgPool) {
    seed_artists(&pool, 3).await;

    let json = body_json(get(build_test_app(pool), "/artists?page=5&limit=2").await).await;
    assert!(json["items"].as_array().unwrap().is_empty());
    assert_eq!(json["meta"]["totalItems"], 3);
    assert_eq!(json["meta"]["totalPages"], 2);
    assert_eq!(json["meta"]["pageIndex"], 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_table(pool: PgPool) {
    let json = body_json(get(build_test_app(pool), "/users").await).await;
    assert_eq!(json["meta"]["totalItems"], 0);
    assert_eq!(json["meta"]["totalPages"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_out_of_range_parameters_return_400(pool: PgPool) {
    for uri in [
        "/artists?page=0",
        "/artists?limit=0",
        "/prsk-music?limit=101",
        "/users?page=-3",
    ] {
        let response = get(build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["statusCode"], 400);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_parameter_returns_400(pool: PgPool) {
    let response = get(build_test_app(pool), "/artists?page=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["details"][0]["field"], "page");
    assert_eq!(json["details"][0]["message"], "Page must be an integer");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_limit_names_limit(pool: PgPool) {
    let response = get(build_test_app(pool), "/prsk-music?limit=xyz").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["details"].as_array().unwrap().len(), 1);
    assert_eq!(json["details"][0]["field"], "limit");
}
