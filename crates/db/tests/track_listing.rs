//! Integration tests for the joined track listing.

use prsk_core::music_type::MusicType;
use prsk_core::pagination::PageRequest;
use prsk_db::models::artist::CreateArtist;
use prsk_db::models::track::{NewTrack, TrackResponse, UNKNOWN_ARTIST_NAME};
use prsk_db::repositories::{ArtistRepo, TrackRepo};
use sqlx::PgPool;

const ACTOR: &str = "guest";

async fn seed_artist(pool: &PgPool, name: &str) -> i64 {
    ArtistRepo::create(
        pool,
        &CreateArtist {
            artist_name: name.to_string(),
            unit_name: Some("VBS".to_string()),
            content: Some("street".to_string()),
        },
        ACTOR,
    )
    .await
    .unwrap()
    .id
}

async fn seed_track(pool: &PgPool, artist_id: i64, title: &str) -> i64 {
    TrackRepo::create(
        pool,
        &NewTrack {
            title: title.to_string(),
            artist_id,
            music_type: MusicType::Original,
            specially: Some(true),
            lyrics_name: None,
            music_name: None,
            featuring: None,
            youtube_link: format!("https://youtu.be/{title}"),
        },
        ACTOR,
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_page_joins_artist_columns(pool: PgPool) {
    let artist_id = seed_artist(&pool, "Kohane").await;
    seed_track(&pool, artist_id, "Ready Steady").await;

    let rows = TrackRepo::list_page(&pool, PageRequest::default()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].artist_name, "Kohane");
    assert_eq!(rows[0].artist_unit_name.as_deref(), Some("VBS"));
    assert!(!rows[0].artist_is_deleted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_page_orders_by_title_then_id(pool: PgPool) {
    let artist_id = seed_artist(&pool, "An").await;
    for title in ["c", "a", "b"] {
        seed_track(&pool, artist_id, title).await;
    }

    let rows = TrackRepo::list_page(&pool, PageRequest::default()).await.unwrap();
    let titles: Vec<&str> = rows.iter().map(|r| r.track.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleted_artist_is_reported_as_unknown(pool: PgPool) {
    let artist_id = seed_artist(&pool, "Akito").await;
    let track_id = seed_track(&pool, artist_id, "Ultra Trail").await;
    ArtistRepo::soft_delete(&pool, artist_id, ACTOR).await.unwrap();

    let row = TrackRepo::find_with_artist(&pool, track_id)
        .await
        .unwrap()
        .expect("track is still live");
    assert!(row.artist_is_deleted);

    let response = TrackResponse::try_from(row).unwrap();
    assert_eq!(response.artist_name, UNKNOWN_ARTIST_NAME);
    assert!(response.unit_name.is_none());
    assert!(response.content.is_none());
    assert_eq!(response.artist_id, artist_id);
}
