//! Integration tests for repository create / find / list / update.

use prsk_core::music_type::MusicType;
use prsk_core::pagination::PageRequest;
use prsk_db::models::artist::{CreateArtist, UpdateArtist};
use prsk_db::models::track::{NewTrack, UpdateTrack};
use prsk_db::models::user::{CreateUser, UpdateUser};
use prsk_db::repositories::{ArtistRepo, TrackRepo, UserRepo};
use sqlx::PgPool;

const ACTOR: &str = "guest";

fn new_artist(name: &str) -> CreateArtist {
    CreateArtist {
        artist_name: name.to_string(),
        unit_name: Some("Leo/need".to_string()),
        content: Some("band".to_string()),
    }
}

fn new_track(artist_id: i64, title: &str, music_type: MusicType) -> NewTrack {
    NewTrack {
        title: title.to_string(),
        artist_id,
        music_type,
        specially: Some(false),
        lyrics_name: Some("lyricist".to_string()),
        music_name: Some("composer".to_string()),
        featuring: None,
        youtube_link: "https://youtu.be/example".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Artists
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_artist_create_sets_audit(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("Ichika"), "importer")
        .await
        .unwrap();

    assert_eq!(artist.artist_name, "Ichika");
    assert_eq!(artist.unit_name.as_deref(), Some("Leo/need"));
    assert_eq!(artist.audit.created_by, "importer");
    assert_eq!(artist.audit.updated_by, "importer");
    assert_eq!(artist.audit.created_at, artist.audit.updated_at);
    assert!(!artist.is_deleted);

    let found = ArtistRepo::find_by_id(&pool, artist.id).await.unwrap();
    assert_eq!(found.unwrap().artist_name, "Ichika");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_artist_update_applies_only_provided_fields(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("Saki"), ACTOR)
        .await
        .unwrap();

    let input = UpdateArtist {
        content: Some(String::new()),
        ..Default::default()
    };
    let updated = ArtistRepo::update(&pool, artist.id, &input, "editor")
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.artist_name, "Saki");
    assert_eq!(updated.unit_name.as_deref(), Some("Leo/need"));
    assert_eq!(updated.content.as_deref(), Some(""));
    assert_eq!(updated.audit.created_by, ACTOR);
    assert_eq!(updated.audit.updated_by, "editor");
    assert!(updated.audit.updated_at >= artist.audit.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_artist_update_missing_row_returns_none(pool: PgPool) {
    let result = ArtistRepo::update(&pool, 9999, &UpdateArtist::default(), ACTOR)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_artist_list_page_sorted_by_name(pool: PgPool) {
    for name in ["Mafuyu", "Ena", "Kanade", "Mizuki"] {
        ArtistRepo::create(&pool, &new_artist(name), ACTOR)
            .await
            .unwrap();
    }

    let first = ArtistRepo::list_page(&pool, PageRequest::new(Some(1), Some(3)).unwrap())
        .await
        .unwrap();
    let names: Vec<&str> = first.iter().map(|a| a.artist_name.as_str()).collect();
    assert_eq!(names, vec!["Ena", "Kanade", "Mafuyu"]);

    let second = ArtistRepo::list_page(&pool, PageRequest::new(Some(2), Some(3)).unwrap())
        .await
        .unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].artist_name, "Mizuki");

    assert_eq!(ArtistRepo::count(&pool).await.unwrap(), 4);
}

// ---------------------------------------------------------------------------
// Tracks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_track_create_and_find(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("Miku"), ACTOR)
        .await
        .unwrap();
    let track = TrackRepo::create(&pool, &new_track(artist.id, "Tell Your World", MusicType::ThreeDMv), ACTOR)
        .await
        .unwrap();

    assert_eq!(track.artist_id, artist.id);
    assert_eq!(track.music_type().unwrap(), MusicType::ThreeDMv);

    let found = TrackRepo::find_by_title_and_music_type(&pool, "Tell Your World", 1)
        .await
        .unwrap();
    assert_eq!(found.map(|t| t.id), Some(track.id));

    let other_type = TrackRepo::find_by_title_and_music_type(&pool, "Tell Your World", 0)
        .await
        .unwrap();
    assert!(other_type.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_track_update_keeps_unset_fields(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("Rin"), ACTOR)
        .await
        .unwrap();
    let track = TrackRepo::create(&pool, &new_track(artist.id, "Roki", MusicType::Original), ACTOR)
        .await
        .unwrap();

    let input = UpdateTrack {
        music_type: Some(MusicType::TwoDMv.code()),
        featuring: Some("Len".to_string()),
        ..Default::default()
    };
    let updated = TrackRepo::update(&pool, track.id, &input, ACTOR)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Roki");
    assert_eq!(updated.music_type, 2);
    assert_eq!(updated.featuring.as_deref(), Some("Len"));
    assert_eq!(updated.lyrics_name.as_deref(), Some("lyricist"));
    assert_eq!(updated.youtube_link, track.youtube_link);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_create_update_list(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            user_name: "kohane".to_string(),
            password_hash: "hash".to_string(),
        },
        ACTOR,
    )
    .await
    .unwrap();

    let found = UserRepo::find_by_user_name(&pool, "kohane").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let renamed = UserRepo::update(
        &pool,
        user.id,
        &UpdateUser {
            user_name: Some("an".to_string()),
        },
        ACTOR,
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.user_name, "an");
    assert_eq!(renamed.password_hash, "hash");

    let listed = UserRepo::list_page(&pool, PageRequest::default()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}
