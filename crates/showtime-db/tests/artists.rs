mod common;

use chrono::Duration;
use common::*;
use showtime_db::artists::{self, ArtistForm};
use showtime_db::entities::artist;
use showtime_db::{shows, venues, StoreError};

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let db = test_db().await;
    let id = artists::create(&db, guns_n_petals()).await.unwrap();

    let stored = artists::get(&db, id).await.unwrap();
    assert_eq!(
        stored,
        artist::Model {
            id,
            name: "Guns N Petals".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: Some("326-123-5000".into()),
            genres: "Rock n Roll".into(),
            image_link: None,
            facebook_link: None,
            website: Some("https://www.gunsnpetalsband.com".into()),
            seeking_venue: true,
            seeking_description: Some(
                "Looking for shows to perform at in the San Francisco Bay Area!".into()
            ),
        }
    );
}

#[tokio::test]
async fn test_list_orders_by_id() {
    let db = test_db().await;
    let guns = artists::create(&db, guns_n_petals()).await.unwrap();
    let sax = artists::create(&db, wild_sax_band()).await.unwrap();

    let all = artists::list(&db).await.unwrap();
    assert_eq!(all.iter().map(|a| a.id).collect::<Vec<_>>(), vec![guns, sax]);
    assert_eq!(all[1].name, "The Wild Sax Band");
}

#[tokio::test]
async fn test_search_counts_upcoming_shows() {
    let db = test_db().await;
    let hop = venues::create(&db, musical_hop()).await.unwrap();
    let guns = artists::create(&db, guns_n_petals()).await.unwrap();
    let sax = artists::create(&db, wild_sax_band()).await.unwrap();

    shows::create_show(&db, show_at(sax, hop, now() + Duration::hours(2))).await.unwrap();
    shows::create_show(&db, show_at(sax, hop, now() - Duration::hours(2))).await.unwrap();

    let results = artists::search(&db, "a", now()).await.unwrap();
    assert_eq!(results.count, 2);
    assert_eq!(results.data[0].id, guns);
    assert_eq!(results.data[0].num_upcoming_shows, 0);
    assert_eq!(results.data[1].id, sax);
    assert_eq!(results.data[1].num_upcoming_shows, 1);

    let band = artists::search(&db, "BAND", now()).await.unwrap();
    assert_eq!(band.count, 1);
    assert_eq!(band.data[0].name, "The Wild Sax Band");

    assert_eq!(artists::search(&db, "zzz", now()).await.unwrap().count, 0);
}

#[tokio::test]
async fn test_detail_lists_venues_of_shows() {
    let db = test_db().await;
    let hop = venues::create(&db, musical_hop()).await.unwrap();
    let park = venues::create(&db, park_square()).await.unwrap();
    let guns = artists::create(&db, guns_n_petals()).await.unwrap();

    shows::create_show(&db, show_at(guns, park, now() - Duration::days(400))).await.unwrap();
    shows::create_show(&db, show_at(guns, hop, now() + Duration::days(5))).await.unwrap();

    let detail = artists::get_detail(&db, guns, now()).await.unwrap();
    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.past_shows[0].venue_id, park);
    assert_eq!(detail.past_shows[0].venue_name, "Park Square Live Music & Coffee");
    assert_eq!(detail.upcoming_shows_count, 1);
    assert_eq!(detail.upcoming_shows[0].venue_id, hop);
    assert_eq!(
        detail.upcoming_shows[0].venue_image_link.as_deref(),
        Some("https://images.example.com/musical-hop.jpg")
    );
}

#[tokio::test]
async fn test_detail_not_found() {
    let db = test_db().await;
    let err = artists::get_detail(&db, 5, now()).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "Artist", id: 5 }));
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let db = test_db().await;
    let id = artists::create(&db, guns_n_petals()).await.unwrap();

    let form = ArtistForm {
        name: "Guns N Petals (Reunion)".into(),
        ..wild_sax_band()
    };
    let updated = artists::update(&db, id, form).await.unwrap();
    assert_eq!(updated.name, "Guns N Petals (Reunion)");
    assert_eq!(updated.genres, "Jazz,Classical");
    assert_eq!(updated.website, None);
    assert!(!updated.seeking_venue);
    assert_eq!(updated.seeking_description, None);
}

#[tokio::test]
async fn test_delete_removes_artist_and_shows() {
    let db = test_db().await;
    let hop = venues::create(&db, musical_hop()).await.unwrap();
    let guns = artists::create(&db, guns_n_petals()).await.unwrap();
    let sax = artists::create(&db, wild_sax_band()).await.unwrap();
    shows::create_show(&db, show_at(guns, hop, now() + Duration::days(1))).await.unwrap();
    shows::create_show(&db, show_at(sax, hop, now() + Duration::days(1))).await.unwrap();

    artists::delete(&db, guns).await.unwrap();

    let listing = shows::list(&db).await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].artist_id, sax);
    let detail = venues::get_detail(&db, hop, now()).await.unwrap();
    assert_eq!(detail.upcoming_shows_count, 1);
    assert!(matches!(
        artists::get(&db, guns).await.unwrap_err(),
        StoreError::NotFound { .. }
    ));
}
