// Shared test utilities for integration tests
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use showtime_db::artists::ArtistForm;
use showtime_db::shows::ShowForm;
use showtime_db::venues::VenueForm;

/// Fresh in-memory SQLite database with every migration applied.
pub async fn test_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    showtime_migration::Migrator::up(&db, None).await.unwrap();
    db
}

/// Reference instant used as "now" in tests.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap()
}

pub fn musical_hop() -> VenueForm {
    VenueForm {
        name: "The Musical Hop".into(),
        city: "San Francisco".into(),
        state: "CA".into(),
        address: "1015 Folsom Street".into(),
        phone: Some("123-123-1234".into()),
        genres: vec!["Jazz".into(), "Reggae".into(), "Folk".into()],
        image_link: Some("https://images.example.com/musical-hop.jpg".into()),
        facebook_link: Some("https://www.facebook.com/TheMusicalHop".into()),
        website: Some("https://www.themusicalhop.com".into()),
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist to play every two weeks.".into()),
    }
}

pub fn dueling_pianos() -> VenueForm {
    VenueForm {
        name: "The Dueling Pianos Bar".into(),
        city: "New York".into(),
        state: "NY".into(),
        address: "335 Delancey Street".into(),
        phone: Some("914-003-1132".into()),
        genres: vec!["Classical".into(), "R&B".into(), "Hip-Hop".into()],
        website: Some("https://www.theduelingpianos.com".into()),
        ..Default::default()
    }
}

pub fn park_square() -> VenueForm {
    VenueForm {
        name: "Park Square Live Music & Coffee".into(),
        city: "San Francisco".into(),
        state: "CA".into(),
        address: "34 Whiskey Moore Ave".into(),
        genres: vec!["Rock n Roll".into(), "Jazz".into(), "Classical".into(), "Folk".into()],
        ..Default::default()
    }
}

pub fn guns_n_petals() -> ArtistForm {
    ArtistForm {
        name: "Guns N Petals".into(),
        city: "San Francisco".into(),
        state: "CA".into(),
        phone: Some("326-123-5000".into()),
        genres: vec!["Rock n Roll".into()],
        website: Some("https://www.gunsnpetalsband.com".into()),
        seeking_venue: true,
        seeking_description: Some("Looking for shows to perform at in the San Francisco Bay Area!".into()),
        ..Default::default()
    }
}

pub fn wild_sax_band() -> ArtistForm {
    ArtistForm {
        name: "The Wild Sax Band".into(),
        city: "San Francisco".into(),
        state: "CA".into(),
        phone: Some("432-325-5432".into()),
        genres: vec!["Jazz".into(), "Classical".into()],
        ..Default::default()
    }
}

pub fn show_at(artist_id: i32, venue_id: i32, start_time: DateTime<Utc>) -> ShowForm {
    ShowForm {
        artist_id,
        venue_id,
        start_time: start_time.to_rfc3339(),
    }
}
