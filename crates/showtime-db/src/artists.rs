//! Artist listings, detail pages and writes.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Unchanged, ColumnTrait,
    ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::entities::{artist, join_genres, show, split_genres, venue};
use crate::error::{StoreError, StoreResult, ValidationErrors};
use crate::query::{self, SearchHit, SearchResults, Summary};
use crate::validation;

const ENTITY: &str = "Artist";

/// A show as seen from an artist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Submitted artist form. Updates overwrite every field.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validation::required(&mut errors, "name", &self.name, validation::NAME_MAX);
        validation::required(&mut errors, "city", &self.city, validation::TEXT_MAX);
        validation::us_state(&mut errors, "state", &self.state);
        validation::phone(&mut errors, "phone", self.phone.as_deref());
        validation::genres(&mut errors, "genres", &self.genres);
        validation::link(
            &mut errors,
            "image_link",
            self.image_link.as_deref(),
            validation::IMAGE_LINK_MAX,
        );
        validation::link(
            &mut errors,
            "facebook_link",
            self.facebook_link.as_deref(),
            validation::TEXT_MAX,
        );
        validation::link(
            &mut errors,
            "website",
            self.website.as_deref(),
            validation::TEXT_MAX,
        );
        errors.into_result()
    }

    fn into_active_model(self) -> artist::ActiveModel {
        artist::ActiveModel {
            id: NotSet,
            name: Set(self.name.trim().to_string()),
            city: Set(self.city.trim().to_string()),
            state: Set(self.state.trim().to_string()),
            phone: Set(validation::optional(self.phone)),
            genres: Set(join_genres(&self.genres)),
            image_link: Set(validation::optional(self.image_link)),
            facebook_link: Set(validation::optional(self.facebook_link)),
            website: Set(validation::optional(self.website)),
            seeking_venue: Set(self.seeking_venue),
            seeking_description: Set(validation::optional(self.seeking_description)),
        }
    }
}

impl From<artist::Model> for ArtistForm {
    fn from(a: artist::Model) -> Self {
        Self {
            name: a.name,
            city: a.city,
            state: a.state,
            phone: a.phone,
            genres: split_genres(&a.genres),
            image_link: a.image_link,
            facebook_link: a.facebook_link,
            website: a.website,
            seeking_venue: a.seeking_venue,
            seeking_description: a.seeking_description,
        }
    }
}

/// Every artist, by id.
pub async fn list<C: ConnectionTrait>(db: &C) -> StoreResult<Vec<Summary>> {
    let artists = artist::Entity::find()
        .order_by_asc(artist::Column::Id)
        .all(db)
        .await?;
    Ok(artists
        .into_iter()
        .map(|a| Summary {
            id: a.id,
            name: a.name,
        })
        .collect())
}

/// Case-insensitive partial-name search.
pub async fn search<C: ConnectionTrait>(
    db: &C,
    term: &str,
    now: DateTime<Utc>,
) -> StoreResult<SearchResults> {
    let rows = artist::Entity::find()
        .filter(query::name_contains::<artist::Entity>(artist::Column::Name, term))
        .order_by_asc(artist::Column::Id)
        .find_with_related(show::Entity)
        .all(db)
        .await?;

    let hits = rows
        .into_iter()
        .map(|(a, shows)| SearchHit {
            id: a.id,
            name: a.name,
            num_upcoming_shows: shows
                .iter()
                .filter(|s| query::is_upcoming(&s.start_time, now))
                .count(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(term, hits = hits.len(), "artist search");
    Ok(SearchResults::from(hits))
}

/// Fetch the raw artist record.
pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> StoreResult<artist::Model> {
    artist::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound { entity: ENTITY, id })
}

pub async fn get_detail<C: ConnectionTrait>(
    db: &C,
    id: i32,
    now: DateTime<Utc>,
) -> StoreResult<ArtistDetail> {
    let a = get(db, id).await?;

    let rows = show::Entity::find()
        .filter(show::Column::ArtistId.eq(id))
        .order_by_asc(show::Column::StartTime)
        .find_also_related(venue::Entity)
        .all(db)
        .await?;

    let shows = rows.into_iter().filter_map(|(s, v)| {
        v.map(|v| ArtistShow {
            venue_id: v.id,
            venue_name: v.name,
            venue_image_link: v.image_link,
            start_time: s.start_time,
        })
    });
    let parts = query::partition_by_start_time(shows, now, |s| &s.start_time);

    Ok(ArtistDetail {
        id: a.id,
        name: a.name,
        genres: split_genres(&a.genres),
        city: a.city,
        state: a.state,
        phone: a.phone,
        website: a.website,
        facebook_link: a.facebook_link,
        seeking_venue: a.seeking_venue,
        seeking_description: a.seeking_description.filter(|_| a.seeking_venue),
        image_link: a.image_link,
        past_shows_count: parts.past.len(),
        upcoming_shows_count: parts.upcoming.len(),
        past_shows: parts.past,
        upcoming_shows: parts.upcoming,
    })
}

/// Validate and insert an artist, returning its id.
pub async fn create(db: &DatabaseConnection, form: ArtistForm) -> StoreResult<i32> {
    form.validate()?;

    let txn = db.begin().await?;
    let created = form.into_active_model().insert(&txn).await?;
    txn.commit().await?;

    tracing::info!(artist_id = created.id, name = %created.name, "artist created");
    Ok(created.id)
}

/// Validate and overwrite every field of an existing artist.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    form: ArtistForm,
) -> StoreResult<artist::Model> {
    form.validate()?;

    let txn = db.begin().await?;
    get(&txn, id).await?;
    let mut model = form.into_active_model();
    model.id = Unchanged(id);
    let updated = model.update(&txn).await?;
    txn.commit().await?;

    tracing::info!(artist_id = id, "artist updated");
    Ok(updated)
}

/// Delete an artist and all of its shows in one transaction.
pub async fn delete(db: &DatabaseConnection, id: i32) -> StoreResult<artist::Model> {
    let txn = db.begin().await?;
    let a = get(&txn, id).await?;
    let removed = show::Entity::delete_many()
        .filter(show::Column::ArtistId.eq(id))
        .exec(&txn)
        .await?;
    artist::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(
        artist_id = id,
        shows_removed = removed.rows_affected,
        "artist deleted"
    );
    Ok(a)
}
