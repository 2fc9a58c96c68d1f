//! Venue listings, detail pages and writes.

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

const ENTITY: &str = "Venue";

/// Venues sharing a (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

/// A show as seen from a venue page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Submitted venue form. Updates overwrite every field.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validation::required(&mut errors, "name", &self.name, validation::NAME_MAX);
        validation::required(&mut errors, "city", &self.city, validation::TEXT_MAX);
        validation::us_state(&mut errors, "state", &self.state);
        validation::required(&mut errors, "address", &self.address, validation::TEXT_MAX);
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

    fn into_active_model(self) -> venue::ActiveModel {
        venue::ActiveModel {
            id: NotSet,
            name: Set(self.name.trim().to_string()),
            city: Set(self.city.trim().to_string()),
            state: Set(self.state.trim().to_string()),
            address: Set(self.address.trim().to_string()),
            phone: Set(validation::optional(self.phone)),
            genres: Set(join_genres(&self.genres)),
            image_link: Set(validation::optional(self.image_link)),
            facebook_link: Set(validation::optional(self.facebook_link)),
            website: Set(validation::optional(self.website)),
            seeking_talent: Set(self.seeking_talent),
            seeking_description: Set(validation::optional(self.seeking_description)),
        }
    }
}

impl From<venue::Model> for VenueForm {
    fn from(v: venue::Model) -> Self {
        Self {
            name: v.name,
            city: v.city,
            state: v.state,
            address: v.address,
            phone: v.phone,
            genres: split_genres(&v.genres),
            image_link: v.image_link,
            facebook_link: v.facebook_link,
            website: v.website,
            seeking_talent: v.seeking_talent,
            seeking_description: v.seeking_description,
        }
    }
}

/// Group venues by (city, state) in order of first appearance.
pub fn group_by_location(venues: Vec<venue::Model>) -> Vec<Location> {
    let mut locations: Vec<Location> = Vec::new();
    for v in venues {
        let summary = Summary {
            id: v.id,
            name: v.name,
        };
        match locations
            .iter_mut()
            .find(|l| l.city == v.city && l.state == v.state)
        {
            Some(location) => location.venues.push(summary),
            None => locations.push(Location {
                city: v.city,
                state: v.state,
                venues: vec![summary],
            }),
        }
    }
    locations
}

pub async fn list_locations<C: ConnectionTrait>(db: &C) -> StoreResult<Vec<Location>> {
    let venues = venue::Entity::find()
        .order_by_asc(venue::Column::Id)
        .all(db)
        .await?;
    Ok(group_by_location(venues))
}

/// Case-insensitive partial-name search.
pub async fn search<C: ConnectionTrait>(
    db: &C,
    term: &str,
    now: DateTime<Utc>,
) -> StoreResult<SearchResults> {
    let rows = venue::Entity::find()
        .filter(query::name_contains::<venue::Entity>(venue::Column::Name, term))
        .order_by_asc(venue::Column::Id)
        .find_with_related(show::Entity)
        .all(db)
        .await?;

    let hits = rows
        .into_iter()
        .map(|(v, shows)| SearchHit {
            id: v.id,
            name: v.name,
            num_upcoming_shows: shows
                .iter()
                .filter(|s| query::is_upcoming(&s.start_time, now))
                .count(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(term, hits = hits.len(), "venue search");
    Ok(SearchResults::from(hits))
}

/// Fetch the raw venue record.
pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> StoreResult<venue::Model> {
    venue::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound { entity: ENTITY, id })
}

pub async fn get_detail<C: ConnectionTrait>(
    db: &C,
    id: i32,
    now: DateTime<Utc>,
) -> StoreResult<VenueDetail> {
    let v = get(db, id).await?;

    let rows = show::Entity::find()
        .filter(show::Column::VenueId.eq(id))
        .order_by_asc(show::Column::StartTime)
        .find_also_related(artist::Entity)
        .all(db)
        .await?;

    let shows = rows.into_iter().filter_map(|(s, a)| {
        a.map(|a| VenueShow {
            artist_id: a.id,
            artist_name: a.name,
            artist_image_link: a.image_link,
            start_time: s.start_time,
        })
    });
    let parts = query::partition_by_start_time(shows, now, |s| &s.start_time);

    Ok(VenueDetail {
        id: v.id,
        name: v.name,
        genres: split_genres(&v.genres),
        address: v.address,
        city: v.city,
        state: v.state,
        phone: v.phone,
        website: v.website,
        facebook_link: v.facebook_link,
        seeking_talent: v.seeking_talent,
        seeking_description: v.seeking_description.filter(|_| v.seeking_talent),
        image_link: v.image_link,
        past_shows_count: parts.past.len(),
        upcoming_shows_count: parts.upcoming.len(),
        past_shows: parts.past,
        upcoming_shows: parts.upcoming,
    })
}

/// Validate and insert a venue, returning its id.
pub async fn create(db: &DatabaseConnection, form: VenueForm) -> StoreResult<i32> {
    form.validate()?;

    let txn = db.begin().await?;
    let created = form.into_active_model().insert(&txn).await?;
    txn.commit().await?;

    tracing::info!(venue_id = created.id, name = %created.name, "venue created");
    Ok(created.id)
}

/// Validate and overwrite every field of an existing venue.
pub async fn update(db: &DatabaseConnection, id: i32, form: VenueForm) -> StoreResult<venue::Model> {
    form.validate()?;

    let txn = db.begin().await?;
    get(&txn, id).await?;
    let mut model = form.into_active_model();
    model.id = Unchanged(id);
    let updated = model.update(&txn).await?;
    txn.commit().await?;

    tracing::info!(venue_id = id, "venue updated");
    Ok(updated)
}

/// Delete a venue and all of its shows in one transaction.
pub async fn delete(db: &DatabaseConnection, id: i32) -> StoreResult<venue::Model> {
    let txn = db.begin().await?;
    let v = get(&txn, id).await?;
    let removed = show::Entity::delete_many()
        .filter(show::Column::VenueId.eq(id))
        .exec(&txn)
        .await?;
    venue::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(
        venue_id = id,
        shows_removed = removed.rows_affected,
        "venue deleted"
    );
    Ok(v)
}
