//! Show listing and booking.

use std::collections::HashMap;

use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::entities::{artist, show, venue};
use crate::error::{StoreError, StoreResult, ValidationErrors};
use crate::validation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTimeWithTimeZone,
}

/// Submitted show form.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShowForm {
    pub artist_id: i32,
    pub venue_id: i32,
    #[serde(default)]
    pub start_time: String,
}

/// Every show, earliest first.
pub async fn list<C: ConnectionTrait>(db: &C) -> StoreResult<Vec<ShowListing>> {
    let rows = show::Entity::find()
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .find_also_related(artist::Entity)
        .all(db)
        .await?;

    if rows.is_empty() {
        return Ok(vec![]);
    }

    let mut venue_ids: Vec<i32> = rows.iter().map(|(s, _)| s.venue_id).collect();
    venue_ids.sort_unstable();
    venue_ids.dedup();
    let venues: HashMap<i32, venue::Model> = venue::Entity::find()
        .filter(venue::Column::Id.is_in(venue_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|v| (v.id, v))
        .collect();

    Ok(rows
        .into_iter()
        .filter_map(|(s, a)| {
            let a = a?;
            let v = venues.get(&s.venue_id)?;
            Some(ShowListing {
                venue_id: v.id,
                venue_name: v.name.clone(),
                artist_id: a.id,
                artist_name: a.name,
                artist_image_link: a.image_link,
                start_time: s.start_time,
            })
        })
        .collect())
}

/// Book an artist at a venue.
///
/// Unknown artist or venue ids are reported as validation errors and nothing
/// is written. A second show for the same artist at the same instant is
/// rejected by the schema.
pub async fn create_show(db: &DatabaseConnection, form: ShowForm) -> StoreResult<show::Model> {
    let mut errors = ValidationErrors::new();
    let start_time = validation::parse_start_time(&form.start_time)
        .map_err(|msg| errors.add("start_time", msg))
        .ok();

    let txn = db.begin().await?;

    if artist::Entity::find_by_id(form.artist_id)
        .one(&txn)
        .await?
        .is_none()
    {
        errors.add("artist_id", format!("No artist with id {}.", form.artist_id));
    }
    if venue::Entity::find_by_id(form.venue_id)
        .one(&txn)
        .await?
        .is_none()
    {
        errors.add("venue_id", format!("No venue with id {}.", form.venue_id));
    }

    let start_time = match start_time {
        Some(t) if errors.is_empty() => t,
        _ => return Err(StoreError::Validation(errors)),
    };

    let created = show::ActiveModel {
        id: NotSet,
        artist_id: Set(form.artist_id),
        venue_id: Set(form.venue_id),
        start_time: Set(start_time.fixed_offset()),
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    tracing::info!(
        show_id = created.id,
        artist_id = created.artist_id,
        venue_id = created.venue_id,
        start_time = %created.start_time,
        "show created"
    );
    Ok(created)
}
