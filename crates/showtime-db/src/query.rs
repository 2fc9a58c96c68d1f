//! Query building blocks shared by the venue and artist listings.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::EntityTrait;
use serde::Serialize;

/// One row of a name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl From<Vec<SearchHit>> for SearchResults {
    fn from(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// `id` + `name` pair used by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub id: i32,
    pub name: String,
}

/// Case-insensitive "name contains `term`" condition on `column` of `E`.
///
/// LIKE wildcards in the term match literally.
pub(crate) fn name_contains<E: EntityTrait>(column: E::Column, term: &str) -> SimpleExpr {
    let escaped = term
        .trim()
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Expr::expr(Func::lower(Expr::col((E::default(), column))))
        .like(LikeExpr::new(format!("%{escaped}%")).escape('\\'))
}

/// Strictly after `now`.
pub(crate) fn is_upcoming(start_time: &DateTimeWithTimeZone, now: DateTime<Utc>) -> bool {
    *start_time > now.fixed_offset()
}

/// Strictly before `now`.
pub(crate) fn is_past(start_time: &DateTimeWithTimeZone, now: DateTime<Utc>) -> bool {
    *start_time < now.fixed_offset()
}

/// Shows split around a reference instant. A show starting exactly at the
/// reference instant is in neither list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

pub(crate) fn partition_by_start_time<T>(
    items: impl IntoIterator<Item = T>,
    now: DateTime<Utc>,
    start_time: impl Fn(&T) -> &DateTimeWithTimeZone,
) -> Partitioned<T> {
    let mut out = Partitioned {
        past: Vec::new(),
        upcoming: Vec::new(),
    };
    for item in items {
        let start = start_time(&item);
        if is_past(start, now) {
            out.past.push(item);
        } else if is_upcoming(start, now) {
            out.upcoming.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use sea_orm::{DbBackend, QueryFilter, QueryTrait};

    use crate::entities::venue;

    fn at(hour: u32) -> DateTimeWithTimeZone {
        Utc.with_ymd_and_hms(2030, 6, 1, hour, 0, 0)
            .unwrap()
            .fixed_offset()
    }

    #[test]
    fn test_partition_excludes_exact_now() {
        let now = Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap();
        let shows = vec![at(10), at(12), at(14), at(11)];
        let parts = partition_by_start_time(shows, now, |t| t);
        assert_eq!(parts.past, vec![at(10), at(11)]);
        assert_eq!(parts.upcoming, vec![at(14)]);
    }

    #[test]
    fn test_upcoming_across_offsets() {
        let now = Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap();
        // 13:30 at +02:00 is 11:30 UTC
        let start = chrono::FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2030, 6, 1, 13, 30, 0)
            .unwrap();
        assert!(!is_upcoming(&start, now));
        assert!(is_past(&start, now));
        assert!(is_upcoming(&(now + Duration::minutes(1)).fixed_offset(), now));
    }

    #[test]
    fn test_search_results_count() {
        let results = SearchResults::from(vec![SearchHit {
            id: 1,
            name: "The Musical Hop".into(),
            num_upcoming_shows: 0,
        }]);
        assert_eq!(results.count, 1);
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["data"][0]["name"], "The Musical Hop");
    }

    #[test]
    fn test_name_contains_sql() {
        let sql = venue::Entity::find()
            .filter(name_contains::<venue::Entity>(venue::Column::Name, "Hop_50%"))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"LOWER("venues"."name") LIKE"#), "{sql}");
        assert!(sql.contains("ESCAPE"), "{sql}");
        assert!(!sql.contains("Hop"), "{sql}");
    }
}
