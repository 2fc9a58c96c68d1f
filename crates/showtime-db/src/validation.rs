//! Field rules shared by the venue, artist and show forms.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::ValidationErrors;

// ─── Constants ──────────────────────────────────────────────────────────

pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// US states plus DC.
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Phone numbers: xxx-xxx-xxxx.
const PHONE_PATTERN: &str = r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"));

/// Accepted non-RFC 3339 timestamp layouts, read as UTC.
const NAIVE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const REQUIRED: &str = "This field is required.";

/// Column widths of the venue and artist tables.
pub const NAME_MAX: usize = 255;
pub const TEXT_MAX: usize = 120;
pub const IMAGE_LINK_MAX: usize = 500;

// ─── Field rules ────────────────────────────────────────────────────────

pub(crate) fn required(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    max: usize,
) {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
    } else {
        max_length(errors, field, value, max);
    }
}

fn max_length(errors: &mut ValidationErrors, field: &'static str, value: &str, max: usize) -> bool {
    let ok = value.chars().count() <= max;
    if !ok {
        errors.add(field, format!("Field cannot be longer than {max} characters."));
    }
    ok
}

pub(crate) fn us_state(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
    } else if !STATES.contains(&value) {
        errors.add(field, format!("Not a valid choice: {value}."));
    }
}

pub(crate) fn genres(errors: &mut ValidationErrors, field: &'static str, values: &[String]) {
    let chosen: Vec<&str> = values
        .iter()
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .collect();
    if chosen.is_empty() {
        errors.add(field, REQUIRED);
        return;
    }
    let invalid: Vec<&str> = chosen
        .into_iter()
        .filter(|g| !GENRES.contains(g))
        .collect();
    if !invalid.is_empty() {
        errors.add(field, format!("Not a valid choice: {}.", invalid.join(", ")));
    }
}

pub(crate) fn phone(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    if let Some(value) = non_blank(value) {
        if !PHONE_RE.is_match(value) {
            errors.add(field, "Invalid phone number, expected xxx-xxx-xxxx.");
        }
    }
}

/// Optional absolute http(s) link.
pub(crate) fn link(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    max: usize,
) {
    let Some(value) = non_blank(value) else {
        return;
    };
    if !max_length(errors, field, value, max) {
        return;
    }
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {}
        _ => errors.add(field, "Invalid URL."),
    }
}

/// Parse a submitted show start time.
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(REQUIRED.to_string());
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Ok(t.with_timezone(&Utc));
    }
    NAIVE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("Not a valid datetime value: {raw}."))
}

// ─── Normalisation ──────────────────────────────────────────────────────

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Trim an optional field, mapping blank input to `None`.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    non_blank(value.as_deref()).map(str::to_string)
}
