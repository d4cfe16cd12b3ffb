//! Search-index filter expression for the animal list.
//!
//! Facet groups are OR-ed inside parentheses and all clauses are AND-ed, e.g.
//! `(species:cat OR species:dog) AND status:open AND pickUpDate >= 1709251200000`.
//! Dates are compared as unix milliseconds (the index stores them that way).

use crate::domain::codec::WireEnum;
use crate::domain::filters::animal::AnimalSearch;
use chrono::NaiveDateTime;
use serde::Serialize;

/// What gets sent to the search index for one animal list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalIndexQuery {
    pub query: String,
    pub filters: String,
    pub page: u32,
}

impl AnimalIndexQuery {
    pub fn from_search(search: &AnimalSearch) -> Self {
        Self {
            query: search.name_or_alias.clone().unwrap_or_default(),
            filters: animal_index_filter(search),
            page: search.page,
        }
    }
}

pub fn animal_index_filter(search: &AnimalSearch) -> String {
    let mut clauses = Vec::new();

    clauses.extend(facet_group("species", search.species.iter().map(|s| s.wire())));
    clauses.extend(facet_group("status", search.statuses.iter().map(|s| s.wire())));
    if let Some(gender) = search.gender {
        clauses.push(format!("gender:{}", gender.wire()));
    }
    if let Some(sterilized) = search.is_sterilized {
        clauses.push(format!("isSterilized:{}", sterilized));
    }
    if let Some(start) = search.pick_up_date_start {
        clauses.push(format!("pickUpDate >= {}", unix_millis(start)));
    }
    if let Some(end) = search.pick_up_date_end {
        clauses.push(format!("pickUpDate <= {}", unix_millis(end)));
    }

    clauses.join(" AND ")
}

fn facet_group<'a>(attribute: &str, values: impl Iterator<Item = &'a str>) -> Option<String> {
    let terms: Vec<String> = values.map(|v| format!("{}:{}", attribute, v)).collect();
    match terms.len() {
        0 => None,
        1 => terms.into_iter().next(),
        _ => Some(format!("({})", terms.join(" OR "))),
    }
}

fn unix_millis(value: NaiveDateTime) -> i64 {
    value.and_utc().timestamp_millis()
}
