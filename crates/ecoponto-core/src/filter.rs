//! Pure filtering of a location list by free-text query and category set.
//!
//! Total over its input domain: any list, any string, any category slice.
//! Never errors, never mutates its input, preserves relative order.

use crate::location::{Location, WasteCategory};

/// Reserved query meaning "show everything". Compared case-insensitively
/// against the trimmed query; a match returns the input list verbatim,
/// bypassing the category filter as well.
pub const SHOW_ALL_QUERY: &str = "lixo eletrônico";

/// Narrows `locations` by text query and selected categories.
///
/// Text matching is a case-insensitive substring test against name, address,
/// description, and each accepted-materials entry. No tokenization, no fuzzy
/// matching. A whitespace-only query imposes no text restriction. An empty
/// `selected` slice imposes no category restriction; otherwise a location
/// survives when its category list intersects `selected`.
#[must_use]
pub fn filter_locations(
    locations: &[Location],
    text_query: &str,
    selected: &[WasteCategory],
) -> Vec<Location> {
    let query = text_query.trim().to_lowercase();

    if query == SHOW_ALL_QUERY {
        return locations.to_vec();
    }

    let mut filtered = locations.to_vec();

    if !query.is_empty() {
        filtered.retain(|location| matches_query(location, &query));
    }

    if !selected.is_empty() {
        filtered.retain(|location| location.categories.iter().any(|c| selected.contains(c)));
    }

    filtered
}

/// `query` must already be trimmed and lowercased.
fn matches_query(location: &Location, query: &str) -> bool {
    location.name.to_lowercase().contains(query)
        || location.address.to_lowercase().contains(query)
        || location.description.to_lowercase().contains(query)
        || location
            .accepted_materials
            .iter()
            .any(|material| material.to_lowercase().contains(query))
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
