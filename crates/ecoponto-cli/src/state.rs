//! View state for the location finder.
//!
//! Owns the transient search state (text query, selected categories, active
//! dataset, map center, view mode) and wires user actions to the filter
//! engine and the remote resolver. The visible list is always recomputed from
//! scratch; nothing derived is patched in place.

use ecoponto_core::{
    filter_locations, seed_locations, Coordinates, Location, WasteCategory, PENHA_CENTER,
};
use ecoponto_places::{CityResolver, ResolverError};

/// Which rendering surface is active. Rendering itself lives elsewhere; the
/// state only remembers the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Map,
    List,
}

/// Outcome of a committed (or discarded) city search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitySearchOutcome {
    /// A new dataset and map center were committed.
    Replaced { count: usize },
    /// The search succeeded with zero results; an empty dataset and the
    /// resolved center were committed. Distinct from a failed search.
    NoResults,
    /// A newer attempt was started before this one finished; its result was
    /// discarded and no state changed.
    Superseded,
}

/// Holder of the search/filter state. Created fresh per run; no persistence.
pub struct SearchState {
    text_query: String,
    selected_categories: Vec<WasteCategory>,
    active_locations: Vec<Location>,
    map_center: Coordinates,
    view_mode: ViewMode,
    busy: bool,
    generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    /// Starts with the static seed dataset and its home center.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text_query: String::new(),
            selected_categories: Vec::new(),
            active_locations: seed_locations(),
            map_center: PENHA_CENTER,
            view_mode: ViewMode::Map,
            busy: false,
            generation: 0,
        }
    }

    pub fn set_text_query(&mut self, query: impl Into<String>) {
        self.text_query = query.into();
    }

    /// Adds the category if absent, removes it if present. Selection order is
    /// insertion order; it carries no meaning for filtering.
    pub fn toggle_category(&mut self, category: WasteCategory) {
        if let Some(index) = self.selected_categories.iter().position(|c| *c == category) {
            self.selected_categories.remove(index);
        } else {
            self.selected_categories.push(category);
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// The visible subset, recomputed from the active dataset on every call.
    #[must_use]
    pub fn filtered_locations(&self) -> Vec<Location> {
        filter_locations(
            &self.active_locations,
            &self.text_query,
            &self.selected_categories,
        )
    }

    /// Replaces the active dataset with geocoded results for `city`.
    ///
    /// Locations and map center are committed together, and only on success:
    /// a failed resolution leaves both exactly as they were, keeping the
    /// application usable with the prior dataset. Each attempt takes a fresh
    /// generation token; a completion whose token is no longer current is
    /// discarded as [`CitySearchOutcome::Superseded`] instead of overwriting
    /// a newer result.
    ///
    /// # Errors
    ///
    /// Propagates [`ResolverError`] from the resolver; state is untouched on
    /// every error path.
    pub async fn run_city_search(
        &mut self,
        resolver: &CityResolver,
        city: &str,
    ) -> Result<CitySearchOutcome, ResolverError> {
        self.busy = true;
        self.generation += 1;
        let attempt = self.generation;

        let result = resolver.resolve_city(city).await;
        self.busy = false;

        match result {
            Ok(resolved) => {
                if attempt != self.generation {
                    tracing::debug!(city, "discarding superseded city search");
                    return Ok(CitySearchOutcome::Superseded);
                }
                let count = resolved.locations.len();
                self.active_locations = resolved.locations;
                self.map_center = resolved.center;
                if count == 0 {
                    Ok(CitySearchOutcome::NoResults)
                } else {
                    Ok(CitySearchOutcome::Replaced { count })
                }
            }
            Err(error) => {
                tracing::warn!(city, %error, "city search failed, keeping previous dataset");
                Err(error)
            }
        }
    }

    #[must_use]
    pub fn text_query(&self) -> &str {
        &self.text_query
    }

    #[must_use]
    pub fn selected_categories(&self) -> &[WasteCategory] {
        &self.selected_categories
    }

    #[must_use]
    pub fn active_locations(&self) -> &[Location] {
        &self.active_locations
    }

    #[must_use]
    pub fn map_center(&self) -> Coordinates {
        self.map_center
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
