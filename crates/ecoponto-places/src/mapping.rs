//! Mapping from provider place records to [`ecoponto_core::Location`].
//!
//! The places provider has no concept of waste categories, accepted
//! materials, or opening hours, so those fields are filled with explicit
//! defaults rather than left to downstream guesswork.

use ecoponto_core::{Coordinates, Location, LocationId, WasteCategory};

use crate::types::Place;

/// Generic material label for remotely sourced records.
pub const GENERIC_MATERIAL: &str = "Eletrônicos em geral";

/// Schedule placeholder; remote records must be confirmed on site.
pub const OPENING_HOURS_PLACEHOLDER: &str = "Horário não informado, confirme no local";

/// Broad category subset assigned to every remotely sourced record.
const REMOTE_CATEGORIES: [WasteCategory; 4] = [
    WasteCategory::SmallElectronics,
    WasteCategory::Computers,
    WasteCategory::PhonesTablets,
    WasteCategory::CablesAccessories,
];

/// Maps one provider record into the internal location shape.
///
/// Returns `None` for records missing an id, a non-empty display name, or a
/// geographic position; coordinates are required for map placement, so such
/// records are skipped rather than defaulted.
#[must_use]
pub fn map_place(place: Place) -> Option<Location> {
    let id = place.id.filter(|id| !id.trim().is_empty())?;
    let name = place
        .display_name
        .map(|display| display.text.trim().to_owned())
        .filter(|name| !name.is_empty())?;
    let position = place.location?;

    let description = place.website_uri.map_or_else(
        || "Informações adicionais não disponíveis.".to_owned(),
        |uri| format!("Mais informações: {uri}"),
    );

    Some(Location {
        id: LocationId::Place(id),
        name,
        address: place
            .formatted_address
            .unwrap_or_else(|| "Endereço não informado".to_owned()),
        coordinates: Coordinates {
            lat: position.latitude,
            lng: position.longitude,
        },
        opening_hours: OPENING_HOURS_PLACEHOLDER.to_owned(),
        phone: place.national_phone_number,
        accepted_materials: vec![GENERIC_MATERIAL.to_owned()],
        categories: REMOTE_CATEGORIES.to_vec(),
        description,
    })
}

#[cfg(test)]
#[path = "mapping_test.rs"]
mod tests;
