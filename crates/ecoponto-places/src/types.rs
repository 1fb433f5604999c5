//! Wire types for the geocoding and places text-search providers.
//!
//! The geocoding service wraps results in a `{"status": "OK", ...}` envelope;
//! the places service returns `{"places": [...]}` where the whole list and
//! every per-place field may be omitted. Optional fields are modeled as
//! `Option` with `#[serde(default)]` instead of relying on implicit absence.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Geocoding (GET, query parameters)
// ---------------------------------------------------------------------------

/// Top-level geocoding response envelope.
///
/// `status` is `"OK"` on success; anything else (`"ZERO_RESULTS"`,
/// `"REQUEST_DENIED"`, ...) means no usable result.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: GeoPoint,
}

/// Geocoding uses short `lat`/`lng` keys, unlike the places service.
#[derive(Debug, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

// ---------------------------------------------------------------------------
// Places text search (POST, JSON body)
// ---------------------------------------------------------------------------

/// Request body for the places text-search endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSearchRequest {
    pub text_query: String,
    pub location_bias: LocationBias,
    pub language_code: String,
}

#[derive(Debug, Serialize)]
pub struct LocationBias {
    pub circle: Circle,
}

#[derive(Debug, Serialize)]
pub struct Circle {
    pub center: PlacePoint,
    pub radius: f64,
}

/// The places service spells coordinates out as `latitude`/`longitude`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlacePoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Top-level places response. An empty or omitted `places` list means the
/// search succeeded with zero results, which is not an error.
#[derive(Debug, Default, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub places: Vec<Place>,
}

/// One place record, restricted to the fields selected by our field mask.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub location: Option<PlacePoint>,
    #[serde(default)]
    pub website_uri: Option<String>,
    #[serde(default)]
    pub national_phone_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocalizedText {
    pub text: String,
}
