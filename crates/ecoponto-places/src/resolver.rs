//! Remote location resolver: city name to geocoded disposal locations.
//!
//! Two strictly sequential HTTP calls, geocode the city then run a
//! coordinate-biased text search, with no retry. The places request is never
//! issued when geocoding fails. The API credential and both base URLs are
//! injected at construction, so tests point the resolver at a mock server.

use std::time::Duration;

use reqwest::{Client, Url};

use ecoponto_core::{AppConfig, Coordinates, Location};

use crate::error::ResolverError;
use crate::mapping::map_place;
use crate::types::{
    Circle, GeocodeResponse, LocationBias, Place, PlacePoint, PlacesResponse, TextSearchRequest,
};

/// Fixed bias radius for the places text search, in meters.
pub const SEARCH_RADIUS_METERS: f64 = 50_000.0;

const LANGUAGE_CODE: &str = "pt-BR";
const FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,places.location,places.websiteUri,places.nationalPhoneNumber";
const USER_AGENT: &str = "ecoponto/0.1 (descarte-consciente)";

/// Successful outcome of a city resolution: the mapped locations (possibly
/// empty; zero results is not a failure) and the geocoded center.
#[derive(Debug, Clone)]
pub struct ResolvedCity {
    pub locations: Vec<Location>,
    pub center: Coordinates,
}

/// Client for the geocoding and places text-search services.
pub struct CityResolver {
    client: Client,
    api_key: Option<String>,
    geocode_base_url: Url,
    places_base_url: Url,
}

impl CityResolver {
    /// Creates a resolver from application configuration.
    ///
    /// A missing API key does not fail construction; it surfaces as
    /// [`ResolverError::MissingApiKey`] when a resolution is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ResolverError::InvalidBaseUrl`] if a
    /// configured base URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, ResolverError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_key: config.google_api_key.clone(),
            geocode_base_url: parse_base_url(&config.geocode_base_url)?,
            places_base_url: parse_base_url(&config.places_base_url)?,
        })
    }

    /// Resolves a free-text city name into disposal locations.
    ///
    /// # Errors
    ///
    /// - [`ResolverError::EmptyCityName`] if `city` is blank after trimming.
    /// - [`ResolverError::MissingApiKey`] if no credential is configured;
    ///   checked before any network call.
    /// - [`ResolverError::GeocodeNotFound`] if the geocoder reports a
    ///   non-`"OK"` status or an empty result set; the places request is not
    ///   issued in that case.
    /// - [`ResolverError::Http`] on transport failure or non-2xx status from
    ///   either service.
    /// - [`ResolverError::Deserialize`] if a response body does not match the
    ///   expected shape.
    pub async fn resolve_city(&self, city: &str) -> Result<ResolvedCity, ResolverError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ResolverError::EmptyCityName);
        }
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ResolverError::MissingApiKey);
        };

        let center = self.geocode(api_key, city).await?;
        tracing::debug!(city, lat = center.lat, lng = center.lng, "geocoded city");

        let places = self.search_places(api_key, city, center).await?;
        let locations: Vec<Location> = places.into_iter().filter_map(map_place).collect();
        tracing::info!(city, count = locations.len(), "city search resolved");

        Ok(ResolvedCity { locations, center })
    }

    async fn geocode(&self, api_key: &str, city: &str) -> Result<Coordinates, ResolverError> {
        let mut url = self.geocode_base_url.clone();
        url.query_pairs_mut()
            .append_pair("address", city)
            .append_pair("key", api_key);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| ResolverError::Deserialize {
                context: format!("geocode({city})"),
                source: e,
            })?;

        match parsed.results.first() {
            Some(result) if parsed.status == "OK" => Ok(Coordinates {
                lat: result.geometry.location.lat,
                lng: result.geometry.location.lng,
            }),
            _ => Err(ResolverError::GeocodeNotFound {
                city: city.to_owned(),
                status: parsed.status,
            }),
        }
    }

    async fn search_places(
        &self,
        api_key: &str,
        city: &str,
        center: Coordinates,
    ) -> Result<Vec<Place>, ResolverError> {
        let request = TextSearchRequest {
            text_query: format!("descarte de lixo eletrônico em {city}"),
            location_bias: LocationBias {
                circle: Circle {
                    center: PlacePoint {
                        latitude: center.lat,
                        longitude: center.lng,
                    },
                    radius: SEARCH_RADIUS_METERS,
                },
            },
            language_code: LANGUAGE_CODE.to_owned(),
        };

        let response = self
            .client
            .post(self.places_base_url.clone())
            .header("X-Goog-Api-Key", api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: PlacesResponse =
            serde_json::from_str(&body).map_err(|e| ResolverError::Deserialize {
                context: format!("searchText({city})"),
                source: e,
            })?;

        Ok(parsed.places)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ResolverError> {
    Url::parse(raw).map_err(|e| ResolverError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}
