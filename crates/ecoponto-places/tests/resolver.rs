//! Integration tests for `CityResolver` using wiremock HTTP mocks.

use ecoponto_core::{AppConfig, LocationId};
use ecoponto_places::{CityResolver, ResolverError};
use wiremock::matchers::{body_partial_json, header, headers, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server_uri: &str, api_key: Option<&str>) -> AppConfig {
    AppConfig {
        google_api_key: api_key.map(str::to_owned),
        geocode_base_url: format!("{server_uri}/geocode/json"),
        places_base_url: format!("{server_uri}/places:searchText"),
        request_timeout_secs: 5,
    }
}

fn geocode_ok_body(lat: f64, lng: f64) -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "results": [
            { "geometry": { "location": { "lat": lat, "lng": lng } } }
        ]
    })
}

#[tokio::test]
async fn resolve_city_maps_places_into_locations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "Blumenau"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_ok_body(-26.9194, -49.0661)))
        .expect(1)
        .mount(&server)
        .await;

    let places_body = serde_json::json!({
        "places": [
            {
                "id": "ChIJ-blumenau-1",
                "displayName": { "text": "Ecoponto Blumenau" },
                "formattedAddress": "Rua XV de Novembro, 100 - Blumenau - SC",
                "location": { "latitude": -26.9200, "longitude": -49.0650 },
                "websiteUri": "https://ecoponto.example.br",
                "nationalPhoneNumber": "(47) 3333-0000"
            },
            {
                "id": "ChIJ-blumenau-2",
                "displayName": { "text": "Coleta Vale" },
                "formattedAddress": "Av. Beira Rio, 55 - Blumenau - SC",
                "location": { "latitude": -26.9100, "longitude": -49.0700 }
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/places:searchText"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .and(headers(
            "X-Goog-FieldMask",
            vec![
                "places.id",
                "places.displayName",
                "places.formattedAddress",
                "places.location",
                "places.websiteUri",
                "places.nationalPhoneNumber",
            ],
        ))
        .and(body_partial_json(serde_json::json!({
            "textQuery": "descarte de lixo eletrônico em Blumenau",
            "languageCode": "pt-BR",
            "locationBias": {
                "circle": {
                    "center": { "latitude": -26.9194, "longitude": -49.0661 },
                    "radius": 50_000.0
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&places_body))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = CityResolver::new(&test_config(&server.uri(), Some("test-key"))).unwrap();
    let resolved = resolver.resolve_city("Blumenau").await.expect("should resolve");

    assert!((resolved.center.lat - -26.9194).abs() < f64::EPSILON);
    assert!((resolved.center.lng - -49.0661).abs() < f64::EPSILON);

    assert_eq!(resolved.locations.len(), 2);
    let first = &resolved.locations[0];
    assert_eq!(first.id, LocationId::Place("ChIJ-blumenau-1".to_owned()));
    assert_eq!(first.name, "Ecoponto Blumenau");
    assert_eq!(first.phone.as_deref(), Some("(47) 3333-0000"));
    assert_eq!(
        first.description,
        "Mais informações: https://ecoponto.example.br"
    );

    // Provider supplied no phone or website for the second record.
    let second = &resolved.locations[1];
    assert!(second.phone.is_none());
    assert_eq!(second.description, "Informações adicionais não disponíveis.");
    assert!(!second.categories.is_empty());
}

#[tokio::test]
async fn geocode_failure_never_issues_the_places_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ZERO_RESULTS", "results": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = CityResolver::new(&test_config(&server.uri(), Some("test-key"))).unwrap();
    let result = resolver.resolve_city("Atlântida Perdida").await;

    assert!(
        matches!(
            result,
            Err(ResolverError::GeocodeNotFound { ref status, .. }) if status == "ZERO_RESULTS"
        ),
        "expected GeocodeNotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn ok_status_with_empty_results_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "OK", "results": [] })),
        )
        .mount(&server)
        .await;

    let resolver = CityResolver::new(&test_config(&server.uri(), Some("test-key"))).unwrap();
    let result = resolver.resolve_city("Penha").await;

    assert!(matches!(result, Err(ResolverError::GeocodeNotFound { .. })));
}

#[tokio::test]
async fn zero_places_is_an_empty_result_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_ok_body(-26.7689, -48.6428)))
        .mount(&server)
        .await;

    // The provider omits the "places" key entirely when nothing matches.
    Mock::given(method("POST"))
        .and(path("/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let resolver = CityResolver::new(&test_config(&server.uri(), Some("test-key"))).unwrap();
    let resolved = resolver.resolve_city("Penha").await.expect("empty is ok");

    assert!(resolved.locations.is_empty());
    assert!((resolved.center.lat - -26.7689).abs() < f64::EPSILON);
}

#[tokio::test]
async fn places_server_error_is_a_provider_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_ok_body(-26.7689, -48.6428)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/places:searchText"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let resolver = CityResolver::new(&test_config(&server.uri(), Some("test-key"))).unwrap();
    let result = resolver.resolve_city("Penha").await;

    assert!(matches!(result, Err(ResolverError::Http(_))));
}

#[tokio::test]
async fn geocode_server_error_is_a_provider_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = CityResolver::new(&test_config(&server.uri(), Some("test-key"))).unwrap();
    let result = resolver.resolve_city("Penha").await;

    assert!(matches!(result, Err(ResolverError::Http(_))));
}

#[tokio::test]
async fn malformed_geocode_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let resolver = CityResolver::new(&test_config(&server.uri(), Some("test-key"))).unwrap();
    let result = resolver.resolve_city("Penha").await;

    assert!(matches!(result, Err(ResolverError::Deserialize { .. })));
}

#[tokio::test]
async fn missing_api_key_fails_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = CityResolver::new(&test_config(&server.uri(), None)).unwrap();
    let result = resolver.resolve_city("Penha").await;

    assert!(matches!(result, Err(ResolverError::MissingApiKey)));
}

#[tokio::test]
async fn blank_city_name_is_rejected_without_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = CityResolver::new(&test_config(&server.uri(), Some("test-key"))).unwrap();
    let result = resolver.resolve_city("   ").await;

    assert!(matches!(result, Err(ResolverError::EmptyCityName)));
}

#[tokio::test]
async fn city_name_is_trimmed_before_geocoding() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "Itajaí"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_ok_body(-26.9078, -48.6619)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let resolver = CityResolver::new(&test_config(&server.uri(), Some("test-key"))).unwrap();
    let resolved = resolver.resolve_city("  Itajaí  ").await.expect("should resolve");

    assert!(resolved.locations.is_empty());
}
