use thiserror::Error;

/// Errors produced while resolving a city into disposal locations.
///
/// All variants are recoverable at the caller: a failed resolution leaves the
/// previous dataset in place and is surfaced as a human-readable message.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The city name was empty after trimming.
    #[error("informe o nome de uma cidade")]
    EmptyCityName,

    /// No places API credential is configured. Checked before any network
    /// call is issued.
    #[error("chave da API de lugares não configurada (defina GOOGLE_MAPS_API_KEY)")]
    MissingApiKey,

    /// The geocoding service reported no usable result for the city.
    #[error("nenhum resultado de geocodificação para \"{city}\" (status {status})")]
    GeocodeNotFound { city: String, status: String },

    /// Network or TLS failure, or a non-2xx HTTP status, on either call.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
