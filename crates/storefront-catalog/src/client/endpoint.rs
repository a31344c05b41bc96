//! GraphQL endpoint validation for the catalog client.

use reqwest::Url;

use crate::error::CatalogError;

/// Parses and validates the backend's GraphQL endpoint.
///
/// Only `http` and `https` URLs are accepted. The path is kept as given:
/// hosted backends are picky about the trailing slash in `/graphql/`.
pub(super) fn parse_endpoint(endpoint: &str) -> Result<Url, CatalogError> {
    let url = Url::parse(endpoint).map_err(|e| CatalogError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: format!("unsupported scheme \"{other}\""),
        }),
    }
}

/// Extracts the hostname from an endpoint for log fields.
///
/// Falls back to the full URL string if it has no host.
pub(super) fn endpoint_host(url: &Url) -> String {
    url.host_str()
        .map_or_else(|| url.to_string(), str::to_owned)
}
