//! HTTP client for the upstream geolocation API.

use std::time::Duration;

use tracing::debug;

use crate::error::FetchError;
use crate::models::NetworkIdentity;

/// Message shown when the API answers with a non-success status.
const FETCH_FAILED_MSG: &str = "Failed to fetch IP information";

/// The API normally answers well under a second; anything slower than this
/// is treated as a transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the geolocation endpoint.
///
/// Cheap to clone; the inner `reqwest::Client` holds the connection pool.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    client: reqwest::Client,
    endpoint: String,
}

impl IdentityClient {
    pub fn new(endpoint: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ipscope/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Fetches the caller's public IP identity from the configured endpoint.
    ///
    /// One GET, no retry; each call is independent. A non-success status
    /// maps to [`FetchError::Transport`] with a fixed message, a body that
    /// does not parse maps to [`FetchError::Decode`].
    pub async fn fetch_identity(&self) -> Result<NetworkIdentity, FetchError> {
        debug!(endpoint = %self.endpoint, "fetching IP identity");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Transport(FETCH_FAILED_MSG.to_string()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        decode_identity(&body)
    }
}

/// Decodes a response body into a [`NetworkIdentity`].
fn decode_identity(body: &str) -> Result<NetworkIdentity, FetchError> {
    serde_json::from_str(body)
        .map_err(|e| FetchError::Decode(format!("Unexpected response from IP API: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_response() {
        let body = r#"{
            "ip": "8.8.8.8",
            "version": "IPv4",
            "city": "Mountain View",
            "region": "California",
            "country_name": "United States",
            "country_code": "US",
            "continent_code": "NA",
            "postal": "94043",
            "org": "GOOGLE LLC",
            "asn": "AS15169",
            "timezone": "America/Los_Angeles",
            "utc_offset": "-0800",
            "currency": "USD",
            "currency_name": "Dollar",
            "currency_symbol": "$",
            "languages": "en-US,es-US,haw,fr"
        }"#;

        let identity = decode_identity(body).unwrap();
        assert_eq!(identity.ip.as_deref(), Some("8.8.8.8"));
        assert_eq!(identity.version.as_deref(), Some("IPv4"));
        assert_eq!(identity.org.as_deref(), Some("GOOGLE LLC"));
        assert_eq!(identity.languages.as_deref(), Some("en-US,es-US,haw,fr"));
    }

    #[test]
    fn missing_fields_decode_as_none() {
        let identity = decode_identity(r#"{"ip": "2001:db8::1", "version": "IPv6"}"#).unwrap();
        assert_eq!(identity.ip.as_deref(), Some("2001:db8::1"));
        assert_eq!(identity.org, None);
        assert_eq!(identity.asn, None);
        assert_eq!(identity.timezone, None);
    }

    #[test]
    fn empty_object_decodes() {
        let identity = decode_identity("{}").unwrap();
        assert_eq!(identity, NetworkIdentity::default());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_identity("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
