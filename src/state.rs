use std::env;

use tera::Tera;

use crate::fetcher::IdentityClient;
use crate::orchestrator::Orchestrator;

/// Fixed geolocation endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://ipapi.co/json/";

/// Application configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server to.
    pub bind_address: String,
    /// Geolocation API endpoint.
    pub endpoint: String,
}

impl Config {
    /// Creates Config from environment variables with defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8201".into()),
            endpoint: env::var("IPAPI_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.into()),
        }
    }
}

/// Shared application state passed to all request handlers.
#[derive(Debug)]
pub struct AppState {
    /// Template engine for rendering HTML pages.
    pub tera: Tera,
    /// Client for the upstream geolocation API.
    pub client: IdentityClient,
    /// Fetch state machine, the single owner of FetchState.
    pub fetch: Orchestrator,
}

impl AppState {
    pub fn new(tera: Tera, client: IdentityClient) -> Self {
        Self {
            tera,
            client,
            fetch: Orchestrator::new(),
        }
    }
}
