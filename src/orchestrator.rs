//! Fetch lifecycle state machine.

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::FetchError;
use crate::models::NetworkIdentity;

/// Lifecycle of one identity fetch. Exactly one variant is active at any
/// observation point.
///
/// Serializes with a `status` tag for the `/api/identity` endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchState {
    Loading,
    Loaded { identity: NetworkIdentity },
    Failed { message: String },
}

/// Owns the fetch state together with a request generation counter.
///
/// A refresh may be triggered while an earlier request is still in flight.
/// The older request is not cancelled; its completion is discarded whenever
/// a newer generation has started since, so the state always reflects the
/// most recently initiated request.
#[derive(Debug)]
pub struct Orchestrator {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    generation: u64,
    state: FetchState,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                generation: 0,
                state: FetchState::Loading,
            }),
        }
    }

    /// Enters `Loading` and returns the generation the caller must hand back
    /// to [`complete`](Self::complete) when the fetch resolves.
    pub async fn begin(&self) -> u64 {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.state = FetchState::Loading;
        debug!(generation = inner.generation, "fetch started");
        inner.generation
    }

    /// Applies a fetch result.
    ///
    /// Returns `false` when the result belonged to a superseded request and
    /// was discarded without touching the state.
    pub async fn complete(
        &self,
        generation: u64,
        result: Result<NetworkIdentity, FetchError>,
    ) -> bool {
        let mut inner = self.inner.write().await;
        if generation != inner.generation {
            debug!(
                generation,
                current = inner.generation,
                "discarding stale fetch result"
            );
            return false;
        }
        inner.state = match result {
            Ok(identity) => {
                info!(ip = identity.ip.as_deref().unwrap_or("unknown"), "identity loaded");
                FetchState::Loaded { identity }
            }
            Err(err) => {
                warn!(error = %err, "identity fetch failed");
                FetchState::Failed {
                    message: err.to_string(),
                }
            }
        };
        true
    }

    /// Clones the current state for rendering.
    pub async fn snapshot(&self) -> FetchState {
        self.inner.read().await.state.clone()
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
