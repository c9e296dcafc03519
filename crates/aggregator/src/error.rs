//! Aggregator error types

use pets_catalog::Species;
use thiserror::Error;

/// Failure of a single upstream request
#[derive(Debug, Error)]
pub enum RequestError {
    /// HTTP client could not be constructed
    #[error("Client setup failed: {0}")]
    Setup(String),

    /// Connection or protocol failure
    #[error("Upstream unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    /// Body was not the expected JSON shape
    #[error("Unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Failure of a primary listing fetch, surfaced to the page as a message
#[derive(Debug, Error)]
#[error("Failed to fetch {}: {source}", .species.plural())]
pub struct AggregatorError {
    /// Species whose listing failed
    pub species: Species,
    /// Underlying request failure
    #[source]
    pub source: RequestError,
}

impl AggregatorError {
    pub(crate) fn new(species: Species, source: RequestError) -> Self {
        Self { species, source }
    }
}
