//! Pets Aggregator - breed data from the dog and cat providers
//!
//! This crate talks to the two upstream breed APIs and normalizes their
//! payloads into `pets_catalog` records. It handles:
//! - Dog listings from a breed-tagged image search, shuffled for variety
//! - Cat listings from the breed list, with concurrent image backfill
//! - Detail pages (breed record plus gallery) for either species
//!
//! # Failure handling
//!
//! Primary listing fetches fail with [`AggregatorError`], whose message is
//! meant for display. Detail fetches return `None` on any failure. Image
//! backfill and gallery lookups are best-effort and degrade to "no image".
//!
//! # Examples
//!
//! ```no_run
//! use pets_aggregator::BreedAggregator;
//! use pets_catalog::Species;
//! use pets_core::Config;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let aggregator = BreedAggregator::new(&config)?;
//!
//! let cats = aggregator.list_breeds(Species::Cat).await?;
//! let page = aggregator.fetch_breed_detail("dog", "149").await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod detail;
pub mod error;
pub mod listing;

use pets_catalog::shuffle::{entropy_rng, seeded_rng};
use pets_catalog::{BreedPage, BreedSummary, Species};
use pets_core::Config;
use rand::rngs::StdRng;
use std::sync::Mutex;
use tracing::{debug, error};

pub use client::ProviderClient;
pub use error::{AggregatorError, RequestError};

/// Both species listings for one page load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listings {
    /// Dog grid entries
    pub dogs: Vec<BreedSummary>,
    /// Cat grid entries
    pub cats: Vec<BreedSummary>,
}

/// Fetches and normalizes breed data from both providers
pub struct BreedAggregator {
    dog: ProviderClient,
    cat: ProviderClient,
    /// Shuffle source for dog listings; only held during the synchronous shuffle
    rng: Mutex<StdRng>,
}

impl BreedAggregator {
    /// Create an aggregator with an entropy-seeded shuffle.
    pub fn new(config: &Config) -> Result<Self, RequestError> {
        Self::with_rng(config, entropy_rng())
    }

    /// Create an aggregator whose dog listing order is reproducible.
    pub fn with_seed(config: &Config, seed: u64) -> Result<Self, RequestError> {
        Self::with_rng(config, seeded_rng(seed))
    }

    fn with_rng(config: &Config, rng: StdRng) -> Result<Self, RequestError> {
        Ok(Self {
            dog: ProviderClient::new(&config.dog)?,
            cat: ProviderClient::new(&config.cat)?,
            rng: Mutex::new(rng),
        })
    }

    /// Up to twelve breeds for `species`, each with an image.
    pub async fn list_breeds(&self, species: Species) -> Result<Vec<BreedSummary>, AggregatorError> {
        let result = match species {
            Species::Dog => self.list_dogs().await,
            Species::Cat => listing::fetch_cat_breeds(&self.cat).await,
        };

        match result {
            Ok(breeds) => {
                debug!(%species, count = breeds.len(), "Listing resolved");
                Ok(breeds)
            }
            Err(e) => {
                error!(%species, error = %e, "Listing fetch failed");
                Err(AggregatorError::new(species, e))
            }
        }
    }

    async fn list_dogs(&self) -> Result<Vec<BreedSummary>, RequestError> {
        let images = listing::fetch_dog_images(&self.dog).await?;
        let selected = {
            let mut rng = self
                .rng
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            listing::select_dog_breeds(images, &mut *rng)
        };
        Ok(selected)
    }

    /// Dog and cat listings fetched concurrently; the first failure fails both.
    pub async fn list_all(&self) -> Result<Listings, AggregatorError> {
        let (dogs, cats) = tokio::try_join!(
            self.list_breeds(Species::Dog),
            self.list_breeds(Species::Cat)
        )?;
        Ok(Listings { dogs, cats })
    }

    /// Breed record and gallery for one breed.
    ///
    /// Returns `None` for an unknown species tag (without touching the
    /// network), an unmatched id, or a failed record fetch. A failed gallery
    /// fetch only empties the gallery.
    pub async fn fetch_breed_detail(&self, species_tag: &str, id: &str) -> Option<BreedPage> {
        let species: Species = match species_tag.parse() {
            Ok(species) => species,
            Err(e) => {
                debug!(error = %e, "Detail requested for unknown species");
                return None;
            }
        };

        let (detail, gallery) = match species {
            Species::Dog => {
                tokio::join!(
                    detail::fetch_dog_detail(&self.dog, id),
                    detail::fetch_gallery(&self.dog, id)
                )
            }
            Species::Cat => {
                tokio::join!(
                    detail::fetch_cat_detail(&self.cat, id),
                    detail::fetch_gallery(&self.cat, id)
                )
            }
        };

        Some(BreedPage {
            detail: detail?,
            gallery,
        })
    }
}
