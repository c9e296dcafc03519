//! Pets Catalog - breed data model and listing view model
//!
//! This crate holds the display-side half of Pets Explorer:
//! - Species tags and breed records normalized from the upstream providers
//! - A per-species `BreedDetail` union with a shared rendering interface
//! - Case-insensitive name filtering and the combined suggestion list
//! - The search box state (query text and suggestion visibility)
//! - A seedable shuffle used to diversify listings
//!
//! Nothing here performs I/O; the aggregator crate feeds it.
//!
//! # Examples
//!
//! ```
//! use pets_catalog::{filter, BreedSummary};
//!
//! let dogs = vec![
//!     BreedSummary::dog("img-1", 1, "Labrador Retriever", "https://cdn/1.jpg"),
//!     BreedSummary::dog("img-2", 2, "Beagle", "https://cdn/2.jpg"),
//! ];
//!
//! let matches = filter(&dogs, "lab");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].name, "Labrador Retriever");
//! ```

pub mod search;
pub mod shuffle;
pub mod species;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use search::SearchState;
pub use species::{Species, UnknownSpecies};
pub use types::{
    Attribute, BreedDetail, BreedPage, BreedSummary, CatBreedDetail, DogBreedDetail, GalleryImage,
    ImageRef, Measurement,
};
pub use view::{filter, suggestions, BreedCard, HomeView, Named, Suggestion, MAX_SUGGESTIONS};

/// Number of breeds shown per species grid
pub const LISTING_LIMIT: usize = 12;

/// Number of gallery images shown on a detail page
pub const GALLERY_LIMIT: usize = 8;
