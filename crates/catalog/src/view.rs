//! Listing view model: name filtering and search suggestions

use serde::Serialize;

use crate::search::SearchState;
use crate::species::Species;
use crate::types::BreedSummary;

/// Maximum number of entries in the suggestion dropdown
pub const MAX_SUGGESTIONS: usize = 8;

/// Anything that can be matched by name
pub trait Named {
    /// Name matched against the query
    fn name(&self) -> &str;
}

impl Named for BreedSummary {
    fn name(&self) -> &str {
        &self.name
    }
}

fn matches(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

/// Entries whose name contains `query`, ignoring case, in original order.
///
/// An empty query returns the whole list.
pub fn filter<T: Named + Clone>(list: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return list.to_vec();
    }
    let needle = query.to_lowercase();
    list.iter()
        .filter(|item| matches(item.name(), &needle))
        .cloned()
        .collect()
}

/// One row of the suggestion dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Species tag shown next to the name
    pub species: Species,
    /// Detail route id
    pub id: String,
    /// Breed name
    pub name: String,
    /// Detail page path
    pub href: String,
}

impl From<&BreedSummary> for Suggestion {
    fn from(breed: &BreedSummary) -> Self {
        Self {
            species: breed.species,
            id: breed.detail_id(),
            name: breed.name.clone(),
            href: breed.detail_path(),
        }
    }
}

/// Dogs then cats matching `query`, at most [`MAX_SUGGESTIONS`].
///
/// An empty query yields no suggestions.
pub fn suggestions(dogs: &[BreedSummary], cats: &[BreedSummary], query: &str) -> Vec<Suggestion> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    dogs.iter()
        .chain(cats.iter())
        .filter(|breed| matches(&breed.name, &needle))
        .take(MAX_SUGGESTIONS)
        .map(Suggestion::from)
        .collect()
}

/// Card in a listing grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreedCard {
    pub name: String,
    pub image_url: String,
    pub href: String,
}

impl From<&BreedSummary> for BreedCard {
    fn from(breed: &BreedSummary) -> Self {
        Self {
            name: breed.name.clone(),
            image_url: breed.image_url.clone(),
            href: breed.detail_path(),
        }
    }
}

/// Everything the listing page renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub query: String,
    pub dogs: Vec<BreedCard>,
    pub cats: Vec<BreedCard>,
    pub suggestions: Vec<Suggestion>,
    pub show_suggestions: bool,
    pub error: Option<String>,
}

impl HomeView {
    /// Build the page from both listings and the current search state.
    pub fn new(dogs: &[BreedSummary], cats: &[BreedSummary], search: &SearchState) -> Self {
        let query = search.query();
        let suggestions = suggestions(dogs, cats, query);
        Self {
            query: query.to_string(),
            dogs: filter(dogs, query).iter().map(BreedCard::from).collect(),
            cats: filter(cats, query).iter().map(BreedCard::from).collect(),
            show_suggestions: search.suggestions_visible() && !suggestions.is_empty(),
            suggestions,
            error: None,
        }
    }

    /// Page for a failed listing fetch; the grids stay empty.
    pub fn failed(message: impl Into<String>, search: &SearchState) -> Self {
        Self {
            query: search.query().to_string(),
            dogs: Vec::new(),
            cats: Vec::new(),
            suggestions: Vec::new(),
            show_suggestions: false,
            error: Some(message.into()),
        }
    }
}
