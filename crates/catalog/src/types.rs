//! Breed records normalized from the upstream providers
//!
//! Detail records deserialize straight from provider JSON. Every descriptive
//! field is optional; a missing field simply omits its line when rendered.

use serde::{Deserialize, Serialize};

use crate::species::Species;

/// One entry in a species listing grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedSummary {
    /// Species the entry belongs to
    pub species: Species,
    /// Image id for dogs, breed id for cats
    pub id: String,
    /// Numeric breed id (dogs only)
    pub breed_id: Option<u64>,
    /// Display name
    pub name: String,
    /// Image shown on the card
    pub image_url: String,
}

impl BreedSummary {
    /// Summary for a dog image tagged with a breed
    pub fn dog(
        image_id: impl Into<String>,
        breed_id: u64,
        name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            species: Species::Dog,
            id: image_id.into(),
            breed_id: Some(breed_id),
            name: name.into(),
            image_url: image_url.into(),
        }
    }

    /// Summary for a cat breed with a resolved image
    pub fn cat(id: impl Into<String>, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            species: Species::Cat,
            id: id.into(),
            breed_id: None,
            name: name.into(),
            image_url: image_url.into(),
        }
    }

    /// Id addressing the breed on the detail route
    pub fn detail_id(&self) -> String {
        match self.breed_id {
            Some(breed_id) => breed_id.to_string(),
            None => self.id.clone(),
        }
    }

    /// Detail page path for this breed
    pub fn detail_path(&self) -> String {
        format!("/breed/{}/{}", self.species, self.detail_id())
    }
}

/// Imperial/metric measurement pair as reported by the providers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Imperial value (lbs or inches)
    #[serde(default)]
    pub imperial: String,
    /// Metric value (kg or cm)
    #[serde(default)]
    pub metric: String,
}

/// Inline image reference on a breed record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Image id
    #[serde(default)]
    pub id: Option<String>,
    /// Image URL, absent on some provider records
    #[serde(default)]
    pub url: Option<String>,
}

/// Supplementary image shown on a detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Provider image id
    pub id: String,
    /// Image URL
    pub url: String,
}

/// Dog breed record from the dog provider's breed catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogBreedDetail {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub life_span: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub bred_for: Option<String>,
    #[serde(default)]
    pub breed_group: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub weight: Option<Measurement>,
    #[serde(default)]
    pub height: Option<Measurement>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

/// Cat breed record from the cat provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatBreedDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub life_span: Option<String>,
    #[serde(default)]
    pub wikipedia_url: Option<String>,
    #[serde(default)]
    pub weight: Option<Measurement>,
    #[serde(default)]
    pub height: Option<Measurement>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

impl CatBreedDetail {
    /// Inline image URL if the record carries one
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(|img| img.url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// One labelled line on a detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Line label, e.g. "Origin"
    pub label: &'static str,
    /// Rendered value
    pub value: String,
}

/// Full descriptive record for one breed, per species
#[derive(Debug, Clone, PartialEq)]
pub enum BreedDetail {
    /// Dog breed
    Dog(DogBreedDetail),
    /// Cat breed
    Cat(CatBreedDetail),
}

impl BreedDetail {
    /// Species of the record
    pub fn species(&self) -> Species {
        match self {
            BreedDetail::Dog(_) => Species::Dog,
            BreedDetail::Cat(_) => Species::Cat,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        match self {
            BreedDetail::Dog(d) => &d.name,
            BreedDetail::Cat(c) => &c.name,
        }
    }

    /// Attribute lines in display order; absent fields are skipped.
    pub fn attributes(&self) -> Vec<Attribute> {
        let (weight, height, temperament, origin, life_span) = match self {
            BreedDetail::Dog(d) => (&d.weight, &d.height, &d.temperament, &d.origin, &d.life_span),
            BreedDetail::Cat(c) => (&c.weight, &c.height, &c.temperament, &c.origin, &c.life_span),
        };

        let mut lines = Vec::new();
        if let Some(w) = weight {
            lines.push(Attribute {
                label: "Weight",
                value: format!("{} lbs ({} kg)", w.imperial, w.metric),
            });
        }
        if let Some(h) = height {
            lines.push(Attribute {
                label: "Height",
                value: format!("{} in ({} cm)", h.imperial, h.metric),
            });
        }
        push_text(&mut lines, "Temperament", temperament);
        push_text(&mut lines, "Origin", origin);
        push_text(&mut lines, "Life Span", life_span);
        if let BreedDetail::Dog(d) = self {
            push_text(&mut lines, "Bred For", &d.bred_for);
            push_text(&mut lines, "Breed Group", &d.breed_group);
        }
        lines
    }

    /// Free-text description
    pub fn description(&self) -> Option<&str> {
        let description = match self {
            BreedDetail::Dog(d) => d.description.as_deref(),
            BreedDetail::Cat(c) => c.description.as_deref(),
        };
        description.filter(|s| !s.is_empty())
    }

    /// Wikipedia link (cat provider only)
    pub fn wikipedia_url(&self) -> Option<&str> {
        match self {
            BreedDetail::Dog(_) => None,
            BreedDetail::Cat(c) => c.wikipedia_url.as_deref().filter(|s| !s.is_empty()),
        }
    }

    /// Inline image eligible to be the page's main image
    pub fn inline_image_url(&self) -> Option<&str> {
        match self {
            BreedDetail::Dog(d) => d
                .image
                .as_ref()
                .and_then(|img| img.url.as_deref())
                .filter(|url| !url.is_empty()),
            // Cat detail pages always lead with the gallery
            BreedDetail::Cat(_) => None,
        }
    }
}

fn push_text(lines: &mut Vec<Attribute>, label: &'static str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        lines.push(Attribute {
            label,
            value: value.to_string(),
        });
    }
}

/// Everything needed to render a detail page
#[derive(Debug, Clone, PartialEq)]
pub struct BreedPage {
    /// Breed record
    pub detail: BreedDetail,
    /// Up to eight gallery images, provider order
    pub gallery: Vec<GalleryImage>,
}

impl BreedPage {
    /// Main image: inline image first, then the first gallery image.
    pub fn main_image_url(&self) -> Option<&str> {
        self.detail
            .inline_image_url()
            .or_else(|| self.gallery.first().map(|img| img.url.as_str()))
    }
}
