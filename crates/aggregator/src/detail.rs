//! Single-breed detail resolution
//!
//! The dog provider has no by-id breed endpoint, so the dog path fetches the
//! whole breed catalog and scans it. The cat path uses the direct endpoint.
//! Both paths return `None` rather than an error: the caller renders a
//! not-found page either way.

use pets_catalog::{BreedDetail, CatBreedDetail, DogBreedDetail, GalleryImage, GALLERY_LIMIT};
use tracing::{debug, warn};

use crate::client::ProviderClient;
use crate::error::RequestError;

/// Find the dog breed whose numeric id renders as `id`.
pub fn find_dog_breed(breeds: Vec<DogBreedDetail>, id: &str) -> Option<DogBreedDetail> {
    breeds.into_iter().find(|b| b.id.to_string() == id)
}

/// Cat breed ids are short alphanumeric codes such as `abys`.
pub fn is_cat_breed_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub(crate) async fn fetch_dog_detail(client: &ProviderClient, id: &str) -> Option<BreedDetail> {
    let breeds: Vec<DogBreedDetail> = client
        .get_json(&["v1", "breeds"], &[])
        .await
        .map_err(|e| warn!(breed_id = %id, error = %e, "Dog breed catalog fetch failed"))
        .ok()?;

    let found = find_dog_breed(breeds, id);
    if found.is_none() {
        debug!(breed_id = %id, "Dog breed not in catalog");
    }
    found.map(BreedDetail::Dog)
}

pub(crate) async fn fetch_cat_detail(client: &ProviderClient, id: &str) -> Option<BreedDetail> {
    if !is_cat_breed_id(id) {
        debug!(breed_id = %id, "Malformed cat breed id");
        return None;
    }
    client
        .get_json::<CatBreedDetail>(&["v1", "breeds", id], &[])
        .await
        .map(BreedDetail::Cat)
        .map_err(|e| warn!(breed_id = %id, error = %e, "Cat breed fetch failed"))
        .ok()
}

/// Up to eight gallery images; any failure yields an empty gallery.
pub(crate) async fn fetch_gallery(client: &ProviderClient, breed_id: &str) -> Vec<GalleryImage> {
    let limit = GALLERY_LIMIT.to_string();
    let result: Result<Vec<GalleryImage>, RequestError> = client
        .get_json(
            &["v1", "images", "search"],
            &[("breed_id", breed_id), ("limit", limit.as_str())],
        )
        .await;

    match result {
        Ok(mut images) => {
            images.truncate(GALLERY_LIMIT);
            images
        }
        Err(e) => {
            warn!(breed_id = %breed_id, error = %e, "Gallery fetch failed, rendering without images");
            Vec::new()
        }
    }
}
