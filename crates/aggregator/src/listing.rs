//! Species listings
//!
//! Dogs come from an image search that is already breed-tagged; cats come
//! from the breed list with per-breed image backfill for records that carry
//! no inline image.

use futures_util::future::join_all;
use pets_catalog::{shuffle, BreedSummary, CatBreedDetail, GalleryImage, LISTING_LIMIT};
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::ProviderClient;
use crate::error::RequestError;

/// Images requested from the dog image search per listing
pub const DOG_SEARCH_LIMIT: &str = "30";

/// Breed tag on a dog image
#[derive(Debug, Clone, Deserialize)]
pub struct DogImageBreed {
    /// Numeric breed id
    pub id: u64,
    /// Breed name
    pub name: String,
}

/// Dog image search result
#[derive(Debug, Clone, Deserialize)]
pub struct DogImage {
    /// Provider image id
    pub id: String,
    /// Image URL
    pub url: String,
    /// Breeds shown in the image; often empty
    #[serde(default)]
    pub breeds: Vec<DogImageBreed>,
}

/// Keep breed-tagged images, shuffle, cap and project to summaries.
pub fn select_dog_breeds<R: Rng + ?Sized>(images: Vec<DogImage>, rng: &mut R) -> Vec<BreedSummary> {
    let mut tagged: Vec<DogImage> = images
        .into_iter()
        .filter(|img| !img.breeds.is_empty())
        .collect();
    shuffle::shuffle(&mut tagged, rng);

    tagged
        .into_iter()
        .take(LISTING_LIMIT)
        .filter_map(|img| {
            let breed = img.breeds.into_iter().next()?;
            Some(BreedSummary::dog(img.id, breed.id, breed.name, img.url))
        })
        .collect()
}

pub(crate) async fn fetch_dog_images(client: &ProviderClient) -> Result<Vec<DogImage>, RequestError> {
    client
        .get_json(
            &["v1", "images", "search"],
            &[("limit", DOG_SEARCH_LIMIT), ("has_breeds", "1")],
        )
        .await
}

pub(crate) async fn fetch_cat_breeds(client: &ProviderClient) -> Result<Vec<BreedSummary>, RequestError> {
    let breeds: Vec<CatBreedDetail> = client.get_json(&["v1", "breeds"], &[]).await?;

    let resolved = join_all(
        breeds
            .into_iter()
            .take(LISTING_LIMIT)
            .map(|breed| resolve_cat_image(client, breed)),
    )
    .await;

    Ok(resolved.into_iter().flatten().collect())
}

/// Summary for `breed`, or `None` when no image can be found for it.
async fn resolve_cat_image(client: &ProviderClient, breed: CatBreedDetail) -> Option<BreedSummary> {
    if let Some(url) = breed.image_url() {
        return Some(BreedSummary::cat(&breed.id, &breed.name, url));
    }

    match first_breed_image(client, &breed.id).await {
        Ok(Some(image)) => Some(BreedSummary::cat(breed.id, breed.name, image.url)),
        Ok(None) => {
            debug!(breed_id = %breed.id, "No image found, breed dropped from listing");
            None
        }
        Err(e) => {
            warn!(breed_id = %breed.id, error = %e, "Image backfill failed, breed dropped from listing");
            None
        }
    }
}

async fn first_breed_image(
    client: &ProviderClient,
    breed_id: &str,
) -> Result<Option<GalleryImage>, RequestError> {
    let images: Vec<GalleryImage> = client
        .get_json(&["v1", "images", "search"], &[("breed_id", breed_id), ("limit", "1")])
        .await?;
    Ok(images.into_iter().find(|img| !img.url.is_empty()))
}
