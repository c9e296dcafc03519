use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

use pets_catalog::{suggestions as match_suggestions, HomeView, SearchState, Suggestion};

use crate::render::RenderError;
use crate::state::AppState;
use crate::SERVICE_NAME;

/// Query string for the listing page and suggestion endpoint
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    /// `1` when the query came from picking a suggestion
    #[serde(default)]
    pub picked: Option<String>,
}

impl SearchParams {
    fn search_state(&self) -> SearchState {
        let mut state = SearchState::new();
        match (self.q.as_deref(), self.picked.as_deref()) {
            (Some(q), Some("1")) => state.select(q),
            (Some(q), _) if !q.is_empty() => state.input(q),
            _ => {}
        }
        state
    }
}

fn html_page(status: StatusCode, body: String) -> Response {
    (status, [(header::CACHE_CONTROL, "no-store")], Html(body)).into_response()
}

fn render_failed(e: RenderError) -> Response {
    error!("{}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

pub async fn home(State(state): State<Arc<AppState>>, Query(params): Query<SearchParams>) -> Response {
    let search = params.search_state();

    let view = match state.aggregator.list_all().await {
        Ok(listings) => HomeView::new(&listings.dogs, &listings.cats, &search),
        Err(e) => HomeView::failed(e.to_string(), &search),
    };

    match state.renderer.home(&view) {
        Ok(body) => html_page(StatusCode::OK, body),
        Err(e) => render_failed(e),
    }
}

pub async fn breed_detail(
    State(state): State<Arc<AppState>>,
    Path((species, id)): Path<(String, String)>,
) -> Response {
    match state.aggregator.fetch_breed_detail(&species, &id).await {
        Some(page) => {
            info!(%species, %id, gallery = page.gallery.len(), "Breed detail rendered");
            match state.renderer.breed(&page) {
                Ok(body) => html_page(StatusCode::OK, body),
                Err(e) => render_failed(e),
            }
        }
        None => not_found(State(state)).await,
    }
}

pub async fn suggestions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Suggestion>>, (StatusCode, Json<Value>)> {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Ok(Json(Vec::new()));
    }

    match state.aggregator.list_all().await {
        Ok(listings) => Ok(Json(match_suggestions(
            &listings.dogs,
            &listings.cats,
            &query,
        ))),
        Err(e) => Err((StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() })))),
    }
}

pub async fn not_found(State(state): State<Arc<AppState>>) -> Response {
    match state.renderer.not_found() {
        Ok(body) => html_page(StatusCode::NOT_FOUND, body),
        Err(e) => render_failed(e),
    }
}

pub async fn health_check() -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": Utc::now().to_rfc3339()
    })))
}
