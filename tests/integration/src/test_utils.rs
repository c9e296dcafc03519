//! Test utilities: fake breed providers and service startup

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use pets_aggregator::BreedAggregator;
use pets_core::{Config, LoggingConfig, ProviderConfig, ServerConfig};
use pets_explorer::{build_router, AppState};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const DOG_KEY: &str = "dog-test-key";
pub const CAT_KEY: &str = "cat-test-key";

/// Fixed shuffle seed so dog listings are reproducible
pub const TEST_SEED: u64 = 0x5eed;

/// One request seen by a fake provider
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub api_key: Option<String>,
    pub cache_control: Option<String>,
}

/// Canned responses served by a fake provider
#[derive(Debug, Clone)]
pub struct ProviderFixture {
    breeds: (StatusCode, Value),
    breed_by_id: HashMap<String, Value>,
    tagged_search: (StatusCode, Value),
    images_by_breed: HashMap<String, (StatusCode, Value)>,
}

impl Default for ProviderFixture {
    fn default() -> Self {
        Self {
            breeds: (StatusCode::OK, json!([])),
            breed_by_id: HashMap::new(),
            tagged_search: (StatusCode::OK, json!([])),
            images_by_breed: HashMap::new(),
        }
    }
}

impl ProviderFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body for `GET /v1/breeds`
    pub fn breeds(mut self, body: Value) -> Self {
        self.breeds = (StatusCode::OK, body);
        self
    }

    pub fn breeds_status(mut self, status: StatusCode) -> Self {
        self.breeds = (status, json!({ "message": "upstream failure" }));
        self
    }

    /// Body for `GET /v1/breeds/:id`; unknown ids answer 400
    pub fn breed(mut self, id: &str, body: Value) -> Self {
        self.breed_by_id.insert(id.to_string(), body);
        self
    }

    /// Body for `GET /v1/images/search?has_breeds=1`
    pub fn tagged_search(mut self, body: Value) -> Self {
        self.tagged_search = (StatusCode::OK, body);
        self
    }

    pub fn tagged_search_status(mut self, status: StatusCode) -> Self {
        self.tagged_search = (status, json!({ "message": "upstream failure" }));
        self
    }

    /// Body for `GET /v1/images/search?breed_id=<id>`; unknown ids answer `[]`
    pub fn images(mut self, breed_id: &str, body: Value) -> Self {
        self.images_by_breed
            .insert(breed_id.to_string(), (StatusCode::OK, body));
        self
    }

    pub fn images_status(mut self, breed_id: &str, status: StatusCode) -> Self {
        self.images_by_breed
            .insert(breed_id.to_string(), (status, json!({ "message": "upstream failure" })));
        self
    }
}

struct FakeState {
    fixture: ProviderFixture,
    log: Mutex<Vec<RecordedRequest>>,
}

impl FakeState {
    fn record(&self, uri: &Uri, headers: &HeaderMap, query: &HashMap<String, String>) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        self.log.lock().unwrap().push(RecordedRequest {
            path: uri.path().to_string(),
            query: query.clone(),
            api_key: header("x-api-key"),
            cache_control: header("cache-control"),
        });
    }
}

async fn breeds_handler(
    State(state): State<Arc<FakeState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state.record(&uri, &headers, &HashMap::new());
    let (status, body) = state.fixture.breeds.clone();
    (status, Json(body)).into_response()
}

async fn breed_handler(
    State(state): State<Arc<FakeState>>,
    Path(id): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state.record(&uri, &headers, &HashMap::new());
    match state.fixture.breed_by_id.get(&id) {
        Some(body) => Json(body.clone()).into_response(),
        None => (StatusCode::BAD_REQUEST, Json(json!({ "message": "INVALID_BREED" }))).into_response(),
    }
}

async fn search_handler(
    State(state): State<Arc<FakeState>>,
    Query(query): Query<HashMap<String, String>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state.record(&uri, &headers, &query);
    let (status, body) = match query.get("breed_id") {
        Some(breed_id) => state
            .fixture
            .images_by_breed
            .get(breed_id)
            .cloned()
            .unwrap_or((StatusCode::OK, json!([]))),
        None => state.fixture.tagged_search.clone(),
    };
    (status, Json(body)).into_response()
}

/// Running fake provider
pub struct FakeProvider {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeProvider {
    /// All requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.log.lock().unwrap().clone()
    }

    /// Requests received for `path`
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

/// Start a fake provider on an ephemeral port
pub async fn start_provider(fixture: ProviderFixture) -> FakeProvider {
    let state = Arc::new(FakeState {
        fixture,
        log: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/v1/breeds", get(breeds_handler))
        .route("/v1/breeds/:id", get(breed_handler))
        .route("/v1/images/search", get(search_handler))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let local_addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeProvider {
        base_url: format!("http://{}", local_addr),
        state,
    }
}

/// Config pointing both providers at fakes
pub fn config_for(dog: &FakeProvider, cat: &FakeProvider) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        dog: ProviderConfig {
            base_url: dog.base_url.clone(),
            api_key: DOG_KEY.to_string(),
            timeout_secs: 5,
        },
        cat: ProviderConfig {
            base_url: cat.base_url.clone(),
            api_key: CAT_KEY.to_string(),
            timeout_secs: 5,
        },
        logging: LoggingConfig::default(),
    }
}

pub fn aggregator_for(dog: &FakeProvider, cat: &FakeProvider) -> BreedAggregator {
    BreedAggregator::with_seed(&config_for(dog, cat), TEST_SEED).unwrap()
}

/// Start the Pets Explorer service against the given fakes; returns its base URL.
pub async fn start_service(dog: &FakeProvider, cat: &FakeProvider) -> String {
    let config = config_for(dog, cat);
    let aggregator = BreedAggregator::with_seed(&config, TEST_SEED).unwrap();
    let state = Arc::new(AppState::with_aggregator(aggregator).unwrap());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let local_addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", local_addr)
}

/// Dog image search payload: `count` tagged images plus `untagged` without breeds
pub fn dog_images(count: u64, untagged: u64) -> Value {
    let mut images: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": format!("dog-img-{i}"),
                "url": format!("https://cdn2.thedogapi.com/images/dog-img-{i}.jpg"),
                "breeds": [{ "id": 100 + i, "name": format!("Dog Breed {i}") }]
            })
        })
        .collect();
    images.extend((0..untagged).map(|i| {
        json!({
            "id": format!("untagged-{i}"),
            "url": format!("https://cdn2.thedogapi.com/images/untagged-{i}.jpg"),
            "breeds": []
        })
    }));
    Value::Array(images)
}

pub fn gallery(prefix: &str, count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "id": format!("{prefix}-{i}"),
                    "url": format!("https://cdn/{prefix}-{i}.jpg"),
                    "width": 800,
                    "height": 600
                })
            })
            .collect(),
    )
}

/// Undo minijinja's escaping of '/' so assertions can use plain paths
pub fn plain(html: String) -> String {
    html.replace("&#x2f;", "/")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}
