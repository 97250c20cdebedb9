use axum::{
    Router, middleware,
    routing::{delete, get},
};
use std::path::Path;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::db::RecordStore;
use crate::handlers::records::{create_record, delete_record, list_records, update_record};
use crate::middleware::latency::simulate_latency;

#[derive(Clone)]
pub struct RecordsState {
    pub store: RecordStore,
    simulate_latency: bool,
}

impl RecordsState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            simulate_latency: false,
        }
    }

    pub fn with_latency(mut self, enabled: bool) -> Self {
        self.simulate_latency = enabled;
        self
    }

    /// Sleep for `dur` when artificial latency is enabled.
    pub async fn delay(&self, dur: Duration) {
        if self.simulate_latency {
            tokio::time::sleep(dur).await;
        }
    }
}

/// API routes under `/api`, everything else served from `static_dir`.
pub fn records_router(state: RecordsState, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route(
            "/records",
            get(list_records).post(create_record).put(update_record),
        )
        .route("/records/{id}", delete(delete_record))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            simulate_latency,
        ));

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
