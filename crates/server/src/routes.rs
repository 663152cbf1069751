use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use service::contacts::ContactService;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod contacts;
pub mod info;
pub mod upload;

#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<ContactService>,
    /// Largest accepted request body on the upload endpoint.
    pub upload_limit: usize,
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(info::home))
        .route("/about", get(info::about))
        .route("/health", get(info::health))
        .route("/metrics", get(info::metrics))
        .route("/api-doc/openapi.json", get(info::openapi_json));

    let contact_routes = Router::new()
        .route("/view", get(contacts::list_contacts))
        .route("/contacts", get(contacts::list_contacts).post(contacts::create_contact))
        .route(
            "/contacts/:id",
            get(contacts::get_contact)
                .put(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
        .route("/sort", get(contacts::sort_contacts));

    let upload_routes = Router::new()
        .route("/upload-image", post(upload::upload_image))
        .layer(DefaultBodyLimit::max(state.upload_limit));

    public
        .merge(contact_routes)
        .merge(upload_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status and latency on the way out
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
