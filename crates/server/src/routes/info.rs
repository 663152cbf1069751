use axum::http::StatusCode;
use axum::Json;
use common::types::{Health, Message};

use crate::observability;
use crate::openapi::ApiDoc;
use utoipa::OpenApi;

#[utoipa::path(get, path = "/", tag = "info", responses((status = 200, description = "Service banner", body = crate::openapi::MessageDoc)))]
pub async fn home() -> Json<Message> {
    Json(Message::new("Contact management API"))
}

#[utoipa::path(get, path = "/about", tag = "info", responses((status = 200, description = "About", body = crate::openapi::MessageDoc)))]
pub async fn about() -> Json<Message> {
    Json(Message::new("A fully functional API to manage your contacts"))
}

#[utoipa::path(get, path = "/health", tag = "info", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics() -> (StatusCode, String) {
    observability::encode_metrics()
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
