use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use common::types::Message;
use models::{ContactDocument, ContactRecord, ContactUpdate, NewContact};
use serde::{Deserialize, Serialize};

use crate::errors::JsonApiError;
use crate::observability;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct SortQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Confirmation body for create and update.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
    pub contact: ContactRecord,
}

#[utoipa::path(get, path = "/contacts", tag = "contacts", responses((status = 200, description = "All contacts keyed by id"), (status = 500, description = "Storage error", body = crate::openapi::ErrorBodyDoc)))]
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<ContactDocument>, JsonApiError> {
    let result = state.contacts.get_all().await;
    observability::record("list", &result);
    Ok(Json(result?))
}

#[utoipa::path(
    get,
    path = "/contacts/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "The ID of the contact to retrieve", example = 1)),
    responses(
        (status = 200, description = "Contact", body = crate::openapi::ContactRecordDoc),
        (status = 404, description = "Contact not found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_contact(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ContactRecord>, JsonApiError> {
    let Path(id) = path?;
    let result = state.contacts.get_one(id).await;
    observability::record("get", &result);
    Ok(Json(result?))
}

#[utoipa::path(
    get,
    path = "/sort",
    tag = "contacts",
    params(
        ("sort_by" = String, Query, description = "Field to sort by: name or phone"),
        ("order" = Option<String>, Query, description = "Order of sorting: asc (default) or desc")
    ),
    responses(
        (status = 200, description = "Ordered contacts", body = [crate::openapi::ContactRecordDoc]),
        (status = 400, description = "Invalid sort field or order", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn sort_contacts(
    State(state): State<AppState>,
    query: Result<Query<SortQuery>, QueryRejection>,
) -> Result<Json<Vec<ContactRecord>>, JsonApiError> {
    let Query(q) = query?;
    let sort_by = q
        .sort_by
        .ok_or_else(|| JsonApiError::invalid_argument("query parameter sort_by is required"))?;
    let result = state.contacts.sort(&sort_by, q.order.as_deref()).await;
    observability::record("sort", &result);
    Ok(Json(result?))
}

#[utoipa::path(
    post,
    path = "/contacts",
    tag = "contacts",
    request_body = crate::openapi::NewContactDoc,
    responses(
        (status = 200, description = "Contact added", body = crate::openapi::ContactResponseDoc),
        (status = 400, description = "Invalid input or duplicate id", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<NewContact>, JsonRejection>,
) -> Result<Json<ContactResponse>, JsonApiError> {
    let Json(input) = payload?;
    let result = state.contacts.create(input).await;
    observability::record("create", &result);
    Ok(Json(ContactResponse { message: "Contact added".into(), contact: result? }))
}

#[utoipa::path(
    put,
    path = "/contacts/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    request_body = crate::openapi::ContactUpdateDoc,
    responses(
        (status = 200, description = "Contact updated", body = crate::openapi::ContactResponseDoc),
        (status = 404, description = "Contact not found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update_contact(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ContactUpdate>, JsonRejection>,
) -> Result<Json<ContactResponse>, JsonApiError> {
    let Path(id) = path?;
    let Json(update) = payload?;
    let result = state.contacts.update(id, update).await;
    observability::record("update", &result);
    Ok(Json(ContactResponse { message: "Contact updated".into(), contact: result? }))
}

#[utoipa::path(
    delete,
    path = "/contacts/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Contact not found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(id) = path?;
    let result = state.contacts.delete(id).await;
    observability::record("delete", &result);
    let name = result?;
    Ok(Json(Message::new(format!("Contact '{name}' deleted"))))
}
