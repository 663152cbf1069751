use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::Json;
use models::UploadMetadata;
use service::upload::{describe_upload, DEFAULT_MIME_TYPE};
use tracing::debug;

use crate::errors::JsonApiError;
use crate::observability::UPLOAD_BYTES_TOTAL;

/// Multipart field that carries the blob.
pub const FILE_FIELD: &str = "file";

/// Report size and declared type of the `file` part. Other parts are ignored
/// and nothing is written to disk.
#[utoipa::path(
    post,
    path = "/upload-image",
    tag = "upload",
    request_body(content = String, content_type = "multipart/form-data", description = "Form with a `file` part"),
    responses(
        (status = 200, description = "Upload metadata", body = crate::openapi::UploadMetadataDoc),
        (status = 400, description = "Missing or malformed file part", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn upload_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadMetadata>, JsonApiError> {
    let mut multipart = multipart?;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let mime_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());
        let bytes = field.bytes().await?;
        UPLOAD_BYTES_TOTAL.inc_by(bytes.len() as u64);
        debug!(%filename, %mime_type, len = bytes.len(), "upload described");
        return Ok(Json(describe_upload(&bytes, &filename, &mime_type)));
    }
    Err(JsonApiError::invalid_argument(format!("multipart field '{FILE_FIELD}' is required")))
}
