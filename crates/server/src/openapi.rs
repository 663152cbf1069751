use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    pub error: String,
    /// One of invalid_argument, not_found, conflict, storage_read, storage_write
    pub code: String,
}

#[derive(ToSchema)]
pub struct ContactRecordDoc { pub name: String, pub phone: String }

#[derive(ToSchema)]
pub struct NewContactDoc {
    /// Positive, unique contact id
    pub id: i64,
    pub name: String,
    pub phone: String,
}

#[derive(ToSchema)]
pub struct ContactUpdateDoc { pub phone: String }

#[derive(ToSchema)]
pub struct ContactResponseDoc { pub message: String, pub contact: ContactRecordDoc }

#[derive(ToSchema)]
pub struct UploadMetadataDoc { pub filename: String, pub size_kb: f64, pub mime_type: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::info::home,
        crate::routes::info::about,
        crate::routes::info::health,
        crate::routes::contacts::list_contacts,
        crate::routes::contacts::get_contact,
        crate::routes::contacts::sort_contacts,
        crate::routes::contacts::create_contact,
        crate::routes::contacts::update_contact,
        crate::routes::contacts::delete_contact,
        crate::routes::upload::upload_image,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ErrorBodyDoc,
            ContactRecordDoc,
            NewContactDoc,
            ContactUpdateDoc,
            ContactResponseDoc,
            UploadMetadataDoc,
        )
    ),
    tags(
        (name = "info"),
        (name = "contacts"),
        (name = "upload")
    )
)]
pub struct ApiDoc;
