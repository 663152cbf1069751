use serde::{Deserialize, Serialize};

/// Metadata reported for an uploaded blob. The blob itself is never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadMetadata {
    pub filename: String,
    pub size_kb: f64,
    pub mime_type: String,
}
