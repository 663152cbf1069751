use models::UploadMetadata;

/// Mime type reported when the client did not declare one.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Describe an uploaded blob. Pure: the bytes are inspected and dropped.
pub fn describe_upload(blob: &[u8], filename: &str, declared_mime_type: &str) -> UploadMetadata {
    UploadMetadata {
        filename: filename.to_string(),
        size_kb: size_kb(blob.len()),
        mime_type: declared_mime_type.to_string(),
    }
}

/// Kibibytes rounded to two decimals; exact halves go to the even hundredth.
pub fn size_kb(len: usize) -> f64 {
    (len as f64 * 100.0 / 1024.0).round_ties_even() / 100.0
}
