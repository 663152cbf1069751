use async_trait::async_trait;
use models::ContactDocument;

use crate::errors::ServiceError;

/// Trait abstraction for contact document storage.
/// Implementations load and replace the whole document at once.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the full document. A store that has never been written returns an empty one.
    async fn load(&self) -> Result<ContactDocument, ServiceError>;
    /// Replace the stored document. Readers see either the old or the new document, never a mix.
    async fn save(&self, doc: &ContactDocument) -> Result<(), ServiceError>;
}
