//! Value objects for the contact store.
//! - `contact`: identifiers, records and validated inputs.
//! - `document`: the ordered id -> record mapping persisted on disk.
//! - `sort`: sort keys accepted by the listing endpoint.

pub mod errors;
pub mod contact;
pub mod document;
pub mod sort;
pub mod upload;

pub use contact::{Contact, ContactId, ContactRecord, ContactUpdate, NewContact};
pub use document::ContactDocument;
pub use sort::{SortField, SortOrder};
pub use upload::UploadMetadata;
