//! Service layer for the contact store.
//! - `storage`: the record store seam and its JSON file implementation.
//! - `contacts`: validation and CRUD/sort operations over the store.
//! - `upload`: metadata for uploaded blobs (nothing is persisted).

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod contacts;
pub mod upload;
#[cfg(test)]
pub mod test_support;
