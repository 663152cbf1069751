//! Storage abstractions for service layer
//!
//! `RecordStore` is the seam the contact service is written against;
//! `JsonFileStore` keeps the whole contact document in one JSON file.

pub mod record_store;
pub mod json_file_store;

pub use json_file_store::JsonFileStore;
pub use record_store::RecordStore;
