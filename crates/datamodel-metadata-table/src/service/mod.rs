//! Service layer for the metadata table
//!
//! Resolves editor props from the entity store.

mod metadata_loader;

pub use metadata_loader::MetadataTableLoader;
