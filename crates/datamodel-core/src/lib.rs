//! Data-model core - entities and backends for the metadata admin
//!
//! This crate provides the entity layer that admin components depend on.
//! It defines:
//!
//! - `MetadataBackend` - Trait for metadata storage implementations
//! - `TableEntity` / `DatabaseEntity` - Behaviour attached to resolved entities
//! - `EntityStore` - Resolves entities by id and caches id-fields per database
//! - `MemoryBackend` - JSON-catalog backed backend used by the CLI and tests
//! - Common types like `TableInfo`, `FieldInfo`, `VisibilityType`, `TableUpdate`

mod backend;
mod entity;
mod error;
mod memory;
mod store;
mod types;

pub use backend::*;
pub use entity::*;
pub use error::*;
pub use memory::{Catalog, MemoryBackend};
pub use store::EntityStore;
pub use types::*;
