//! Entity interfaces consumed by admin components
//!
//! Components never talk to a backend directly. They receive resolved
//! entities that carry both a metadata snapshot and the behaviour needed to
//! mutate or refresh it.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::{
    DatabaseId, DatabaseInfo, EntityStore, FieldInfo, MetadataBackend, MetricInfo, Result,
    SegmentInfo, TableId, TableInfo, TableUpdate, VisibilityType,
};

/// A resolved table with an update operation
#[async_trait]
pub trait TableEntity: Send + Sync {
    /// Snapshot the entity was resolved with
    fn info(&self) -> &TableInfo;

    fn id(&self) -> TableId {
        self.info().id
    }

    fn display_name(&self) -> &str {
        &self.info().display_name
    }

    fn description(&self) -> Option<&str> {
        self.info().description.as_deref()
    }

    fn visibility_type(&self) -> Option<VisibilityType> {
        self.info().visibility_type
    }

    fn metadata_strength(&self) -> u8 {
        self.info().metadata_strength()
    }

    fn fields(&self) -> &[FieldInfo] {
        &self.info().fields
    }

    fn segments(&self) -> &[SegmentInfo] {
        &self.info().segments
    }

    fn metrics(&self) -> &[MetricInfo] {
        &self.info().metrics
    }

    /// Persist a single-key partial update.
    ///
    /// The snapshot held by this entity is not refreshed; callers resolve
    /// the table again to observe the change.
    async fn update(&self, update: TableUpdate) -> Result<()>;
}

/// A resolved database
pub trait DatabaseEntity: Send + Sync {
    fn id(&self) -> DatabaseId;

    /// Start loading the database's id-fields in the background.
    ///
    /// Returns immediately; the result lands in the entity store.
    fn fetch_idfields(&self);
}

/// Table bound to a metadata backend
pub struct Table {
    info: TableInfo,
    backend: Arc<dyn MetadataBackend>,
}

impl Table {
    pub fn new(info: TableInfo, backend: Arc<dyn MetadataBackend>) -> Self {
        Self { info, backend }
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table").field("info", &self.info).finish()
    }
}

#[async_trait]
impl TableEntity for Table {
    fn info(&self) -> &TableInfo {
        &self.info
    }

    #[tracing::instrument(skip(self), fields(table_id = %self.info.id))]
    async fn update(&self, update: TableUpdate) -> Result<()> {
        let field = update.field_name();
        self.backend.update_table(self.info.id, update).await?;
        tracing::debug!(field, "table updated");
        Ok(())
    }
}

/// Database bound to the entity store that resolved it
pub struct Database {
    info: DatabaseInfo,
    store: Arc<EntityStore>,
}

impl Database {
    pub fn new(info: DatabaseInfo, store: Arc<EntityStore>) -> Self {
        Self { info, store }
    }

    pub fn info(&self) -> &DatabaseInfo {
        &self.info
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database").field("info", &self.info).finish()
    }
}

impl DatabaseEntity for Database {
    fn id(&self) -> DatabaseId {
        self.info.id
    }

    fn fetch_idfields(&self) {
        self.store.spawn_idfields_fetch(self.info.id);
    }
}
