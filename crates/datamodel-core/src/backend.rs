//! Metadata backend trait

use async_trait::async_trait;

use crate::{
    DatabaseId, DatabaseInfo, FieldInfo, IdField, MetricId, Result, RetireRequest, SegmentId,
    TableId, TableInfo, TableUpdate,
};

/// Storage for database and table metadata.
///
/// Implementations own persistence; callers only see resolved snapshots.
#[async_trait]
pub trait MetadataBackend: Send + Sync {
    /// Load a database by id
    async fn database(&self, id: DatabaseId) -> Result<DatabaseInfo>;

    /// Load a table with its fields, segments and metrics
    async fn table(&self, id: TableId) -> Result<TableInfo>;

    /// Apply a single-key update to a table and return the new snapshot
    async fn update_table(&self, id: TableId, update: TableUpdate) -> Result<TableInfo>;

    /// Primary-key fields of every table in the database
    async fn idfields(&self, id: DatabaseId) -> Result<Vec<IdField>>;

    /// Replace a field's metadata
    async fn update_field(&self, field: FieldInfo) -> Result<FieldInfo>;

    /// Archive a segment
    async fn retire_segment(&self, request: RetireRequest<SegmentId>) -> Result<()>;

    /// Archive a metric
    async fn retire_metric(&self, request: RetireRequest<MetricId>) -> Result<()>;
}
