//! In-memory metadata backend
//!
//! Holds a [`Catalog`] behind a lock. Catalogs load from and save to JSON,
//! which is what the admin CLI uses as its storage.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    DataModelError, DatabaseId, DatabaseInfo, FieldInfo, IdField, MetadataBackend, MetricId,
    Result, RetireRequest, SegmentId, TableId, TableInfo, TableUpdate,
};

/// Serializable set of databases and tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub databases: Vec<DatabaseInfo>,
    pub tables: Vec<TableInfo>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn table_mut(&mut self, id: TableId) -> Result<&mut TableInfo> {
        self.tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DataModelError::not_found("table", id))
    }
}

/// Metadata backend over an in-memory catalog
#[derive(Debug, Default)]
pub struct MemoryBackend {
    catalog: RwLock<Catalog>,
}

impl MemoryBackend {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    /// Copy of the current catalog
    pub fn snapshot(&self) -> Catalog {
        self.catalog.read().clone()
    }
}

#[async_trait]
impl MetadataBackend for MemoryBackend {
    async fn database(&self, id: DatabaseId) -> Result<DatabaseInfo> {
        self.catalog
            .read()
            .databases
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| DataModelError::not_found("database", id))
    }

    async fn table(&self, id: TableId) -> Result<TableInfo> {
        self.catalog
            .read()
            .tables
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| DataModelError::not_found("table", id))
    }

    async fn update_table(&self, id: TableId, update: TableUpdate) -> Result<TableInfo> {
        let mut catalog = self.catalog.write();
        let table = catalog.table_mut(id)?;
        table.apply(&update);
        Ok(table.clone())
    }

    async fn idfields(&self, id: DatabaseId) -> Result<Vec<IdField>> {
        let catalog = self.catalog.read();
        if !catalog.databases.iter().any(|d| d.id == id) {
            return Err(DataModelError::not_found("database", id));
        }

        Ok(catalog
            .tables
            .iter()
            .filter(|t| t.db_id == id)
            .flat_map(|t| {
                t.fields
                    .iter()
                    .filter(|f| f.is_primary_key())
                    .map(move |f| IdField {
                        field_id: f.id,
                        table_id: t.id,
                        table_display_name: t.display_name.clone(),
                        field_display_name: f.display_name.clone(),
                    })
            })
            .collect())
    }

    async fn update_field(&self, field: FieldInfo) -> Result<FieldInfo> {
        let mut catalog = self.catalog.write();
        let table = catalog.table_mut(field.table_id)?;
        let slot = table
            .fields
            .iter_mut()
            .find(|f| f.id == field.id)
            .ok_or_else(|| DataModelError::not_found("field", field.id))?;
        *slot = field.clone();
        Ok(field)
    }

    async fn retire_segment(&self, request: RetireRequest<SegmentId>) -> Result<()> {
        let mut catalog = self.catalog.write();
        let segment = catalog
            .tables
            .iter_mut()
            .flat_map(|t| t.segments.iter_mut())
            .find(|s| s.id == request.id)
            .ok_or_else(|| DataModelError::not_found("segment", request.id))?;
        segment.archived = true;
        tracing::info!(segment_id = %request.id, message = %request.revision_message, "Segment retired");
        Ok(())
    }

    async fn retire_metric(&self, request: RetireRequest<MetricId>) -> Result<()> {
        let mut catalog = self.catalog.write();
        let metric = catalog
            .tables
            .iter_mut()
            .flat_map(|t| t.metrics.iter_mut())
            .find(|m| m.id == request.id)
            .ok_or_else(|| DataModelError::not_found("metric", request.id))?;
        metric.archived = true;
        tracing::info!(metric_id = %request.id, message = %request.revision_message, "Metric retired");
        Ok(())
    }
}
