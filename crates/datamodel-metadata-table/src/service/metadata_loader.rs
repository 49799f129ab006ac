//! Props loader for the metadata table
//!
//! Resolves the database and table by id through the entity store and
//! packages them as `MetadataTableProps`.

use anyhow::Context;
use std::sync::Arc;
use tokio::runtime::Handle;

use datamodel_core::{
    DatabaseEntity, DatabaseId, EntityStore, FieldInfo, MetricId, RetireRequest, SegmentId,
    TableEntity, TableId,
};

use crate::events::{Callback, MetadataTableCallbacks};
use crate::panel::MetadataTableProps;

/// Loader turning ids into editor props
pub struct MetadataTableLoader {
    store: Arc<EntityStore>,
}

impl MetadataTableLoader {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<EntityStore> {
        &self.store
    }

    /// Resolve database and table and attach cached id-fields
    ///
    /// # Errors
    /// Returns an error if either entity cannot be loaded.
    #[tracing::instrument(skip(self, callbacks))]
    pub async fn load(
        &self,
        database_id: DatabaseId,
        table_id: TableId,
        callbacks: MetadataTableCallbacks,
    ) -> anyhow::Result<MetadataTableProps> {
        let database = self
            .store
            .database(database_id)
            .await
            .with_context(|| format!("Failed to load database {}", database_id))?;

        let table = self
            .store
            .table(table_id)
            .await
            .with_context(|| format!("Failed to load table {}", table_id))?;

        if table.info().db_id != database_id {
            anyhow::bail!(
                "Table {} belongs to database {}, not {}",
                table_id,
                table.info().db_id,
                database_id
            );
        }

        let mut props = MetadataTableProps::new(callbacks)
            .with_database(database)
            .with_table(table);
        props.idfields = self.store.idfields(database_id);
        Ok(props)
    }

    /// Resolve the same entities again, e.g. after an update completed
    pub async fn reload(&self, props: &MetadataTableProps) -> anyhow::Result<MetadataTableProps> {
        let database_id = props
            .database
            .as_ref()
            .map(|d| d.id())
            .context("Props have no database to reload")?;
        let table_id = props
            .table
            .as_ref()
            .map(|t| t.id())
            .context("Props have no table to reload")?;

        self.load(database_id, table_id, props.callbacks.clone()).await
    }

    /// Callbacks that forward child list actions to the backend.
    ///
    /// Each action runs on `runtime`; failures are logged.
    pub fn backend_callbacks(&self, runtime: Handle) -> MetadataTableCallbacks {
        let backend = Arc::clone(self.store.backend());

        MetadataTableCallbacks {
            update_field: {
                let (backend, runtime) = (Arc::clone(&backend), runtime.clone());
                Callback::new(move |field: FieldInfo| {
                    let backend = Arc::clone(&backend);
                    runtime.spawn(async move {
                        if let Err(e) = backend.update_field(field).await {
                            tracing::warn!("Failed to update field: {}", e);
                        }
                    });
                })
            },
            on_retire_metric: {
                let (backend, runtime) = (Arc::clone(&backend), runtime.clone());
                Callback::new(move |request: RetireRequest<MetricId>| {
                    let backend = Arc::clone(&backend);
                    runtime.spawn(async move {
                        if let Err(e) = backend.retire_metric(request).await {
                            tracing::warn!("Failed to retire metric: {}", e);
                        }
                    });
                })
            },
            on_retire_segment: Callback::new(move |request: RetireRequest<SegmentId>| {
                let backend = Arc::clone(&backend);
                runtime.spawn(async move {
                    if let Err(e) = backend.retire_segment(request).await {
                        tracing::warn!("Failed to retire segment: {}", e);
                    }
                });
            }),
        }
    }
}
