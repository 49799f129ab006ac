//! Common test utilities and mocks

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use datamodel_core::{
    DataModelError, DatabaseEntity, DatabaseId, Result, TableEntity, TableId, TableInfo,
    TableUpdate, VisibilityType,
};
use datamodel_metadata_table::{Callback, MetadataTableCallbacks, MetadataTableProps};

/// Mock table recording every update it receives.
///
/// Updates can be held open with a gate to observe the pending state, and
/// can be configured to fail.
pub struct MockTable {
    pub info: TableInfo,
    /// Overrides the computed metadata strength
    pub strength: Option<u8>,
    pub should_fail: bool,
    pub gate: Option<Arc<Notify>>,
    pub updates: Arc<Mutex<Vec<TableUpdate>>>,
}

impl MockTable {
    pub fn new(info: TableInfo) -> Self {
        Self {
            info,
            strength: None,
            should_fail: false,
            gate: None,
            updates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_strength(mut self, strength: u8) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn updates(&self) -> Vec<TableUpdate> {
        self.updates.lock().clone()
    }
}

#[async_trait]
impl TableEntity for MockTable {
    fn info(&self) -> &TableInfo {
        &self.info
    }

    fn metadata_strength(&self) -> u8 {
        self.strength
            .unwrap_or_else(|| self.info.metadata_strength())
    }

    async fn update(&self, update: TableUpdate) -> Result<()> {
        self.updates.lock().push(update);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.should_fail {
            return Err(DataModelError::Backend("update rejected".into()));
        }
        Ok(())
    }
}

/// Mock database counting id-field fetches
pub struct MockDatabase {
    pub id: DatabaseId,
    pub fetch_count: Arc<AtomicUsize>,
}

impl MockDatabase {
    pub fn new(id: i64) -> Self {
        Self {
            id: DatabaseId(id),
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Same database identity sharing this mock's counter
    pub fn with_same_counter(&self, id: i64) -> Self {
        Self {
            id: DatabaseId(id),
            fetch_count: Arc::clone(&self.fetch_count),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

impl DatabaseEntity for MockDatabase {
    fn id(&self) -> DatabaseId {
        self.id
    }

    fn fetch_idfields(&self) {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// The "Orders" table: empty description, queryable
pub fn orders_table() -> TableInfo {
    let mut info = TableInfo::new(TableId(10), DatabaseId(1), "ORDERS");
    info.display_name = "Orders".into();
    info.description = Some(String::new());
    info
}

pub fn hidden_table(visibility: VisibilityType) -> TableInfo {
    let mut info = orders_table();
    info.visibility_type = Some(visibility);
    info
}

/// Callbacks recording what the child lists emitted
#[derive(Default)]
pub struct RecordedCallbacks {
    pub retired_segments: Arc<Mutex<Vec<i64>>>,
    pub retired_metrics: Arc<Mutex<Vec<i64>>>,
    pub updated_fields: Arc<Mutex<Vec<i64>>>,
}

impl RecordedCallbacks {
    pub fn callbacks(&self) -> MetadataTableCallbacks {
        let segments = Arc::clone(&self.retired_segments);
        let metrics = Arc::clone(&self.retired_metrics);
        let fields = Arc::clone(&self.updated_fields);
        MetadataTableCallbacks {
            update_field: Callback::new(move |field: datamodel_core::FieldInfo| {
                fields.lock().push(field.id.0)
            }),
            on_retire_metric: Callback::new(
                move |request: datamodel_core::RetireRequest<datamodel_core::MetricId>| {
                    metrics.lock().push(request.id.0)
                },
            ),
            on_retire_segment: Callback::new(
                move |request: datamodel_core::RetireRequest<datamodel_core::SegmentId>| {
                    segments.lock().push(request.id.0)
                },
            ),
        }
    }
}

pub fn props_with(
    table: Option<Arc<MockTable>>,
    database: Option<Arc<MockDatabase>>,
) -> MetadataTableProps {
    let mut props = MetadataTableProps::new(MetadataTableCallbacks::noop());
    if let Some(table) = table {
        props = props.with_table(table);
    }
    if let Some(database) = database {
        props = props.with_database(database);
    }
    props
}
