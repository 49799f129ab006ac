//! Entity store
//!
//! Resolves databases and tables by id from a backend and keeps the id-field
//! cache that the column editor reads from.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::{Database, DatabaseId, IdField, MetadataBackend, Result, Table, TableId};

pub struct EntityStore {
    backend: Arc<dyn MetadataBackend>,
    runtime: Handle,
    idfields: RwLock<HashMap<DatabaseId, Vec<IdField>>>,
    /// Background id-field loads that have not been awaited yet
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl EntityStore {
    pub fn new(backend: Arc<dyn MetadataBackend>, runtime: Handle) -> Arc<Self> {
        Arc::new(Self {
            backend,
            runtime,
            idfields: RwLock::new(HashMap::new()),
            pending: Mutex::new(Vec::new()),
        })
    }

    pub fn backend(&self) -> &Arc<dyn MetadataBackend> {
        &self.backend
    }

    /// Resolve a database entity
    #[tracing::instrument(skip(self))]
    pub async fn database(self: &Arc<Self>, id: DatabaseId) -> Result<Arc<Database>> {
        let info = self.backend.database(id).await?;
        Ok(Arc::new(Database::new(info, Arc::clone(self))))
    }

    /// Resolve a table entity with its fields, segments and metrics
    #[tracing::instrument(skip(self))]
    pub async fn table(&self, id: TableId) -> Result<Arc<Table>> {
        let info = self.backend.table(id).await?;
        Ok(Arc::new(Table::new(info, Arc::clone(&self.backend))))
    }

    /// Cached id-fields for a database, if they have been loaded
    pub fn idfields(&self, id: DatabaseId) -> Option<Vec<IdField>> {
        self.idfields.read().get(&id).cloned()
    }

    /// Load id-fields from the backend and cache them
    #[tracing::instrument(skip(self))]
    pub async fn load_idfields(&self, id: DatabaseId) -> Result<Vec<IdField>> {
        let fields = self.backend.idfields(id).await?;
        tracing::debug!(count = fields.len(), "id-fields loaded");
        self.idfields.write().insert(id, fields.clone());
        Ok(fields)
    }

    pub(crate) fn spawn_idfields_fetch(self: &Arc<Self>, id: DatabaseId) {
        let store = Arc::clone(self);
        let handle = self.runtime.spawn(async move {
            if let Err(e) = store.load_idfields(id).await {
                tracing::warn!(database_id = %id, "Failed to fetch id-fields: {}", e);
            }
        });

        let mut pending = self.pending.lock();
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }

    /// Wait for every background fetch started so far
    pub async fn settle(&self) {
        loop {
            let handles: Vec<_> = self.pending.lock().drain(..).collect();
            if handles.is_empty() {
                break;
            }
            for handle in handles {
                if let Err(e) = handle.await {
                    tracing::warn!("id-field fetch task failed: {}", e);
                }
            }
        }
    }
}
