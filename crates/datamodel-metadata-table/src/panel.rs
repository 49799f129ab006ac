//! Metadata Table
//!
//! Editor for one table's metadata on the data-model admin screen:
//! - Display name and description, committed when the input loses focus
//! - Visibility (queryable, hidden, or hidden with a reason)
//! - Metadata strength indicator
//! - Segment, metric and column lists
//!
//! ## Lifecycle
//!
//! 1. The caller resolves database and table entities (see `MetadataTableLoader`)
//! 2. `MetadataTable::new` builds the editor from those props
//! 3. `mount` requests id-fields for the database
//! 4. Handlers call `TableEntity::update`; the caller reloads props and
//!    passes them back through `set_props`
//!
//! Every mutation is delegated to the table entity. The editor only tracks
//! its input buffers and whether an update is in flight.

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use datamodel_core::{
    DatabaseEntity, DatabaseId, IdField, TableEntity, TableUpdate, VisibilityType,
};

#[path = "ui/mod.rs"]
mod ui;

use crate::events::MetadataTableCallbacks;
use crate::models::{EditBuffer, SaveStatus, SaveTracker, VisibilityOption};
use crate::view::{Container, Element};

/// Inputs supplied by the owner of the editor
#[derive(Clone)]
pub struct MetadataTableProps {
    pub database: Option<Arc<dyn DatabaseEntity>>,
    /// `None` while the table is still loading
    pub table: Option<Arc<dyn TableEntity>>,
    /// Reference fields for the column editor; the column list is only
    /// rendered once these are present
    pub idfields: Option<Vec<IdField>>,
    pub callbacks: MetadataTableCallbacks,
}

impl MetadataTableProps {
    pub fn new(callbacks: MetadataTableCallbacks) -> Self {
        Self {
            database: None,
            table: None,
            idfields: None,
            callbacks,
        }
    }

    pub fn with_database(mut self, database: Arc<dyn DatabaseEntity>) -> Self {
        self.database = Some(database);
        self
    }

    pub fn with_table(mut self, table: Arc<dyn TableEntity>) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_idfields(mut self, idfields: Vec<IdField>) -> Self {
        self.idfields = Some(idfields);
        self
    }

    fn database_id(&self) -> Option<DatabaseId> {
        self.database.as_ref().map(|d| d.id())
    }
}

impl std::fmt::Debug for MetadataTableProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataTableProps")
            .field("database", &self.database_id())
            .field("table", &self.table.as_ref().map(|t| t.id()))
            .field("idfields", &self.idfields.as_ref().map(Vec::len))
            .finish()
    }
}

/// Table metadata editor
pub struct MetadataTable {
    props: MetadataTableProps,

    /// Buffer behind the display name input
    name_input: EditBuffer,

    /// Buffer behind the description input
    description_input: EditBuffer,

    save: SaveTracker,

    /// Runtime update tasks are spawned on
    runtime: Handle,

    mounted: bool,

    /// Database whose id-fields were last requested during this mount
    fetched_database: Option<DatabaseId>,

    /// Update tasks that have not been awaited yet
    pending: Vec<JoinHandle<()>>,
}

impl MetadataTable {
    pub fn new(props: MetadataTableProps, runtime: Handle) -> Self {
        let (name, description) = match &props.table {
            Some(table) => (
                table.display_name().to_string(),
                table.description().unwrap_or_default().to_string(),
            ),
            None => (String::new(), String::new()),
        };

        Self {
            props,
            name_input: EditBuffer::new(name),
            description_input: EditBuffer::new(description),
            save: SaveTracker::new(),
            runtime,
            mounted: false,
            fetched_database: None,
            pending: Vec::new(),
        }
    }

    pub fn props(&self) -> &MetadataTableProps {
        &self.props
    }

    /// Attach the editor and request id-fields for the current database
    pub fn mount(&mut self) {
        self.mounted = true;
        self.fetched_database = None;
        self.sync_database();
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.fetched_database = None;
    }

    /// Replace the props after the owner re-resolved its entities.
    ///
    /// Id-fields are requested again only when the database id changed.
    /// An edit in progress survives a reload of the same table but is
    /// discarded when a different table arrives.
    pub fn set_props(&mut self, props: MetadataTableProps) {
        let previous_table = self.props.table.as_ref().map(|t| t.id());
        self.props = props;

        if let Some(table) = &self.props.table {
            let name = table.display_name();
            let description = table.description().unwrap_or_default();
            if previous_table == Some(table.id()) {
                self.name_input.sync(name);
                self.description_input.sync(description);
            } else {
                self.name_input.reset(name);
                self.description_input.reset(description);
            }
        }

        if self.mounted {
            self.sync_database();
        }
    }

    fn sync_database(&mut self) {
        let current = self.props.database_id();
        if current == self.fetched_database {
            return;
        }

        self.fetched_database = current;
        if let Some(database) = &self.props.database {
            tracing::debug!(database_id = %database.id(), "requesting id-fields");
            database.fetch_idfields();
        }
    }

    /// Whether the table is hidden for any reason
    pub fn is_hidden(&self) -> bool {
        self.props
            .table
            .as_ref()
            .is_some_and(|t| t.visibility_type().is_some())
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save.status()
    }

    pub fn name_value(&self) -> &str {
        self.name_input.value()
    }

    pub fn description_value(&self) -> &str {
        self.description_input.value()
    }

    pub fn focus_name(&mut self) {
        self.name_input.focus();
    }

    pub fn input_name(&mut self, text: impl Into<String>) {
        self.name_input.input(text);
    }

    /// Name input lost focus
    pub fn blur_name(&mut self) {
        if let Some(value) = self.name_input.blur() {
            self.on_name_change(&value);
        }
    }

    pub fn focus_description(&mut self) {
        self.description_input.focus();
    }

    pub fn input_description(&mut self, text: impl Into<String>) {
        self.description_input.input(text);
    }

    /// Description input lost focus
    pub fn blur_description(&mut self) {
        if let Some(value) = self.description_input.blur() {
            self.on_description_change(&value);
        }
    }

    /// Commit a new display name.
    ///
    /// A blank name is not allowed; the input snaps back to the table's
    /// current name without an update.
    pub fn on_name_change(&mut self, value: &str) {
        if value.is_empty() {
            let current = self
                .props
                .table
                .as_ref()
                .map(|t| t.display_name().to_string())
                .unwrap_or_default();
            self.name_input.reset(current);
            return;
        }
        self.update_property(TableUpdate::DisplayName(value.to_string()));
    }

    /// Commit a new description; empty clears it
    pub fn on_description_change(&mut self, value: &str) {
        self.update_property(TableUpdate::Description(value.to_string()));
    }

    /// Visibility label clicked.
    ///
    /// Returns `false` when the label is not offered in the current state,
    /// i.e. a reason clicked while the table is queryable.
    pub fn on_visibility_click(&mut self, value: Option<VisibilityType>) -> bool {
        let current = self.props.table.as_ref().and_then(|t| t.visibility_type());
        if !VisibilityOption::for_value(value).is_available(current) {
            tracing::debug!(?value, "visibility reason ignored for queryable table");
            return false;
        }
        self.update_property(TableUpdate::Visibility(value));
        true
    }

    /// Update a property given by name, e.g. `("visibility_type", null)`
    pub fn update_property_named(
        &mut self,
        name: &str,
        value: serde_json::Value,
    ) -> datamodel_core::Result<()> {
        let update = TableUpdate::from_field(name, value)?;
        self.update_property(update);
        Ok(())
    }

    /// Send a single-key update to the table without waiting for it
    pub fn update_property(&mut self, update: TableUpdate) {
        let Some(table) = self.props.table.clone() else {
            tracing::debug!(field = update.field_name(), "no table loaded, update dropped");
            return;
        };

        let field = update.field_name();
        tracing::debug!(table_id = %table.id(), field, "updating table property");

        self.save.begin();
        let save = self.save.clone();
        let handle = self.runtime.spawn(async move {
            let result = table.update(update).await;
            if let Err(e) = &result {
                tracing::warn!(table_id = %table.id(), field, "Failed to update table: {}", e);
            }
            save.finish(result.map_err(|e| e.to_string()));
        });

        self.pending.retain(|h| !h.is_finished());
        self.pending.push(handle);
    }

    /// Wait for every update sent so far
    pub async fn settle(&mut self) {
        for handle in std::mem::take(&mut self.pending) {
            if let Err(e) = handle.await {
                tracing::warn!("table update task failed: {}", e);
            }
        }
    }

    /// Render the editor, or `None` while there is no table
    pub fn render(&self) -> Option<Element> {
        let table = self.props.table.as_deref()?;

        Some(
            Container::new("MetadataTable")
                .child(ui::title::render_title(self))
                .child(ui::header::render_header(self, table))
                .child(ui::lists::render_lists(self, table))
                .into(),
        )
    }
}
