//! Metadata Table editor for the data-model admin
//!
//! A headless component for editing one table's metadata. It renders into
//! an [`Element`] tree that front ends draw with their own widgets.
//!
//! ## Features
//!
//! - Display name and description editing with commit on blur
//! - Visibility selection (queryable, hidden, technical data, cruft)
//! - Metadata strength indicator
//! - Segment, metric and column lists wired to parent callbacks
//!
//! ## Usage
//!
//! ```rust,ignore
//! use datamodel_metadata_table::{MetadataTable, MetadataTableLoader};
//!
//! let loader = MetadataTableLoader::new(store);
//! let callbacks = loader.backend_callbacks(runtime.clone());
//! let props = loader.load(database_id, table_id, callbacks).await?;
//!
//! let mut editor = MetadataTable::new(props, runtime);
//! editor.mount();
//! editor.input_name("Orders");
//! editor.blur_name();
//! let tree = editor.render();
//! ```

pub mod events;
pub mod models;
pub mod service;
pub mod view;

mod panel;

// Re-exports for convenience
pub use events::{Callback, MetadataTableCallbacks};
pub use models::{EditBuffer, SaveStatus, SaveTracker, VISIBILITY_OPTIONS, VisibilityOption};
pub use panel::{MetadataTable, MetadataTableProps};
pub use service::MetadataTableLoader;
pub use view::{
    ChoiceElement, ColumnsListElement, Container, Element, InputElement, InputRole,
    MetricsListElement, ProgressBarElement, SegmentsListElement, TextElement,
};
