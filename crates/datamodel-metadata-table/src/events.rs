//! Callbacks raised by the metadata table to its parent

use std::fmt;
use std::sync::Arc;

use datamodel_core::{FieldInfo, MetricId, RetireRequest, SegmentId};

/// Handler invoked with a value when a child list reports an action
pub struct Callback<T> {
    handler: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> Callback<T> {
    pub fn new(handler: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Callback that ignores every value
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    pub fn emit(&self, value: T) {
        (self.handler)(value)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// Parent handlers passed down to the segment, metric and column lists
#[derive(Debug, Clone)]
pub struct MetadataTableCallbacks {
    /// A column's metadata was edited
    pub update_field: Callback<FieldInfo>,
    /// User retired a metric
    pub on_retire_metric: Callback<RetireRequest<MetricId>>,
    /// User retired a segment
    pub on_retire_segment: Callback<RetireRequest<SegmentId>>,
}

impl MetadataTableCallbacks {
    pub fn noop() -> Self {
        Self {
            update_field: Callback::noop(),
            on_retire_metric: Callback::noop(),
            on_retire_segment: Callback::noop(),
        }
    }
}
