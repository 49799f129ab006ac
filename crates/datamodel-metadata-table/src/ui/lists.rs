use datamodel_core::TableEntity;

use crate::panel::MetadataTable;
use crate::view::{
    ColumnsListElement, Container, Element, MetricsListElement, SegmentsListElement,
};

/// Render the segment, metric and column lists.
///
/// A hidden table keeps its lists but they are styled as disabled. The
/// column list needs id-fields and is left out until they arrive.
pub(in crate::panel) fn render_lists(this: &MetadataTable, table: &dyn TableEntity) -> Element {
    let callbacks = &this.props.callbacks;

    Container::new("MetadataTable-lists")
        .id("MetadataTable-lists")
        .when(this.is_hidden(), |lists| lists.class("disabled"))
        .child(SegmentsListElement {
            table_id: table.id(),
            segments: table.segments().to_vec(),
            on_retire: callbacks.on_retire_segment.clone(),
        })
        .child(MetricsListElement {
            table_id: table.id(),
            metrics: table.metrics().to_vec(),
            on_retire: callbacks.on_retire_metric.clone(),
        })
        .when_some(this.props.idfields.as_ref(), |lists, idfields| {
            lists.child(ColumnsListElement {
                fields: table.fields().to_vec(),
                idfields: idfields.clone(),
                update_field: callbacks.update_field.clone(),
            })
        })
        .into()
}
