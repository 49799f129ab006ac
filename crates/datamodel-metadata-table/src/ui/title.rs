use crate::panel::MetadataTable;
use crate::view::{Container, Element, InputElement, InputRole};

use super::labels;

/// Render the name and description inputs
pub(in crate::panel) fn render_title(this: &MetadataTable) -> Element {
    Container::new("MetadataTable-title")
        .class("bordered")
        .child(InputElement {
            role: InputRole::Name,
            value: this.name_input.value().to_string(),
            placeholder: None,
        })
        .child(InputElement {
            role: InputRole::Description,
            value: this.description_input.value().to_string(),
            placeholder: Some(labels::NO_DESCRIPTION),
        })
        .into()
}
