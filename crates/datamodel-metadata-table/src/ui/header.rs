use datamodel_core::{TableEntity, VisibilityType};

use crate::models::{SaveStatus, VISIBILITY_OPTIONS, VisibilityOption};
use crate::panel::MetadataTable;
use crate::view::{ChoiceElement, Container, Element, ProgressBarElement, TextElement};

use super::labels;

/// Render the visibility widget, save status and metadata strength
pub(in crate::panel) fn render_header(this: &MetadataTable, table: &dyn TableEntity) -> Element {
    let status = match this.save_status() {
        SaveStatus::Idle => None,
        SaveStatus::Pending => Some(labels::SAVING.to_string()),
        SaveStatus::Failed(error) => Some(format!("{}: {}", labels::SAVE_FAILED, error)),
    };

    Container::new("MetadataTable-header")
        .child(TextElement::label(labels::VISIBILITY))
        .child(render_visibility_widget(table.visibility_type()))
        .when_some(status, |header, status| {
            header.child(Container::new("MetadataTable-status").child(TextElement::new(status)))
        })
        .child(
            Container::new("flex-align-right")
                .child(TextElement::label(labels::METADATA_STRENGTH))
                .child(ProgressBarElement {
                    percentage: table.metadata_strength().min(100),
                    color: labels::STRENGTH_COLOR,
                }),
        )
        .into()
}

fn render_visibility_widget(current: Option<VisibilityType>) -> Container {
    let choice = |option: &VisibilityOption| ChoiceElement {
        label: option.label,
        value: option.value,
        active: option.is_active(current),
    };

    // Reasons are only offered once the table is hidden
    let reasons = current.is_some().then(|| {
        Container::new("border-left")
            .id("VisibilitySubTypes")
            .child(TextElement::label(labels::WHY_HIDE))
            .children(
                VISIBILITY_OPTIONS
                    .iter()
                    .filter(|o| o.is_reason)
                    .map(|o| choice(o).into()),
            )
    });

    Container::new("VisibilityTypes")
        .id("VisibilityTypes")
        .children(
            VISIBILITY_OPTIONS
                .iter()
                .filter(|o| !o.is_reason)
                .map(|o| choice(o).into()),
        )
        .when_some(reasons, |widget, reasons| widget.child(reasons))
}
