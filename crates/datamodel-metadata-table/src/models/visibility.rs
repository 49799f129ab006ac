//! Visibility choices shown in the table header

use datamodel_core::VisibilityType;

/// A clickable visibility label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityOption {
    pub label: &'static str,
    /// Value written to `visibility_type` when clicked
    pub value: Option<VisibilityType>,
    /// Shown as active for any hidden sub-type, not just its own value
    pub matches_any_hidden: bool,
    /// A reason for hiding, only offered once the table is hidden
    pub is_reason: bool,
}

pub const QUERYABLE: VisibilityOption = VisibilityOption {
    label: "Queryable",
    value: None,
    matches_any_hidden: false,
    is_reason: false,
};

pub const HIDDEN: VisibilityOption = VisibilityOption {
    label: "Hidden",
    value: Some(VisibilityType::Hidden),
    matches_any_hidden: true,
    is_reason: false,
};

pub const TECHNICAL: VisibilityOption = VisibilityOption {
    label: "Technical Data",
    value: Some(VisibilityType::Technical),
    matches_any_hidden: false,
    is_reason: true,
};

pub const CRUFT: VisibilityOption = VisibilityOption {
    label: "Irrelevant/Cruft",
    value: Some(VisibilityType::Cruft),
    matches_any_hidden: false,
    is_reason: true,
};

/// All options in display order
pub const VISIBILITY_OPTIONS: [VisibilityOption; 4] = [QUERYABLE, HIDDEN, TECHNICAL, CRUFT];

impl VisibilityOption {
    /// Option that writes `value`
    pub fn for_value(value: Option<VisibilityType>) -> &'static VisibilityOption {
        match value {
            None => &QUERYABLE,
            Some(VisibilityType::Hidden) => &HIDDEN,
            Some(VisibilityType::Technical) => &TECHNICAL,
            Some(VisibilityType::Cruft) => &CRUFT,
        }
    }

    pub fn is_active(&self, current: Option<VisibilityType>) -> bool {
        current == self.value || (self.matches_any_hidden && current.is_some())
    }

    pub fn is_available(&self, current: Option<VisibilityType>) -> bool {
        !self.is_reason || current.is_some()
    }
}
