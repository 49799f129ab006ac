//! Element tree produced by rendering the metadata table
//!
//! Front ends walk the tree and draw it with their own widgets. Child lists
//! are leaf elements carrying the data and callbacks they are mounted with.

use datamodel_core::{
    FieldInfo, IdField, MetricId, MetricInfo, RetireRequest, SegmentId, SegmentInfo, TableId,
    VisibilityType,
};

use crate::events::Callback;

#[derive(Debug, Clone)]
pub enum Element {
    Container(Container),
    Text(TextElement),
    Input(InputElement),
    Choice(ChoiceElement),
    ProgressBar(ProgressBarElement),
    SegmentsList(SegmentsListElement),
    MetricsList(MetricsListElement),
    ColumnsList(ColumnsListElement),
}

/// Group of elements with styling classes
#[derive(Debug, Clone, Default)]
pub struct Container {
    pub id: Option<&'static str>,
    pub classes: Vec<&'static str>,
    pub children: Vec<Element>,
}

impl Container {
    pub fn new(class: &'static str) -> Self {
        Self {
            id: None,
            classes: vec![class],
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Apply `f` only when `condition` holds
    pub fn when(self, condition: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if condition { f(self) } else { self }
    }

    /// Apply `f` with the value when `option` is `Some`
    pub fn when_some<T>(self, option: Option<T>, f: impl FnOnce(Self, T) -> Self) -> Self {
        match option {
            Some(value) => f(self, value),
            None => self,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextElement {
    pub text: String,
    pub uppercase: bool,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            uppercase: false,
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            uppercase: true,
        }
    }
}

/// Which editable property an input writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    Name,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputElement {
    pub role: InputRole,
    pub value: String,
    pub placeholder: Option<&'static str>,
}

impl InputElement {
    /// Whether the placeholder is what the user sees
    pub fn shows_placeholder(&self) -> bool {
        self.value.is_empty() && self.placeholder.is_some()
    }
}

/// A visibility label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceElement {
    pub label: &'static str,
    pub value: Option<VisibilityType>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBarElement {
    /// Clamped to 0-100
    pub percentage: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct SegmentsListElement {
    pub table_id: TableId,
    pub segments: Vec<SegmentInfo>,
    pub on_retire: Callback<RetireRequest<SegmentId>>,
}

#[derive(Debug, Clone)]
pub struct MetricsListElement {
    pub table_id: TableId,
    pub metrics: Vec<MetricInfo>,
    pub on_retire: Callback<RetireRequest<MetricId>>,
}

#[derive(Debug, Clone)]
pub struct ColumnsListElement {
    pub fields: Vec<FieldInfo>,
    pub idfields: Vec<IdField>,
    pub update_field: Callback<FieldInfo>,
}

macro_rules! impl_into_element {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(value: $ty) -> Self {
                    Element::$variant(value)
                }
            }
        )*
    };
}

impl_into_element!(
    Container => Container,
    TextElement => Text,
    InputElement => Input,
    ChoiceElement => Choice,
    ProgressBarElement => ProgressBar,
    SegmentsListElement => SegmentsList,
    MetricsListElement => MetricsList,
    ColumnsListElement => ColumnsList,
);

impl Element {
    /// This element followed by all descendants, depth first
    pub fn walk(&self) -> Vec<&Element> {
        let mut out = vec![self];
        if let Element::Container(container) = self {
            for child in &container.children {
                out.extend(child.walk());
            }
        }
        out
    }

    pub fn find_container(&self, id: &str) -> Option<&Container> {
        self.walk().into_iter().find_map(|e| match e {
            Element::Container(c) if c.id == Some(id) => Some(c),
            _ => None,
        })
    }

    pub fn input(&self, role: InputRole) -> Option<&InputElement> {
        self.walk().into_iter().find_map(|e| match e {
            Element::Input(input) if input.role == role => Some(input),
            _ => None,
        })
    }

    pub fn choices(&self) -> Vec<&ChoiceElement> {
        self.walk()
            .into_iter()
            .filter_map(|e| match e {
                Element::Choice(choice) => Some(choice),
                _ => None,
            })
            .collect()
    }

    pub fn choice(&self, label: &str) -> Option<&ChoiceElement> {
        self.choices().into_iter().find(|c| c.label == label)
    }

    pub fn progress_bar(&self) -> Option<&ProgressBarElement> {
        self.walk().into_iter().find_map(|e| match e {
            Element::ProgressBar(bar) => Some(bar),
            _ => None,
        })
    }

    pub fn segments_list(&self) -> Option<&SegmentsListElement> {
        self.walk().into_iter().find_map(|e| match e {
            Element::SegmentsList(list) => Some(list),
            _ => None,
        })
    }

    pub fn metrics_list(&self) -> Option<&MetricsListElement> {
        self.walk().into_iter().find_map(|e| match e {
            Element::MetricsList(list) => Some(list),
            _ => None,
        })
    }

    pub fn columns_list(&self) -> Option<&ColumnsListElement> {
        self.walk().into_iter().find_map(|e| match e {
            Element::ColumnsList(list) => Some(list),
            _ => None,
        })
    }

    pub fn texts(&self) -> Vec<&str> {
        self.walk()
            .into_iter()
            .filter_map(|e| match e {
                Element::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect()
    }
}
