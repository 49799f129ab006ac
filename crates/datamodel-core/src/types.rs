//! Common types for tables, databases and their metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{DataModelError, Result};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a database
    DatabaseId
);
entity_id!(
    /// Identifier of a table
    TableId
);
entity_id!(
    /// Identifier of a field (column)
    FieldId
);
entity_id!(
    /// Identifier of a segment
    SegmentId
);
entity_id!(
    /// Identifier of a metric
    MetricId
);

/// Why a table is hidden from query tools.
///
/// A table whose visibility is `None` is queryable. `Technical` and `Cruft`
/// are reasons for hiding and only meaningful as refinements of `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityType {
    Hidden,
    Technical,
    Cruft,
}

impl VisibilityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityType::Hidden => "hidden",
            VisibilityType::Technical => "technical",
            VisibilityType::Cruft => "cruft",
        }
    }

    /// Parse a visibility including the queryable state.
    ///
    /// `"queryable"` and the empty string map to `None`.
    pub fn parse_option(value: &str) -> Result<Option<Self>> {
        match value.trim().to_lowercase().as_str() {
            "" | "queryable" | "null" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl FromStr for VisibilityType {
    type Err = DataModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hidden" => Ok(VisibilityType::Hidden),
            "technical" => Ok(VisibilityType::Technical),
            "cruft" => Ok(VisibilityType::Cruft),
            other => Err(DataModelError::InvalidUpdate(format!(
                "unknown visibility type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for VisibilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    pub id: DatabaseId,
    pub name: String,
    #[serde(default)]
    pub engine: Option<String>,
}

/// Field (column) metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub id: FieldId,
    pub table_id: TableId,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Semantic classification, e.g. `type/PK` or `type/FK`
    #[serde(default)]
    pub semantic_type: Option<String>,
    #[serde(default)]
    pub fk_target_field_id: Option<FieldId>,
}

impl FieldInfo {
    pub const PRIMARY_KEY: &'static str = "type/PK";

    pub fn is_primary_key(&self) -> bool {
        self.semantic_type.as_deref() == Some(Self::PRIMARY_KEY)
    }
}

/// Segment (saved filter) defined on a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentInfo {
    pub id: SegmentId,
    pub table_id: TableId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

/// Metric (saved aggregation) defined on a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricInfo {
    pub id: MetricId,
    pub table_id: TableId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

/// Table metadata as held by the entity store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableInfo {
    pub id: TableId,
    pub db_id: DatabaseId,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub visibility_type: Option<VisibilityType>,
    #[serde(default)]
    pub fields: Vec<FieldInfo>,
    #[serde(default)]
    pub segments: Vec<SegmentInfo>,
    #[serde(default)]
    pub metrics: Vec<MetricInfo>,
}

impl TableInfo {
    pub fn new(id: TableId, db_id: DatabaseId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            db_id,
            display_name: name.clone(),
            name,
            description: None,
            visibility_type: None,
            fields: Vec::new(),
            segments: Vec::new(),
            metrics: Vec::new(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility_type.is_some()
    }

    /// Documentation completeness, 0-100.
    ///
    /// One check for the table description and one per field description.
    pub fn metadata_strength(&self) -> u8 {
        fn documented(description: &Option<String>) -> bool {
            description.as_deref().is_some_and(|d| !d.trim().is_empty())
        }

        let checks = 1 + self.fields.len();
        let passed = usize::from(documented(&self.description))
            + self
                .fields
                .iter()
                .filter(|f| documented(&f.description))
                .count();

        ((passed * 100 + checks / 2) / checks).min(100) as u8
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, update: &TableUpdate) {
        match update {
            TableUpdate::DisplayName(name) => self.display_name = name.clone(),
            TableUpdate::Description(description) => {
                self.description = Some(description.clone())
            }
            TableUpdate::Visibility(visibility) => self.visibility_type = *visibility,
        }
    }
}

/// Reference field candidate used by the column editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdField {
    pub field_id: FieldId,
    pub table_id: TableId,
    pub table_display_name: String,
    pub field_display_name: String,
}

/// Single-key partial update of a table.
///
/// Serializes to a one-key object such as `{"display_name":"Orders"}` or
/// `{"visibility_type":null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableUpdate {
    DisplayName(String),
    Description(String),
    #[serde(rename = "visibility_type")]
    Visibility(Option<VisibilityType>),
}

impl TableUpdate {
    /// Build an update from a property name and JSON value
    pub fn from_field(name: &str, value: serde_json::Value) -> Result<Self> {
        let mut object = serde_json::Map::new();
        object.insert(name.to_string(), value);
        serde_json::from_value(serde_json::Value::Object(object))
            .map_err(|e| DataModelError::InvalidUpdate(format!("{}: {}", name, e)))
    }

    /// Name of the property this update writes
    pub fn field_name(&self) -> &'static str {
        match self {
            TableUpdate::DisplayName(_) => "display_name",
            TableUpdate::Description(_) => "description",
            TableUpdate::Visibility(_) => "visibility_type",
        }
    }
}

/// Request to retire (archive) a segment or metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetireRequest<I> {
    pub id: I,
    pub revision_message: String,
}
