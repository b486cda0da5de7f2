use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identifier of a record and of the tree node projected from it.
pub type NodeId = String;

/// Ids of the nodes rendered in the expanded state.
pub type ExpandedSet = HashSet<NodeId>;

/// Host-owned flat item referencing its parent by id.
///
/// Fields other than `id`, `parent_id` and `label` are kept verbatim in
/// [`Record::extra`] so they survive a drag-and-drop round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: NodeId,
    #[serde(default, deserialize_with = "deserialize_parent_id")]
    pub parent_id: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Create a record without label or extra fields.
    pub fn new(id: impl Into<NodeId>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.map(str::to_owned),
            label: None,
            extra: Map::new(),
        }
    }

    /// Attach a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach an arbitrary host field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Label shown for the record, falling back to the id when the label is
    /// missing or empty.
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.id,
        }
    }

    /// Whether the record sits at the root level.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Ids arrive as JSON strings or integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl RawId {
    fn into_id(self) -> NodeId {
        match self {
            RawId::Text(value) => value,
            RawId::Unsigned(value) => value.to_string(),
            RawId::Signed(value) => value.to_string(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<NodeId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawId::deserialize(deserializer)?.into_id())
}

fn deserialize_parent_id<'de, D>(
    deserializer: D,
) -> Result<Option<NodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(RawId::into_id))
}
