use serde::{Deserialize, Serialize};

use depot_core::{Record, RecordId};

/// A catalog item.
///
/// `description` is omitted from JSON output when absent, mirroring the
/// create input where the field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: RecordId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Caller-supplied fields for a new item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: Option<String>,
}

impl Record for Item {
    type Draft = ItemDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn materialize(id: RecordId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
        }
    }
}
