use serde::{Deserialize, Serialize};

use depot_core::{Record, RecordId};

/// A directory user.
///
/// `age` carries whatever integer the caller supplied (zero and negative
/// values included) and is omitted from JSON output when absent. Email is
/// stored verbatim; no format checks apply at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
}

/// Caller-supplied fields for a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
}

impl Record for User {
    type Draft = UserDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn materialize(id: RecordId, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            age: draft.age,
        }
    }
}
