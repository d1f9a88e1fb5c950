//! Request DTOs and boundary validation.
//!
//! Shape and type checks happen here, before a store is touched; the
//! stores copy whatever fields reach them verbatim.

use axum::http::StatusCode;
use serde::Deserialize;

use depot_items::ItemDraft;
use depot_users::UserDraft;

use crate::app::errors;

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub description: Option<String>,
}

impl CreateItemRequest {
    /// Validate boundary constraints and convert into store input.
    ///
    /// A rejected request never reaches the store, so it consumes no id.
    pub fn into_draft(self) -> Result<ItemDraft, axum::response::Response> {
        if self.name.chars().count() < 2 {
            return Err(errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                "name must be at least 2 characters",
            ));
        }

        Ok(ItemDraft {
            name: self.name,
            description: self.description,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
}

impl CreateUserRequest {
    /// Convert into store input.
    ///
    /// Presence and type of `name`/`email`/`age` are enforced by
    /// deserialization; no length or format checks apply beyond that.
    pub fn into_draft(self) -> UserDraft {
        UserDraft {
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}
