//! Users resource: record shape for the user directory.

pub mod user;

pub use user::{User, UserDraft};
