use axum::Router;

pub mod items;
pub mod system;
pub mod users;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/items", items::router())
        .nest("/users", users::router())
}
