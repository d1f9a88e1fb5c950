use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use depot_core::DomainError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_user).get(list_users))
        .route("/:id", get(get_user))
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateUserRequest>,
) -> axum::response::Response {
    let user = services.users.create(body.into_draft());
    tracing::info!(id = %user.id, "user created");

    (StatusCode::CREATED, Json(user)).into_response()
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.users.get(&id) {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(DomainError::NotFound) => {
            errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found")
        }
    }
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.users.list())).into_response()
}
