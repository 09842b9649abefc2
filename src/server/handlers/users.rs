use super::ErrorResponse;
use crate::features::users::User;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Users served by `serve`, in the order `/users` returns them.
#[must_use]
pub fn seed_users() -> Vec<User> {
    [
        (1, "Vicent", "Foo", "vicent@example.com"),
        (2, "María", "García", "maria.garcia@example.com"),
        (3, "Juan", "Pérez", "juan.perez@example.com"),
        (4, "Ana", "Martínez", "ana.martinez@example.com"),
    ]
    .into_iter()
    .map(|(id, name, surname, email)| User {
        id,
        name: name.to_string(),
        surname: surname.to_string(),
        email: email.to_string(),
    })
    .collect()
}

#[utoipa::path(
    get,
    path = "/users",
    responses (
        (status = 200, description = "All users", body = [User], content_type = "application/json"),
    ),
    tag = "users",
)]
#[instrument(skip(users))]
pub async fn list_users(users: Extension<Arc<Vec<User>>>) -> impl IntoResponse {
    debug!("listing {} users", users.len());

    Json(users.0.to_vec())
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User id"),
    ),
    responses (
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No user with that id", body = ErrorResponse),
    ),
    tag = "users",
)]
#[instrument(skip(users))]
pub async fn get_user(Path(id): Path<i64>, users: Extension<Arc<Vec<User>>>) -> Response {
    match users.iter().find(|user| user.id == id) {
        Some(user) => Json(user.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("User not found")),
        )
            .into_response(),
    }
}
