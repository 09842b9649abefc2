use axum::response::{IntoResponse, Json};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/",
    responses (
        (status = 200, description = "API banner"),
    ),
    tag = "users",
)]
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Users API" }))
}
