use axum::{
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::signet::{marker::MarkerCodec, types::LogoutResponse};

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Auth cookie cleared", body = LogoutResponse)
    ),
    tag = "auth"
)]
// Stateless: there is no server-side session to delete, only the cookie.
pub async fn logout() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    MarkerCodec::clear_marker(&mut headers);

    (StatusCode::OK, headers, Json(LogoutResponse { success: true }))
}
