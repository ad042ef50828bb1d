use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::{valid_phone_number, PHONE_NUMBER_INVALID};
use crate::{
    provider::ProviderClient,
    signet::{
        marker::MarkerCodec,
        types::{LoginRequest, LoginResponse},
    },
};

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Profile fetched and auth cookie set", body = LoginResponse),
        (status = 400, description = "Phone number is not 11 digits starting with 09", body = LoginResponse),
        (status = 500, description = "User-data provider failed", body = LoginResponse),
    ),
    tag = "auth"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    codec: Extension<Arc<MarkerCodec>>,
    provider: Extension<Arc<ProviderClient>>,
    payload: Option<Json<LoginRequest>>,
) -> Response {
    // The provider call does not depend on the number; only reject what the form would.
    if let Some(Json(request)) = &payload {
        if !valid_phone_number(&request.phone_number) {
            return (
                StatusCode::BAD_REQUEST,
                Json(LoginResponse::failure(PHONE_NUMBER_INVALID)),
            )
                .into_response();
        }
    }

    let user = match provider.fetch_profile().await {
        Ok(user) => user,
        Err(err) => {
            error!("Login failed: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LoginResponse::failure(err.to_string())),
            )
                .into_response();
        }
    };

    let mut headers = HeaderMap::new();
    if let Err(err) = codec.set_marker(&mut headers) {
        error!("Failed to build auth cookie: {err}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(LoginResponse::failure("Failed to establish session")),
        )
            .into_response();
    }

    info!("Login succeeded, auth cookie issued");

    (StatusCode::OK, headers, Json(LoginResponse::success(user))).into_response()
}
