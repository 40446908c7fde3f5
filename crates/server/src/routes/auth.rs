use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use serde::Serialize;
use service::auth::domain::{Profile, RegisterInput};

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct RegisterOutput { pub profile: Profile }

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = crate::openapi::RegisterRequest,
    responses(
        (status = 201, description = "Registered", body = crate::openapi::RegisterResponse),
        (status = 400, description = "Validation failed", body = crate::openapi::ReasonDoc)
    )
)]
pub async fn register(
    State(state): State<ServerState>,
    payload: Result<Json<RegisterInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterOutput>), ApiError> {
    let Json(input) = payload?;
    let profile = state.auth.register(input).await?;
    Ok((StatusCode::CREATED, Json(RegisterOutput { profile })))
}
