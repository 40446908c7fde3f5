use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Status;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod auth;
pub mod countries;

/// Liveness probe; never touches the store.
#[utoipa::path(get, path = "/api/ping", tag = "health", responses((status = 200, description = "Alive", body = crate::openapi::StatusDoc)))]
pub async fn ping() -> Json<Status> {
    Json(Status::ok())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/ping", get(ping))
        .route("/api/countries", get(countries::list_countries))
        .route("/api/countries/:alpha2", get(countries::get_country))
        .route("/api/auth/register", post(auth::register))
        .with_state(state);

    api.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request, method and path included
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
