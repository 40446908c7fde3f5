use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use service::country::domain::CountryView;
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

/// List countries, optionally filtered by exact region
#[utoipa::path(
    get,
    path = "/api/countries",
    tag = "countries",
    params(("region" = Option<String>, Query, description = "Exact region match; omit for all countries")),
    responses(
        (status = 200, description = "Matching countries", body = [crate::openapi::CountryDoc]),
        (status = 400, description = "Malformed query string", body = crate::openapi::ReasonDoc)
    )
)]
pub async fn list_countries(
    State(state): State<ServerState>,
    query: Result<Query<RegionQuery>, QueryRejection>,
) -> Result<Json<Vec<CountryView>>, ApiError> {
    let Query(q) = query?;
    let countries = state.countries.list_by_region(q.region.as_deref()).await?;
    Ok(Json(countries))
}

/// Get one country by alpha2 code
#[utoipa::path(
    get,
    path = "/api/countries/{alpha2}",
    tag = "countries",
    params(("alpha2" = String, Path, description = "ISO 3166 alpha-2 code, exact match")),
    responses(
        (status = 200, description = "Country", body = crate::openapi::CountryDoc),
        (status = 404, description = "Unknown code", body = crate::openapi::ReasonDoc)
    )
)]
pub async fn get_country(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<CountryView>, ApiError> {
    let Path(alpha2) = path?;
    match state.countries.get_by_alpha2(&alpha2).await {
        Ok(country) => Ok(Json(country)),
        Err(ServiceError::NotFound(_)) => Err(ApiError::NotFound("Country not found".into())),
        Err(e) => Err(e.into()),
    }
}
