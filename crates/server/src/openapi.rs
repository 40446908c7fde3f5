//! OpenAPI document for the public endpoints.

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct StatusDoc { pub status: String }

#[derive(ToSchema)]
pub struct ReasonDoc { pub reason: String }

#[derive(ToSchema)]
pub struct CountryDoc {
    pub name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub region: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub login: String,
    pub email: String,
    pub country_code: String,
    pub is_public: bool,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDoc {
    pub login: String,
    pub email: String,
    pub country_code: String,
    pub is_public: bool,
    pub phone: Option<String>,
}

#[derive(ToSchema)]
pub struct RegisterResponse { pub profile: ProfileDoc }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::ping,
        crate::routes::countries::list_countries,
        crate::routes::countries::get_country,
        crate::routes::auth::register,
    ),
    components(
        schemas(
            StatusDoc,
            ReasonDoc,
            CountryDoc,
            RegisterRequest,
            ProfileDoc,
            RegisterResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "countries"),
        (name = "auth")
    )
)]
pub struct ApiDoc;
