use serde::{Deserialize, Serialize};

use super::errors::RegisterError;

/// Registration input as received; every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub login: Option<String>,
    pub email: Option<String>,
    pub country_code: Option<String>,
    pub is_public: Option<bool>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
}

/// Public profile echoed after registration; never carries password or image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub login: String,
    pub email: String,
    pub country_code: String,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
}

/// Presenter for stored users.
pub fn present_profile(u: &models::user::Model) -> Profile {
    Profile {
        login: u.login.clone(),
        email: u.email.clone(),
        country_code: u.country_code.clone(),
        is_public: u.is_public,
        phone: u.phone.clone(),
    }
}

fn required(value: Option<String>, missing: RegisterError) -> Result<String, RegisterError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing),
    }
}

impl RegisterInput {
    /// Presence checks, in order: login, email, countryCode, isPublic.
    pub fn require_fields(self) -> Result<models::user::NewUser, RegisterError> {
        let login = required(self.login, RegisterError::LoginRequired)?;
        let email = required(self.email, RegisterError::EmailRequired)?;
        let country_code = required(self.country_code, RegisterError::CountryCodeRequired)?;
        let is_public = self.is_public.ok_or(RegisterError::IsPublicRequired)?;
        Ok(models::user::NewUser {
            login,
            email,
            password: self.password,
            country_code,
            is_public,
            phone: self.phone,
            image: self.image,
        })
    }
}

/// Length limits, in order: login, then email.
pub fn check_lengths(user: &models::user::NewUser) -> Result<(), RegisterError> {
    use models::user::{char_len, EMAIL_MAX_LEN, LOGIN_MAX_LEN};
    if char_len(&user.login) > LOGIN_MAX_LEN {
        return Err(RegisterError::LoginTooLong);
    }
    if char_len(&user.email) > EMAIL_MAX_LEN {
        return Err(RegisterError::EmailTooLong);
    }
    Ok(())
}
