use thiserror::Error;

/// Registration failures. Client-facing variants render the exact reason sent back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Login required!")]
    LoginRequired,
    #[error("Email required!")]
    EmailRequired,
    #[error("Country code required!")]
    CountryCodeRequired,
    #[error("isPublic required!")]
    IsPublicRequired,
    #[error("Invalid country code")]
    InvalidCountryCode,
    #[error("Login length exceeded the limit")]
    LoginTooLong,
    #[error("Email length exceeded the limit")]
    EmailTooLong,
    #[error("Username already exists")]
    UsernameExists,
    #[error("repository error: {0}")]
    Repository(String),
}

impl RegisterError {
    /// Whether the failure is caused by the request rather than the store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, RegisterError::Repository(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_are_verbatim() {
        assert_eq!(RegisterError::LoginRequired.to_string(), "Login required!");
        assert_eq!(RegisterError::IsPublicRequired.to_string(), "isPublic required!");
        assert_eq!(RegisterError::UsernameExists.to_string(), "Username already exists");
        assert!(RegisterError::EmailTooLong.is_client_error());
        assert!(!RegisterError::Repository("down".into()).is_client_error());
    }
}
