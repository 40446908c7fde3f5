//! Shared wire types, logging bootstrap and filesystem helpers.

pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ok_serializes() {
        let body = serde_json::to_value(types::Status::ok()).unwrap();
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }

    #[test]
    fn reason_serializes() {
        let body = serde_json::to_value(types::Reason::new("Login required!")).unwrap();
        assert_eq!(body, serde_json::json!({"reason": "Login required!"}));
    }
}
