use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("duplicate key: {0}")]
    Duplicate(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        if let Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
            return ModelError::Duplicate(detail);
        }
        // Driver codes differ between backends; fall back to the message text.
        let msg = e.to_string();
        if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key value") {
            return ModelError::Duplicate(msg);
        }
        ModelError::Db(msg)
    }
}
