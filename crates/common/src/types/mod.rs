use serde::{Deserialize, Serialize};

/// Liveness body: `{"status": "ok"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub status: String,
}

impl Status {
    pub fn ok() -> Self {
        Self { status: "ok".into() }
    }
}

/// Error body carried by every non-2xx response: `{"reason": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reason {
    pub reason: String,
}

impl Reason {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}
