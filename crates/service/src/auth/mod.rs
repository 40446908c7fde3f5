//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration validates input in a fixed order, then persists the user.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;
