//! Country lookups: domain view, repository, service.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::CountryService;
