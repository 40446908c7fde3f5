//! Country reference-data seeding.
//!
//! Loads a JSON array of countries into an empty `country` table.

use std::path::Path;

use sea_orm::DatabaseConnection;
use tokio::fs;
use tracing::{info, warn};

use models::country::{self, NewCountry};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(usize),
    AlreadyPopulated,
    FileMissing,
}

/// Parse the seed file format: `[{"name", "alpha2", "alpha3", "region"?}, ...]`.
pub fn parse_countries(bytes: &[u8]) -> Result<Vec<NewCountry>, ServiceError> {
    serde_json::from_slice(bytes).map_err(|e| ServiceError::Seed(e.to_string()))
}

/// Insert countries from `path` unless the table already has rows.
pub async fn seed_countries<P: AsRef<Path>>(db: &DatabaseConnection, path: P) -> Result<SeedOutcome, ServiceError> {
    let path = path.as_ref();
    let existing = country::count(db).await?;
    if existing > 0 {
        info!(existing, "country table already populated, skipping seed");
        return Ok(SeedOutcome::AlreadyPopulated);
    }

    let bytes = match fs::read(path).await {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "country seed file not found");
            return Ok(SeedOutcome::FileMissing);
        }
        Err(e) => return Err(ServiceError::Seed(format!("{}: {e}", path.display()))),
    };

    let rows = parse_countries(&bytes)?;
    let inserted = country::insert_many(db, rows).await?;
    info!(inserted, path = %path.display(), "countries_seeded");
    Ok(SeedOutcome::Inserted(inserted))
}
