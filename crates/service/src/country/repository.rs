use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn list_by_region(&self, region: Option<&str>) -> Result<Vec<models::country::Model>, ServiceError>;
    async fn find_by_alpha2(&self, alpha2: &str) -> Result<Option<models::country::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCountryRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CountryRepository for SeaOrmCountryRepository {
    async fn list_by_region(&self, region: Option<&str>) -> Result<Vec<models::country::Model>, ServiceError> {
        Ok(models::country::list_by_region(&self.db, region).await?)
    }

    async fn find_by_alpha2(&self, alpha2: &str) -> Result<Option<models::country::Model>, ServiceError> {
        Ok(models::country::find_by_alpha2(&self.db, alpha2).await?)
    }
}

/// In-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use models::country::Model;

    #[derive(Default)]
    pub struct MockCountryRepository {
        countries: Vec<Model>,
    }

    impl MockCountryRepository {
        pub fn with_countries(countries: Vec<Model>) -> Self {
            let mut countries = countries;
            countries.sort_by(|a, b| a.name.cmp(&b.name));
            Self { countries }
        }
    }

    #[async_trait]
    impl CountryRepository for MockCountryRepository {
        async fn list_by_region(&self, region: Option<&str>) -> Result<Vec<Model>, ServiceError> {
            Ok(self
                .countries
                .iter()
                .filter(|c| match region {
                    None => true,
                    Some("") => c.region.as_deref().unwrap_or_default().is_empty(),
                    Some(r) => c.region.as_deref() == Some(r),
                })
                .cloned()
                .collect())
        }

        async fn find_by_alpha2(&self, alpha2: &str) -> Result<Option<Model>, ServiceError> {
            Ok(self.countries.iter().find(|c| c.alpha2 == alpha2).cloned())
        }
    }
}
