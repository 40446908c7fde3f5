use std::sync::Arc;

use tracing::{debug, instrument};

use super::domain::{present_country, CountryView};
use super::repository::CountryRepository;
use crate::errors::ServiceError;

/// Read-only queries over country reference data.
pub struct CountryService<R: CountryRepository> {
    repo: Arc<R>,
}

impl<R: CountryRepository> CountryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Countries whose region equals `region` exactly; every country when `None`.
    ///
    /// # Examples
    /// ```
    /// use service::country::{CountryService, repository::mock::MockCountryRepository};
    /// use models::country::Model;
    /// use std::sync::Arc;
    /// let fr = Model { name: "France".into(), alpha2: "FR".into(), alpha3: "FRA".into(), region: Some("Europe".into()) };
    /// let ke = Model { name: "Kenya".into(), alpha2: "KE".into(), alpha3: "KEN".into(), region: Some("Africa".into()) };
    /// let svc = CountryService::new(Arc::new(MockCountryRepository::with_countries(vec![fr, ke])));
    /// let europe = tokio_test::block_on(svc.list_by_region(Some("Europe"))).unwrap();
    /// assert_eq!(europe.len(), 1);
    /// assert_eq!(europe[0].alpha2, "FR");
    /// ```
    #[instrument(skip(self))]
    pub async fn list_by_region(&self, region: Option<&str>) -> Result<Vec<CountryView>, ServiceError> {
        let rows = self.repo.list_by_region(region).await?;
        debug!(count = rows.len(), "countries listed");
        Ok(rows.into_iter().map(present_country).collect())
    }

    /// First country with the given alpha2 code; `NotFound` on a miss.
    #[instrument(skip(self))]
    pub async fn get_by_alpha2(&self, alpha2: &str) -> Result<CountryView, ServiceError> {
        self.repo
            .find_by_alpha2(alpha2)
            .await?
            .map(present_country)
            .ok_or_else(|| ServiceError::not_found("country"))
    }
}
