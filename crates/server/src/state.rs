use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auth::{repo::seaorm::SeaOrmUserRepository, AuthService};
use service::country::{repository::SeaOrmCountryRepository, CountryService};

/// Shared handler state; services wrap the store handle passed in at startup.
#[derive(Clone)]
pub struct ServerState {
    pub countries: Arc<CountryService<SeaOrmCountryRepository>>,
    pub auth: Arc<AuthService<SeaOrmUserRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let countries = CountryService::new(Arc::new(SeaOrmCountryRepository { db: db.clone() }));
        let auth = AuthService::new(Arc::new(SeaOrmUserRepository { db }));
        Self { countries: Arc::new(countries), auth: Arc::new(auth) }
    }
}
