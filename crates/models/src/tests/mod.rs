
/// Country queries and reference-data inserts
pub mod country_tests;


use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database per test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = crate::db::connect_with_config(&cfg).await?;
    crate::db::migrate(&db).await?;
    Ok(db)
}

pub(crate) fn new_country(name: &str, alpha2: &str, alpha3: &str, region: Option<&str>) -> crate::country::NewCountry {
    crate::country::NewCountry {
        name: name.into(),
        alpha2: alpha2.into(),
        alpha3: alpha3.into(),
        region: region.map(Into::into),
    }
}
