#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect_with_config;
use configs::DatabaseConfig;

/// A fresh, migrated in-memory database for the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_sample_countries(db: &DatabaseConnection) -> Result<(), anyhow::Error> {
    let rows = [
        ("Netherlands", "NL", "NLD", Some("Europe")),
        ("France", "FR", "FRA", Some("Europe")),
        ("Russia", "RU", "RUS", Some("Europe")),
        ("Kenya", "KE", "KEN", Some("Africa")),
        ("Japan", "JP", "JPN", Some("Asia")),
        ("Antarctica", "AQ", "ATA", None),
    ]
    .into_iter()
    .map(|(name, alpha2, alpha3, region)| models::country::NewCountry {
        name: name.into(),
        alpha2: alpha2.into(),
        alpha3: alpha3.into(),
        region: region.map(Into::into),
    })
    .collect();
    models::country::insert_many(db, rows).await?;
    Ok(())
}
