use anyhow::Result;

use super::{new_country, setup_test_db};
use crate::country;
use crate::errors::ModelError;

async fn seeded() -> Result<sea_orm::DatabaseConnection> {
    let db = setup_test_db().await?;
    country::insert_many(
        &db,
        vec![
            new_country("Netherlands", "NL", "NLD", Some("Europe")),
            new_country("France", "FR", "FRA", Some("Europe")),
            new_country("Kenya", "KE", "KEN", Some("Africa")),
            new_country("Antarctica", "AQ", "ATA", None),
            new_country("Nowhere", "NW", "NWH", Some("")),
        ],
    )
    .await?;
    Ok(db)
}

#[tokio::test]
async fn test_list_by_region_exact_subset() -> Result<()> {
    let db = seeded().await?;
    let europe = country::list_by_region(&db, Some("Europe")).await?;
    let names: Vec<_> = europe.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["France", "Netherlands"]);
    assert!(europe.iter().all(|c| c.region.as_deref() == Some("Europe")));
    Ok(())
}

#[tokio::test]
async fn test_list_by_region_is_case_sensitive() -> Result<()> {
    let db = seeded().await?;
    assert!(country::list_by_region(&db, Some("europe")).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_list_without_region_returns_all() -> Result<()> {
    let db = seeded().await?;
    assert_eq!(country::list_by_region(&db, None).await?.len(), 5);
    Ok(())
}

#[tokio::test]
async fn test_empty_region_matches_absent_and_empty() -> Result<()> {
    let db = seeded().await?;
    let blank = country::list_by_region(&db, Some("")).await?;
    let names: Vec<_> = blank.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Antarctica", "Nowhere"]);
    Ok(())
}

#[tokio::test]
async fn test_find_by_alpha2() -> Result<()> {
    let db = seeded().await?;
    let ke = country::find_by_alpha2(&db, "KE").await?.expect("kenya");
    assert_eq!(ke.alpha3, "KEN");
    assert!(country::find_by_alpha2(&db, "ke").await?.is_none());
    assert!(country::find_by_alpha2(&db, "ZZ").await?.is_none());
    assert!(country::alpha2_exists(&db, "FR").await?);
    assert!(!country::alpha2_exists(&db, "ZZ").await?);
    Ok(())
}

#[tokio::test]
async fn test_find_by_alpha2_first_by_name() -> Result<()> {
    let db = setup_test_db().await?;
    country::create(&db, new_country("Zeta", "XX", "ZET", None)).await?;
    country::create(&db, new_country("Alpha", "XX", "ALP", None)).await?;
    let first = country::find_by_alpha2(&db, "XX").await?.expect("match");
    assert_eq!(first.name, "Alpha");
    Ok(())
}

#[tokio::test]
async fn test_insert_many_rejects_bad_codes_atomically() -> Result<()> {
    let db = setup_test_db().await?;
    let err = country::insert_many(
        &db,
        vec![
            new_country("Good", "GD", "GOD", None),
            new_country("Bad", "BAD", "BAD", None),
        ],
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert_eq!(country::count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_name_rolls_back() -> Result<()> {
    let db = setup_test_db().await?;
    let err = country::insert_many(
        &db,
        vec![
            new_country("Same", "SA", "SAM", None),
            new_country("Same", "SB", "SAB", None),
        ],
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ModelError::Duplicate(_)));
    assert_eq!(country::count(&db).await?, 0);
    Ok(())
}
