use sea_orm::{entity::prelude::*, Condition, DatabaseConnection, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const NAME_MAX_LEN: usize = 100;
pub const ALPHA2_LEN: usize = 2;
pub const ALPHA3_LEN: usize = 3;
pub const REGION_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "country")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub region: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Country row as supplied by reference data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCountry {
    pub name: String,
    pub alpha2: String,
    pub alpha3: String,
    #[serde(default)]
    pub region: Option<String>,
}

pub fn validate(c: &NewCountry) -> Result<(), ModelError> {
    let name_len = c.name.chars().count();
    if name_len == 0 || name_len > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!("country name must be 1..={NAME_MAX_LEN} chars")));
    }
    if c.alpha2.chars().count() != ALPHA2_LEN {
        return Err(ModelError::Validation(format!("alpha2 of {} must be {ALPHA2_LEN} chars", c.name)));
    }
    if c.alpha3.chars().count() != ALPHA3_LEN {
        return Err(ModelError::Validation(format!("alpha3 of {} must be {ALPHA3_LEN} chars", c.name)));
    }
    if c.region.as_deref().is_some_and(|r| r.chars().count() > REGION_MAX_LEN) {
        return Err(ModelError::Validation(format!("region of {} exceeds {REGION_MAX_LEN} chars", c.name)));
    }
    Ok(())
}

impl From<NewCountry> for ActiveModel {
    fn from(c: NewCountry) -> Self {
        ActiveModel {
            name: Set(c.name),
            alpha2: Set(c.alpha2),
            alpha3: Set(c.alpha3),
            region: Set(c.region),
        }
    }
}

pub async fn create(db: &DatabaseConnection, c: NewCountry) -> Result<Model, ModelError> {
    validate(&c)?;
    Ok(ActiveModel::from(c).insert(db).await?)
}

/// Insert all rows in one transaction; nothing is written if any row fails.
pub async fn insert_many(db: &DatabaseConnection, rows: Vec<NewCountry>) -> Result<usize, ModelError> {
    for c in &rows {
        validate(c)?;
    }
    let count = rows.len();
    let txn = db.begin().await?;
    for c in rows {
        ActiveModel::from(c).insert(&txn).await?;
    }
    txn.commit().await?;
    Ok(count)
}

/// Countries filtered by exact region match, ordered by name.
///
/// `None` returns every country; `Some("")` matches rows whose region is
/// absent or empty.
pub async fn list_by_region(db: &DatabaseConnection, region: Option<&str>) -> Result<Vec<Model>, ModelError> {
    let mut query = Entity::find();
    match region {
        None => {}
        Some("") => {
            query = query.filter(
                Condition::any()
                    .add(Column::Region.is_null())
                    .add(Column::Region.eq("")),
            );
        }
        Some(r) => query = query.filter(Column::Region.eq(r)),
    }
    Ok(query.order_by_asc(Column::Name).all(db).await?)
}

/// First country (by name) with the given alpha2 code.
pub async fn find_by_alpha2(db: &DatabaseConnection, alpha2: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::Alpha2.eq(alpha2))
        .order_by_asc(Column::Name)
        .one(db)
        .await?)
}

pub async fn alpha2_exists(db: &DatabaseConnection, alpha2: &str) -> Result<bool, ModelError> {
    let n = Entity::find().filter(Column::Alpha2.eq(alpha2)).count(db).await?;
    Ok(n > 0)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    Ok(Entity::find().count(db).await?)
}
