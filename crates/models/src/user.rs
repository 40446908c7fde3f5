use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;

use crate::errors::ModelError;

pub const LOGIN_MAX_LEN: usize = 30;
pub const EMAIL_MAX_LEN: usize = 50;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub login: String,
    pub email: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub password: Option<String>,
    pub country_code: String,
    pub is_public: bool,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted at registration. The password is stored as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    pub email: String,
    pub password: Option<String>,
    pub country_code: String,
    pub is_public: bool,
    pub phone: Option<String>,
    pub image: Option<String>,
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn validate_login(login: &str) -> Result<(), ModelError> {
    if login.is_empty() { return Err(ModelError::Validation("login required".into())); }
    if char_len(login) > LOGIN_MAX_LEN { return Err(ModelError::Validation("login too long".into())); }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if email.is_empty() { return Err(ModelError::Validation("email required".into())); }
    if char_len(email) > EMAIL_MAX_LEN { return Err(ModelError::Validation("email too long".into())); }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, new_user: NewUser) -> Result<Model, ModelError> {
    validate_login(&new_user.login)?;
    validate_email(&new_user.email)?;
    let am = ActiveModel {
        login: Set(new_user.login),
        email: Set(new_user.email),
        password: Set(new_user.password),
        country_code: Set(new_user.country_code),
        is_public: Set(new_user.is_public),
        phone: Set(new_user.phone),
        image: Set(new_user.image),
        created_at: Set(Utc::now().into()),
    };
    match am.insert(db).await {
        Ok(m) => Ok(m),
        Err(e) => match ModelError::from(e) {
            ModelError::Duplicate(_) => Err(ModelError::Duplicate("login".into())),
            other => Err(other),
        },
    }
}

pub async fn find_by_login(db: &DatabaseConnection, login: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(login.to_string()).one(db).await?)
}

pub async fn login_exists(db: &DatabaseConnection, login: &str) -> Result<bool, ModelError> {
    Ok(find_by_login(db, login).await?.is_some())
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    Ok(Entity::find().count(db).await?)
}
