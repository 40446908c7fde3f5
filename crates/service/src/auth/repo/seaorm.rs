use sea_orm::DatabaseConnection;

use models::errors::ModelError;
use crate::auth::errors::RegisterError;
use crate::auth::repository::UserRepository;

#[derive(Clone)]
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

fn repo_err(e: ModelError) -> RegisterError {
    RegisterError::Repository(e.to_string())
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn country_code_exists(&self, alpha2: &str) -> Result<bool, RegisterError> {
        models::country::alpha2_exists(&self.db, alpha2).await.map_err(repo_err)
    }

    async fn login_exists(&self, login: &str) -> Result<bool, RegisterError> {
        models::user::login_exists(&self.db, login).await.map_err(repo_err)
    }

    async fn create_user(&self, user: models::user::NewUser) -> Result<models::user::Model, RegisterError> {
        models::user::create(&self.db, user).await.map_err(|e| match e {
            ModelError::Duplicate(_) => RegisterError::UsernameExists,
            other => repo_err(other),
        })
    }
}
