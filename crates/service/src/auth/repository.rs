use async_trait::async_trait;

use super::errors::RegisterError;

/// Repository abstraction for registration-related persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn country_code_exists(&self, alpha2: &str) -> Result<bool, RegisterError>;
    async fn login_exists(&self, login: &str) -> Result<bool, RegisterError>;
    /// Insert; a login collision surfaces as `RegisterError::UsernameExists`.
    async fn create_user(&self, user: models::user::NewUser) -> Result<models::user::Model, RegisterError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Mutex, MutexGuard};

    use models::user::{Model, NewUser};

    #[derive(Default)]
    pub struct MockUserRepository {
        country_codes: HashSet<String>,
        users: Mutex<HashMap<String, Model>>, // key: login
    }

    impl MockUserRepository {
        pub fn with_country_codes<I, S>(codes: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self { country_codes: codes.into_iter().map(Into::into).collect(), ..Self::default() }
        }

        pub fn user_count(&self) -> usize {
            self.users().len()
        }

        fn users(&self) -> MutexGuard<'_, HashMap<String, Model>> {
            self.users.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn country_code_exists(&self, alpha2: &str) -> Result<bool, RegisterError> {
            Ok(self.country_codes.contains(alpha2))
        }

        async fn login_exists(&self, login: &str) -> Result<bool, RegisterError> {
            Ok(self.users().contains_key(login))
        }

        async fn create_user(&self, user: NewUser) -> Result<Model, RegisterError> {
            let mut users = self.users();
            if users.contains_key(&user.login) {
                return Err(RegisterError::UsernameExists);
            }
            let model = Model {
                login: user.login.clone(),
                email: user.email,
                password: user.password,
                country_code: user.country_code,
                is_public: user.is_public,
                phone: user.phone,
                image: user.image,
                created_at: chrono::Utc::now().into(),
            };
            users.insert(user.login, model.clone());
            Ok(model)
        }
    }
}
