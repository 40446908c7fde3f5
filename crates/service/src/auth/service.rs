use std::sync::Arc;

use dashmap::{mapref::entry::Entry, DashMap};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

use super::domain::{check_lengths, present_profile, Profile, RegisterInput};
use super::errors::RegisterError;
use super::repository::UserRepository;

/// Mutex for one login plus the number of registrations using it.
#[derive(Default)]
struct LoginLock {
    mutex: Arc<Mutex<()>>,
    holders: usize,
}

/// A registration's claim on its login's lock. Leaving the table happens in
/// `Drop`, so a cancelled registration releases its entry too.
struct LoginSlot<'a> {
    table: &'a DashMap<String, LoginLock>,
    login: String,
    mutex: Arc<Mutex<()>>,
}

impl<'a> LoginSlot<'a> {
    fn enter(table: &'a DashMap<String, LoginLock>, login: &str) -> Self {
        let mut entry = table.entry(login.to_string()).or_default();
        entry.holders += 1;
        let mutex = Arc::clone(&entry.mutex);
        drop(entry);
        Self { table, login: login.to_string(), mutex }
    }

    async fn lock(&self) -> MutexGuard<'_, ()> {
        self.mutex.lock().await
    }
}

impl Drop for LoginSlot<'_> {
    fn drop(&mut self) {
        // holder count and removal happen under the same shard lock
        if let Entry::Occupied(mut entry) = self.table.entry(self.login.clone()) {
            let lock = entry.get_mut();
            lock.holders = lock.holders.saturating_sub(1);
            if lock.holders == 0 {
                entry.remove();
            }
        }
    }
}

/// Registration service independent of web framework
pub struct AuthService<R: UserRepository> {
    repo: Arc<R>,
    login_locks: DashMap<String, LoginLock>,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo, login_locks: DashMap::new() }
    }

    /// Validate and persist a new user, returning its public profile.
    ///
    /// Checks run in a fixed order and the first failure wins: required
    /// fields, country code, login length, email length, login uniqueness.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::AuthService, repository::mock::MockUserRepository};
    /// use service::auth::{domain::RegisterInput, errors::RegisterError};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockUserRepository::with_country_codes(["NL"]));
    /// let svc = AuthService::new(repo.clone());
    /// let input = RegisterInput {
    ///     login: Some("alice".into()),
    ///     email: Some("alice@example.com".into()),
    ///     country_code: Some("NL".into()),
    ///     is_public: Some(true),
    ///     ..Default::default()
    /// };
    /// let profile = tokio_test::block_on(svc.register(input.clone())).unwrap();
    /// assert_eq!(profile.login, "alice");
    /// let again = tokio_test::block_on(svc.register(input));
    /// assert_eq!(again.unwrap_err(), RegisterError::UsernameExists);
    /// assert_eq!(repo.user_count(), 1);
    /// ```
    #[instrument(skip(self, input), fields(login = input.login.as_deref().unwrap_or_default()))]
    pub async fn register(&self, input: RegisterInput) -> Result<Profile, RegisterError> {
        let result = self.validate_and_insert(input).await;
        match &result {
            Ok(profile) => info!(login = %profile.login, country_code = %profile.country_code, "user_registered"),
            Err(e) if e.is_client_error() => debug!(reason = %e, "registration_rejected"),
            Err(e) => warn!(error = %e, "registration_failed"),
        }
        result
    }

    async fn validate_and_insert(&self, input: RegisterInput) -> Result<Profile, RegisterError> {
        let user = input.require_fields()?;
        if !self.repo.country_code_exists(&user.country_code).await? {
            return Err(RegisterError::InvalidCountryCode);
        }
        check_lengths(&user)?;

        let slot = LoginSlot::enter(&self.login_locks, &user.login);
        let _held = slot.lock().await;
        self.insert_unique(user).await
    }

    // Runs under the per-login lock, so the existence check and insert are one step.
    async fn insert_unique(&self, user: models::user::NewUser) -> Result<Profile, RegisterError> {
        if self.repo.login_exists(&user.login).await? {
            return Err(RegisterError::UsernameExists);
        }
        let created = self.repo.create_user(user).await?;
        Ok(present_profile(&created))
    }

    /// Logins with a registration currently in flight.
    pub fn pending_registrations(&self) -> usize {
        self.login_locks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo::seaorm::SeaOrmUserRepository;
    use crate::auth::repository::mock::MockUserRepository;
    use crate::test_support::{get_db, seed_sample_countries};

    fn valid(login: &str) -> RegisterInput {
        RegisterInput {
            login: Some(login.into()),
            email: Some(format!("{login}@example.com")),
            country_code: Some("NL".into()),
            is_public: Some(true),
            password: Some("secret".into()),
            phone: Some("+31201234567".into()),
            image: Some("aW1n".into()),
        }
    }

    #[tokio::test]
    async fn missing_field_does_not_touch_store() {
        let repo = Arc::new(MockUserRepository::with_country_codes(["NL"]));
        let svc = AuthService::new(repo.clone());
        let err = svc.register(RegisterInput { is_public: None, ..valid("bob") }).await.unwrap_err();
        assert_eq!(err, RegisterError::IsPublicRequired);
        assert_eq!(repo.user_count(), 0);
    }

    #[tokio::test]
    async fn unknown_country_rejected_before_length_checks() {
        let repo = Arc::new(MockUserRepository::with_country_codes(["NL"]));
        let svc = AuthService::new(repo);
        let input = RegisterInput { login: Some("x".repeat(40)), country_code: Some("ZZ".into()), ..valid("bob") };
        assert_eq!(svc.register(input).await.unwrap_err(), RegisterError::InvalidCountryCode);
    }

    #[tokio::test]
    async fn login_of_thirty_one_chars_rejected() {
        let repo = Arc::new(MockUserRepository::with_country_codes(["NL"]));
        let svc = AuthService::new(repo.clone());
        let long = "l".repeat(31);
        let err = svc.register(RegisterInput { login: Some(long), ..valid("x") }).await.unwrap_err();
        assert_eq!(err, RegisterError::LoginTooLong);

        let exact = "l".repeat(30);
        let profile = svc.register(RegisterInput { login: Some(exact.clone()), ..valid("x") }).await.unwrap();
        assert_eq!(profile.login, exact);
        assert_eq!(repo.user_count(), 1);
    }

    #[tokio::test]
    async fn profile_echoes_public_fields_only() {
        let svc = AuthService::new(Arc::new(MockUserRepository::with_country_codes(["NL"])));
        let profile = svc.register(valid("dana")).await.unwrap();
        assert_eq!(
            profile,
            Profile {
                login: "dana".into(),
                email: "dana@example.com".into(),
                country_code: "NL".into(),
                is_public: true,
                phone: Some("+31201234567".into()),
            }
        );
    }

    #[tokio::test]
    async fn second_registration_with_same_login_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_sample_countries(&db).await?;
        let svc = AuthService::new(Arc::new(SeaOrmUserRepository { db: db.clone() }));

        svc.register(valid("erin")).await?;
        let err = svc.register(valid("erin")).await.unwrap_err();
        assert_eq!(err, RegisterError::UsernameExists);

        let stored = models::user::find_by_login(&db, "erin").await?.expect("persisted");
        assert_eq!(stored.password.as_deref(), Some("secret"));
        assert_eq!(models::user::count(&db).await?, 1);
        Ok(())
    }

    /// Store whose uniqueness lookup never completes.
    struct StalledRepository;

    #[async_trait::async_trait]
    impl UserRepository for StalledRepository {
        async fn country_code_exists(&self, _alpha2: &str) -> Result<bool, RegisterError> {
            Ok(true)
        }

        async fn login_exists(&self, _login: &str) -> Result<bool, RegisterError> {
            std::future::pending().await
        }

        async fn create_user(&self, _user: models::user::NewUser) -> Result<models::user::Model, RegisterError> {
            std::future::pending().await
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn aborted_registrations_release_their_locks() {
        let svc = Arc::new(AuthService::new(Arc::new(StalledRepository)));

        // half share one login so some tasks wait on the mutex, the rest on the store
        let handles: Vec<_> = (0..100)
            .map(|i| {
                let svc = Arc::clone(&svc);
                let login = if i % 2 == 0 { "shared".to_string() } else { format!("user{i}") };
                tokio::spawn(async move { svc.register(valid(&login)).await })
            })
            .collect();

        tokio::time::timeout(std::time::Duration::from_secs(5), async {
            while svc.pending_registrations() < 51 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("registrations in flight");

        for h in &handles {
            h.abort();
        }
        for h in handles {
            assert!(h.await.unwrap_err().is_cancelled());
        }
        assert_eq!(svc.pending_registrations(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_same_login_only_one_wins() {
        let repo = Arc::new(MockUserRepository::with_country_codes(["NL"]));
        let svc = Arc::new(AuthService::new(repo.clone()));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let svc = Arc::clone(&svc);
                tokio::spawn(async move { svc.register(valid("frank")).await })
            })
            .collect();

        let mut ok = 0;
        let mut taken = 0;
        for h in handles {
            match h.await.unwrap() {
                Ok(_) => ok += 1,
                Err(RegisterError::UsernameExists) => taken += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(taken, 15);
        assert_eq!(repo.user_count(), 1);
        assert_eq!(svc.pending_registrations(), 0);
    }
}
