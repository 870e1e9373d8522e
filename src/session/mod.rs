//! Mock session store.
//!
//! [`SessionStore`] is created once at app start and shared with pages through a
//! context signal. Only `{isAuthenticated, user}` survives a reload; whether the
//! persisted state has been checked (`is_initialized`) always starts out `false`.
//!
//! Authentication is simulated against an in-memory [`UserDirectory`]. [`login`] and
//! [`register`] wait the configured delay before touching the store, so no borrow of
//! the store is held while they are suspended.

pub mod directory;
pub mod guard;
pub mod storage;

#[cfg(test)]
mod tests;

use std::time::Duration;

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::StorageError,
    model::user::SessionUser,
    util::time::sleep,
    view::state::StateCell,
};

pub use directory::UserDirectory;
pub use storage::SessionStorage;

/// Serialized form of the session, e.g.
/// `{"isAuthenticated":true,"user":{"id":"1","email":"user@example.com","name":"Test User"}}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    is_authenticated: bool,
    user: Option<SessionUser>,
}

pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    storage_key: String,
    auth_delay: Duration,
    directory: UserDirectory,
    is_initialized: bool,
    user: Option<SessionUser>,
}

impl SessionStore {
    /// Creates the store in its boot state, restoring any persisted session.
    ///
    /// Persisted state that can't be read or decoded is logged and treated as no session.
    pub fn new(storage: Box<dyn SessionStorage>, storage_key: &str) -> Self {
        let user = match restore(storage.as_ref(), storage_key) {
            Ok(persisted) => persisted.filter(|p| p.is_authenticated).and_then(|p| p.user),
            Err(e) => {
                tracing::warn!(key = %storage_key, "Discarding persisted session: {}", e);

                None
            }
        };

        Self {
            storage,
            storage_key: storage_key.to_string(),
            auth_delay: Duration::ZERO,
            directory: UserDirectory::default(),
            is_initialized: false,
            user,
        }
    }

    pub fn from_config(config: &Config, storage: Box<dyn SessionStorage>) -> Self {
        Self::new(storage, &config.storage_key).with_auth_delay(config.auth_delay)
    }

    pub fn with_auth_delay(mut self, auth_delay: Duration) -> Self {
        self.auth_delay = auth_delay;
        self
    }

    pub fn with_directory(mut self, directory: UserDirectory) -> Self {
        self.directory = directory;
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn auth_delay(&self) -> Duration {
        self.auth_delay
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Marks the persisted state as checked, letting route guards decide.
    ///
    /// # Returns
    /// - `true` - The store transitioned to initialized
    /// - `false` - The store was already initialized, nothing changed
    pub fn initialize(&mut self) -> bool {
        if self.is_initialized {
            return false;
        }

        self.is_initialized = true;

        tracing::info!(
            authenticated = self.is_authenticated(),
            "Session initialized"
        );

        true
    }

    /// Logs in when the credentials match an account in the directory.
    pub fn complete_login(&mut self, email: &str, password: &str) -> bool {
        let Some(user) = self.directory.verify(email, password) else {
            tracing::debug!(email = %email, "Rejected login");

            return false;
        };

        tracing::info!(user_id = %user.id, "User logged in");

        self.user = Some(user);
        self.persist();

        true
    }

    /// Creates an account and logs it in, unless the email is already registered.
    pub fn complete_register(&mut self, name: &str, email: &str, password: &str) -> bool {
        let Some(user) = self.directory.register(name, email, password) else {
            tracing::debug!(email = %email, "Rejected registration of existing email");

            return false;
        };

        tracing::info!(user_id = %user.id, "User registered");

        self.user = Some(user);
        self.persist();

        true
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "User logged out");
        }

        self.persist();
    }

    /// Flushes the persisted subset and returns the store to its boot state.
    pub fn teardown(&mut self) {
        self.persist();
        self.is_initialized = false;
    }

    fn persist(&self) {
        let persisted = PersistedSession {
            is_authenticated: self.is_authenticated(),
            user: self.user.clone(),
        };

        let result = serde_json::to_string(&persisted)
            .map_err(StorageError::from)
            .and_then(|value| self.storage.save(&self.storage_key, &value));

        if let Err(e) = result {
            tracing::error!(key = %self.storage_key, "Failed to persist session: {}", e);
        }
    }
}

fn restore(
    storage: &dyn SessionStorage,
    key: &str,
) -> Result<Option<PersistedSession>, StorageError> {
    let Some(value) = storage.load(key)? else {
        return Ok(None);
    };

    Ok(Some(serde_json::from_str(&value)?))
}

/// Simulated login: waits the store's auth delay, then checks the credentials.
///
/// # Returns
/// - `true` - The user is now logged in
/// - `false` - No account matches the email & password
pub async fn login<C>(cell: &mut C, email: &str, password: &str) -> bool
where
    C: StateCell<SessionStore>,
{
    let delay = cell.inspect(|store| store.auth_delay());
    sleep(delay).await;

    cell.update(|store| store.complete_login(email, password))
}

/// Simulated registration: waits the store's auth delay, then creates the account.
///
/// # Returns
/// - `true` - The account was created and logged in
/// - `false` - The email is already registered
pub async fn register<C>(cell: &mut C, name: &str, email: &str, password: &str) -> bool
where
    C: StateCell<SessionStore>,
{
    let delay = cell.inspect(|store| store.auth_delay());
    sleep(delay).await;

    cell.update(|store| store.complete_register(name, email, password))
}
