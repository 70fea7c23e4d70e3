//! Authentication service.
//!
//! Registration, login, and admin seeding over the user store.
//! Passwords are argon2-hashed at rest; nothing here touches the
//! session, which is the route layer's concern.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;

use crate::config::{Config, DEFAULT_ADMIN_PASSWORD};
use crate::models::{NewUser, User};
use crate::store::{Store, StoreError};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
pub struct AuthService<'a> {
    store: &'a Store,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Register a new (non-admin) user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::WeakPassword` if the password doesn't meet
    /// requirements, `AuthError::UsernameTaken` if the username is
    /// already registered.
    pub fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        validate_password(password)?;

        let password_hash = hash_password(password)?;

        self.store
            .create_user(NewUser {
                username: username.trim().to_owned(),
                password_hash,
                is_admin: false,
            })
            .map_err(|err| match err {
                StoreError::Conflict(_) => AuthError::UsernameTaken,
                other => AuthError::Store(other),
            })
    }

    /// Login with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair is wrong.
    pub fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .store
            .user_by_username(username.trim())
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        Ok(user)
    }
}

/// Ensure the configured admin account exists, creating it on first
/// boot. Idempotent across restarts within a process lifetime.
///
/// # Errors
///
/// Returns an error if hashing fails or the store rejects the insert.
pub fn seed_admin(store: &Store, config: &Config) -> Result<User, AuthError> {
    if let Some(existing) = store.user_by_username(&config.admin_username) {
        return Ok(existing);
    }

    if config.admin_password.expose_secret() == DEFAULT_ADMIN_PASSWORD {
        tracing::warn!(
            "ADMIN_PASSWORD is not set; seeding the admin account with the development default"
        );
    }

    let password_hash = hash_password(config.admin_password.expose_secret())?;

    store
        .create_user(NewUser {
            username: config.admin_username.clone(),
            password_hash,
            is_admin: true,
        })
        .map_err(AuthError::Store)
}

/// Hash a password with argon2 and a fresh salt.
///
/// # Errors
///
/// Returns `AuthError::HashFailure` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AuthError::HashFailure(err.to_string()))
}

fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
    let parsed =
        PasswordHash::new(password_hash).map_err(|err| AuthError::HashFailure(err.to_string()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}
