//! Authentication error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The username/password pair did not match a user. Deliberately
    /// identical for unknown users and wrong passwords.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The requested username is already registered.
    #[error("Username is already taken")]
    UsernameTaken,

    /// The password does not meet the minimum requirements.
    #[error("{0}")]
    WeakPassword(String),

    /// Password hashing or hash parsing failed.
    #[error("password hashing failed: {0}")]
    HashFailure(String),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
