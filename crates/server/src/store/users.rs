//! User store operations.

use chrono::Utc;

use lilys_lawn_core::UserId;

use super::{Store, StoreError};
use crate::models::{NewUser, User};

impl Store {
    /// Create a new user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the username is already taken.
    pub fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        let mut users = self.users();

        if users.values().any(|user| user.username == new.username) {
            return Err(StoreError::Conflict(format!(
                "username '{}' is already taken",
                new.username
            )));
        }

        let created_at = Utc::now();
        Ok(users.insert_with(|id| User {
            id: UserId::new(id),
            username: new.username.clone(),
            password_hash: new.password_hash.clone(),
            is_admin: new.is_admin,
            created_at,
        }))
    }

    /// Get a user by id.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<User> {
        self.users().get(id.as_i64())
    }

    /// Get a user by username. Linear scan; the user table stays small.
    #[must_use]
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.users()
            .values()
            .find(|user| user.username == username)
            .cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_owned(),
            password_hash: "$argon2id$stub".to_owned(),
            is_admin: false,
        }
    }

    #[test]
    fn test_create_user_assigns_increasing_ids() {
        let store = Store::new();
        let first = store.create_user(new_user("ella")).unwrap();
        let second = store.create_user(new_user("sam")).unwrap();

        assert_eq!(first.id, UserId::new(1));
        assert_eq!(second.id, UserId::new(2));
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let store = Store::new();
        store.create_user(new_user("ella")).unwrap();

        let result = store.create_user(new_user("ella"));
        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[test]
    fn test_user_by_username() {
        let store = Store::new();
        let created = store.create_user(new_user("ella")).unwrap();

        let found = store.user_by_username("ella").unwrap();
        assert_eq!(found.id, created.id);
        assert!(store.user_by_username("nobody").is_none());
    }
}
