//! User registration, login and administration.

use std::sync::Arc;

use tracing::{info, warn};

use super::ports::{GuardedInsert, PasswordHashing, SequencedStore};
use super::{ElectionError, Registration, User, UserId};

/// User commands and queries.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn SequencedStore<User>>,
    hasher: Arc<dyn PasswordHashing>,
}

impl UserService {
    /// Build the service over the user store and a password hasher.
    pub fn new(users: Arc<dyn SequencedStore<User>>, hasher: Arc<dyn PasswordHashing>) -> Self {
        Self { users, hasher }
    }

    /// Register a new user with a hashed password.
    ///
    /// The email is checked before the username, and both comparisons are
    /// exact. The check is repeated under the store's write lock together
    /// with the insert, so concurrent sign-ups for the same email or
    /// username admit one winner.
    ///
    /// # Errors
    /// [`ElectionError::EmailAlreadyExists`] or
    /// [`ElectionError::UsernameAlreadyExists`] on a conflict;
    /// [`ElectionError::Internal`] when hashing fails.
    pub async fn register(&self, registration: Registration) -> Result<User, ElectionError> {
        let existing = self.users.find_all().await?;
        if existing.iter().any(|user| user.email == registration.email()) {
            return Err(ElectionError::email_already_exists(registration.email()));
        }
        if existing.iter().any(|user| user.username == registration.username()) {
            return Err(ElectionError::username_already_exists(
                registration.username(),
            ));
        }

        let password_hash = self.hasher.hash(registration.password())?;
        let email = registration.email().to_owned();
        let username = registration.username().to_owned();
        let outcome = self
            .users
            .insert_unless(
                Box::new(move |user: &User| user.email == email || user.username == username),
                Box::new({
                    let registration = registration.clone();
                    move |id| registration.into_user(id, password_hash)
                }),
            )
            .await?;
        match outcome {
            GuardedInsert::Inserted(user) => {
                info!(user_id = user.id.get(), "user registered");
                Ok(user)
            }
            GuardedInsert::Conflict(existing) => Err(conflict_with(&existing, &registration)
                .unwrap_or_else(|| ElectionError::email_already_exists(registration.email()))),
        }
    }

    /// Authenticate by email and password.
    ///
    /// # Errors
    /// [`ElectionError::InvalidCredentials`] for an unknown email or a wrong
    /// password; [`ElectionError::Internal`] when a stored hash is unreadable.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ElectionError> {
        let email = email.trim();
        let Some(user) = self
            .users
            .find_all()
            .await?
            .into_iter()
            .find(|user| user.email == email)
        else {
            warn!("login attempt for an unknown email");
            return Err(ElectionError::invalid_credentials());
        };
        if !self.hasher.verify(password, &user.password_hash)? {
            warn!(user_id = user.id.get(), "login with a wrong password");
            return Err(ElectionError::invalid_credentials());
        }
        info!(user_id = user.id.get(), "user logged in");
        Ok(user)
    }

    /// Every registered user, in id order.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn list(&self) -> Result<Vec<User>, ElectionError> {
        Ok(self.users.find_all().await?)
    }

    /// One user.
    ///
    /// # Errors
    /// [`ElectionError::UserNotFound`] for an unknown id.
    pub async fn get(&self, id: UserId) -> Result<User, ElectionError> {
        self.users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ElectionError::user_not_found(id))
    }

    /// Remove one user.
    ///
    /// # Errors
    /// [`ElectionError::UserNotFound`] for an unknown id.
    pub async fn delete(&self, id: UserId) -> Result<(), ElectionError> {
        if !self.users.delete_by_id(&id).await? {
            return Err(ElectionError::user_not_found(id));
        }
        info!(user_id = id.get(), "user deleted");
        Ok(())
    }
}

fn conflict_with(existing: &User, registration: &Registration) -> Option<ElectionError> {
    if existing.email == registration.email() {
        Some(ElectionError::email_already_exists(registration.email()))
    } else if existing.username == registration.username() {
        Some(ElectionError::username_already_exists(registration.username()))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
