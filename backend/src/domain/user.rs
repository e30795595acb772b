//! Registered users.
//!
//! Passwords never reach storage in clear text; [`Registration`] carries the
//! raw password only until the user service hashes it.

use super::macros::define_numeric_id;
use super::ports::{Entity, SequencedEntity};
use super::ElectionError;

const USERNAME_CHARS: std::ops::RangeInclusive<usize> = 5..=50;
const MIN_PASSWORD_CHARS: usize = 8;

define_numeric_id!(
    /// User identifier, assigned on insert.
    UserId
);

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl SequencedEntity for User {
    fn next_id(last: Option<Self::Id>) -> Self::Id {
        UserId::new(last.map_or(1, |id| id.get().saturating_add(1)))
    }
}

/// Validated sign-up input.
///
/// ## Invariants
/// - `username` is trimmed and 5 to 50 characters long.
/// - `email` is trimmed and has text on both sides of a single `@`.
/// - `password` is at least 8 characters long.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    username: String,
    email: String,
    password: String,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn has_valid_email_shape(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl Registration {
    /// Validate sign-up input.
    ///
    /// # Errors
    /// Returns [`ElectionError::InvalidUser`] naming the first failed rule.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Registration;
    ///
    /// let ok = Registration::new(" kiezer01 ", "kiezer@example.nl", "geheim123")
    ///     .expect("valid");
    /// assert_eq!(ok.username(), "kiezer01");
    /// assert!(Registration::new("kiezer01", "no-at-sign", "geheim123").is_err());
    /// ```
    pub fn new(
        username: impl AsRef<str>,
        email: impl AsRef<str>,
        password: impl Into<String>,
    ) -> Result<Self, ElectionError> {
        let username = username.as_ref().trim();
        let email = email.as_ref().trim();
        let password = password.into();

        if username.is_empty() {
            return Err(ElectionError::invalid_user("Username cannot be empty."));
        }
        if !USERNAME_CHARS.contains(&username.chars().count()) {
            return Err(ElectionError::invalid_user(
                "Username must be between 5 and 50 characters.",
            ));
        }
        if email.is_empty() {
            return Err(ElectionError::invalid_user("Email cannot be empty."));
        }
        if !has_valid_email_shape(email) {
            return Err(ElectionError::invalid_user("Invalid email format."));
        }
        if password.trim().is_empty() {
            return Err(ElectionError::invalid_user("Password cannot be empty."));
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ElectionError::invalid_user(
                "Password must be at least 8 characters long.",
            ));
        }

        Ok(Self {
            username: username.to_owned(),
            email: email.to_owned(),
            password,
        })
    }

    /// Trimmed username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Trimmed email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Raw password awaiting hashing.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Build the stored user once the password has been hashed.
    #[must_use]
    pub fn into_user(self, id: UserId, password_hash: String) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password_hash,
        }
    }
}
