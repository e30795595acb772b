//! Driven port for one-way password hashing.

use crate::domain::macros::define_port_error;

define_port_error! {
    /// Failures raised by hashing adapters.
    pub enum HashingError {
        /// The adapter could not produce a hash.
        Failed { message: String } => "password hashing failed: {message}",
    }
}

/// Turns a clear-text password into a storable hash and checks candidates
/// against it.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHashing: Send + Sync {
    /// Hash `password` with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, HashingError>;

    /// Whether `password` matches the stored `hash`.
    ///
    /// A mismatch is `Ok(false)`; an unreadable hash is an error.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashingError>;
}
