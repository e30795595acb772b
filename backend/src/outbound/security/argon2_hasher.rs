//! Argon2id implementation of the password hashing port.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::domain::ports::{HashingError, PasswordHashing};

/// Hashes passwords with Argon2id v1.3 into PHC strings.
///
/// Verification reads the cost parameters from the stored PHC string, so
/// hashes made with other costs still verify.
///
/// # Examples
/// ```
/// use backend::domain::ports::PasswordHashing;
/// use backend::outbound::security::Argon2PasswordHasher;
///
/// let hasher = Argon2PasswordHasher::default();
/// let hash = hasher.hash("geheim123").expect("hash");
/// assert!(hash.starts_with("$argon2id$"));
/// assert!(hasher.verify("geheim123", &hash).expect("readable hash"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    /// Use explicit cost parameters.
    ///
    /// # Errors
    /// Returns [`HashingError::Failed`] when argon2 rejects the parameters.
    pub fn with_costs(
        memory_cost_kib: u32,
        time_cost: u32,
        parallelism: u32,
    ) -> Result<Self, HashingError> {
        let params = Params::new(memory_cost_kib, time_cost, parallelism, None)
            .map_err(|err| HashingError::failed(err.to_string()))?;
        Ok(Self { params })
    }
}

impl PasswordHashing for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, HashingError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| HashingError::failed(err.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashingError> {
        let parsed = PasswordHash::new(hash).map_err(|err| HashingError::failed(err.to_string()))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(HashingError::failed(err.to_string())),
        }
    }
}
