//! Domain ports for the hexagonal boundary.

mod entity_store;
mod password_hashing;

pub use entity_store::{
    ConflictCheck, Entity, EntityFactory, EntityStore, GuardedInsert, SequencedEntity,
    SequencedStore, StoreError,
};
#[cfg(test)]
pub use password_hashing::MockPasswordHashing;
pub use password_hashing::{HashingError, PasswordHashing};
