//! Driven port for entity persistence.
//!
//! One generic port replaces a repository per entity kind. Adapters store
//! entities keyed by their [`Entity::Id`]; listings come back ordered by id
//! so downstream sorting starts from a deterministic sequence.

use std::fmt;

use async_trait::async_trait;

use crate::domain::macros::define_port_error;

/// A persistable value with a stable identifier.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type; ordering defines listing order.
    type Id: Clone + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// The entity's identifier.
    fn id(&self) -> Self::Id;
}

/// An entity whose ids are assigned by the store on insert.
pub trait SequencedEntity: Entity {
    /// The id following `last`, or the first id when nothing is stored.
    fn next_id(last: Option<Self::Id>) -> Self::Id;
}

define_port_error! {
    /// Failures raised by store adapters.
    pub enum StoreError {
        /// The backing store cannot serve requests.
        Unavailable { message: String } => "store unavailable: {message}",
    }
}

/// Builds an entity once the store has chosen its id.
pub type EntityFactory<E> = Box<dyn FnOnce(<E as Entity>::Id) -> E + Send>;

/// Reports whether a stored entity blocks a guarded insert.
pub type ConflictCheck<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;

/// Outcome of [`SequencedStore::insert_unless`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardedInsert<E> {
    /// No stored entity conflicted; the new entity was saved.
    Inserted(E),
    /// The first stored entity, in id order, that conflicted.
    Conflict(E),
}

/// Read and write access to one entity kind.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Every stored entity, ordered by id.
    async fn find_all(&self) -> Result<Vec<E>, StoreError>;

    /// The entity with `id`, if stored.
    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, StoreError>;

    /// Insert or replace `entity` under its id.
    async fn save(&self, entity: E) -> Result<E, StoreError>;

    /// Remove the entity with `id`, reporting whether one existed.
    async fn delete_by_id(&self, id: &E::Id) -> Result<bool, StoreError>;

    /// Number of stored entities.
    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.find_all().await?.len())
    }
}

/// Store for entities that receive their id on insert.
#[async_trait]
pub trait SequencedStore<E: SequencedEntity>: EntityStore<E> {
    /// Assign the next id, build the entity with it and save it atomically.
    ///
    /// Ids are never reused, even after the entity holding the highest id
    /// is deleted.
    async fn insert(&self, build: EntityFactory<E>) -> Result<E, StoreError>;

    /// Like [`SequencedStore::insert`], but only when no stored entity
    /// matches `conflicts`. The check and the insert happen under one lock.
    async fn insert_unless(
        &self,
        conflicts: ConflictCheck<E>,
        build: EntityFactory<E>,
    ) -> Result<GuardedInsert<E>, StoreError>;
}
