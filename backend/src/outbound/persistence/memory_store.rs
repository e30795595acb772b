//! `BTreeMap`-backed store guarded by an async read/write lock.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{
    ConflictCheck, Entity, EntityFactory, EntityStore, GuardedInsert, SequencedEntity,
    SequencedStore, StoreError,
};

/// In-process store for one entity kind.
///
/// Readers run concurrently; writers take the lock exclusively. Listings are
/// returned in id order. Sequenced ids only grow, so a deleted id is never
/// handed out again.
///
/// # Examples
/// ```
/// use backend::domain::ports::EntityStore;
/// use backend::domain::{RegionId, Municipality};
/// use backend::outbound::persistence::InMemoryStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryStore::<Municipality>::new();
/// store
///     .save(Municipality {
///         id: RegionId::new(363),
///         name: "Amsterdam".to_owned(),
///         constituency: RegionId::new(9),
///     })
///     .await
///     .expect("save");
/// assert_eq!(store.count().await.expect("count"), 1);
/// # });
/// ```
pub struct InMemoryStore<E: Entity> {
    table: RwLock<Table<E>>,
}

struct Table<E: Entity> {
    entries: BTreeMap<E::Id, E>,
    last_issued: Option<E::Id>,
}

impl<E: Entity> Table<E> {
    fn new(entries: BTreeMap<E::Id, E>) -> Self {
        Self {
            entries,
            last_issued: None,
        }
    }

    fn highest_id(&self) -> Option<E::Id> {
        self.entries
            .keys()
            .next_back()
            .cloned()
            .max(self.last_issued.clone())
    }
}

impl<E: SequencedEntity> Table<E> {
    fn insert_next(&mut self, build: EntityFactory<E>) -> E {
        let id = E::next_id(self.highest_id());
        self.last_issued = Some(id.clone());
        let entity = build(id);
        self.entries.insert(entity.id(), entity.clone());
        entity
    }
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self {
            table: RwLock::new(Table::new(BTreeMap::new())),
        }
    }
}

impl<E: Entity> InMemoryStore<E> {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `entities`; later duplicates replace earlier
    /// ones.
    pub fn with_entities(entities: impl IntoIterator<Item = E>) -> Self {
        let entries = entities
            .into_iter()
            .map(|entity| (entity.id(), entity))
            .collect();
        Self {
            table: RwLock::new(Table::new(entries)),
        }
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for InMemoryStore<E> {
    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        Ok(self.table.read().await.entries.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
        Ok(self.table.read().await.entries.get(id).cloned())
    }

    async fn save(&self, entity: E) -> Result<E, StoreError> {
        self.table
            .write()
            .await
            .entries
            .insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: &E::Id) -> Result<bool, StoreError> {
        Ok(self.table.write().await.entries.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.table.read().await.entries.len())
    }
}

#[async_trait]
impl<E: SequencedEntity> SequencedStore<E> for InMemoryStore<E> {
    async fn insert(&self, build: EntityFactory<E>) -> Result<E, StoreError> {
        Ok(self.table.write().await.insert_next(build))
    }

    async fn insert_unless(
        &self,
        conflicts: ConflictCheck<E>,
        build: EntityFactory<E>,
    ) -> Result<GuardedInsert<E>, StoreError> {
        let mut table = self.table.write().await;
        if let Some(existing) = table.entries.values().find(|entity| conflicts(*entity)) {
            return Ok(GuardedInsert::Conflict(existing.clone()));
        }
        Ok(GuardedInsert::Inserted(table.insert_next(build)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Post, PostId, RegionId, Municipality, UserId};
    use chrono::Utc;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    fn municipality(id: u32, name: &str) -> Municipality {
        Municipality {
            id: RegionId::new(id),
            name: name.to_owned(),
            constituency: RegionId::new(1),
        }
    }

    #[fixture]
    fn store() -> InMemoryStore<Municipality> {
        InMemoryStore::with_entities([
            municipality(518, "'s-Gravenhage"),
            municipality(363, "Amsterdam"),
            municipality(599, "Rotterdam"),
        ])
    }

    fn post_factory(title: &'static str) -> EntityFactory<Post> {
        Box::new(move |id| Post {
            id,
            user_id: UserId::new(1),
            title: title.to_owned(),
            content: "inhoud".to_owned(),
            created_at: Utc::now(),
        })
    }

    #[rstest]
    #[tokio::test]
    async fn listings_come_back_in_id_order(store: InMemoryStore<Municipality>) {
        let ids: Vec<u32> = store
            .find_all()
            .await
            .expect("list")
            .iter()
            .map(|m| m.id.get())
            .collect();
        assert_eq!(ids, [363, 518, 599]);
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_id_misses_cleanly(store: InMemoryStore<Municipality>) {
        assert!(
            store
                .find_by_id(&RegionId::new(999))
                .await
                .expect("lookup")
                .is_none()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn save_replaces_existing_entries(store: InMemoryStore<Municipality>) {
        store
            .save(municipality(363, "Mokum"))
            .await
            .expect("save");
        let found = store
            .find_by_id(&RegionId::new(363))
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(found.name, "Mokum");
        assert_eq!(store.count().await.expect("count"), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed(store: InMemoryStore<Municipality>) {
        assert!(store.delete_by_id(&RegionId::new(599)).await.expect("delete"));
        assert!(!store.delete_by_id(&RegionId::new(599)).await.expect("delete"));
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = InMemoryStore::<Post>::new();
        let first = store.insert(post_factory("een")).await.expect("insert");
        let second = store.insert(post_factory("twee")).await.expect("insert");
        assert_eq!(first.id, PostId::new(1));
        assert_eq!(second.id, PostId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn deleted_ids_are_not_handed_out_again() {
        let store = InMemoryStore::<Post>::new();
        store.insert(post_factory("een")).await.expect("insert");
        let second = store.insert(post_factory("twee")).await.expect("insert");
        assert!(store.delete_by_id(&second.id).await.expect("delete"));
        let third = store.insert(post_factory("drie")).await.expect("insert");
        assert_ne!(third.id, second.id);
        assert_eq!(third.id, PostId::new(3));
    }

    #[rstest]
    #[tokio::test]
    async fn sequencing_continues_after_saved_ids() {
        let store = InMemoryStore::<Post>::new();
        store
            .save(post_factory("geseed")(PostId::new(40)))
            .await
            .expect("save");
        let next = store.insert(post_factory("nieuw")).await.expect("insert");
        assert_eq!(next.id, PostId::new(41));
    }

    #[rstest]
    #[tokio::test]
    async fn guarded_insert_reports_the_conflicting_entity() {
        let store = InMemoryStore::<Post>::new();
        let first = store.insert(post_factory("uniek")).await.expect("insert");
        let outcome = store
            .insert_unless(
                Box::new(|post: &Post| post.title == "uniek"),
                post_factory("uniek"),
            )
            .await
            .expect("guarded insert");
        assert_eq!(outcome, GuardedInsert::Conflict(first));
        assert_eq!(store.count().await.expect("count"), 1);

        let outcome = store
            .insert_unless(
                Box::new(|post: &Post| post.title == "anders"),
                post_factory("anders"),
            )
            .await
            .expect("guarded insert");
        assert!(matches!(outcome, GuardedInsert::Inserted(post) if post.id == PostId::new(2)));
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_guarded_inserts_admit_one_winner() {
        let store = Arc::new(InMemoryStore::<Post>::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .insert_unless(
                            Box::new(|post: &Post| post.title == "gelijk"),
                            post_factory("gelijk"),
                        )
                        .await
                })
            })
            .collect();
        let mut inserted = 0;
        for handle in handles {
            if matches!(
                handle.await.expect("join").expect("insert"),
                GuardedInsert::Inserted(_)
            ) {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
        assert_eq!(store.count().await.expect("count"), 1);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_never_share_an_id() {
        let store = Arc::new(InMemoryStore::<Post>::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.insert(post_factory("gelijktijdig")).await })
            })
            .collect();
        for handle in handles {
            handle.await.expect("join").expect("insert");
        }
        let mut ids: Vec<u32> = store
            .find_all()
            .await
            .expect("list")
            .iter()
            .map(|p| p.id.get())
            .collect();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }
}
