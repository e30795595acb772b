//! Entity persistence adapters.
//!
//! The service keeps its data set in process memory. Each entity kind gets
//! its own [`InMemoryStore`]; the generic store port keeps a relational
//! adapter a drop-in replacement.

use std::sync::Arc;

use crate::domain::{ElectionStores, RegionStores};

mod memory_store;

pub use memory_store::InMemoryStore;

/// Fresh, empty in-memory stores for every entity kind.
#[must_use]
pub fn in_memory_stores() -> ElectionStores {
    ElectionStores {
        elections: Arc::new(InMemoryStore::new()),
        regions: RegionStores {
            constituencies: Arc::new(InMemoryStore::new()),
            municipalities: Arc::new(InMemoryStore::new()),
            polling_stations: Arc::new(InMemoryStore::new()),
        },
        parties: Arc::new(InMemoryStore::new()),
        votes: Arc::new(InMemoryStore::new()),
        metadata: Arc::new(InMemoryStore::new()),
        posts: Arc::new(InMemoryStore::new()),
        users: Arc::new(InMemoryStore::new()),
    }
}
