//! Shared fixtures for unit tests.

use crate::domain::ElectionStores;
use crate::outbound::persistence::in_memory_stores;
use crate::seed::{ElectionDataset, apply_dataset};

/// The bundled sample dataset.
pub const SAMPLE_DATASET: &str = include_str!("../fixtures/election-data.json");

/// In-memory stores loaded with [`SAMPLE_DATASET`].
pub async fn seeded_stores() -> ElectionStores {
    let stores = in_memory_stores();
    let dataset = ElectionDataset::from_json(SAMPLE_DATASET).expect("sample dataset parses");
    apply_dataset(dataset, &stores).await.expect("sample dataset applies");
    stores
}
