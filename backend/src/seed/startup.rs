//! Startup seeding orchestration.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::ElectionStores;
use crate::domain::ports::StoreError;
use crate::seed::config::SeedSettings;
use crate::seed::dataset::ElectionDataset;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Dataset file could not be read.
    #[error("failed to read dataset at {path}: {source}")]
    DatasetRead {
        /// Path to the dataset file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Dataset contents are not valid election JSON.
    #[error("failed to parse dataset at {path}: {source}")]
    DatasetParse {
        /// Path to the dataset file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Persisting the dataset failed.
    #[error("dataset persistence error: {0}")]
    Store(#[from] StoreError),
}

/// Number of records written by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedCounts {
    pub elections: usize,
    pub regions: usize,
    pub parties: usize,
    pub party_votes: usize,
    pub metadata: usize,
}

/// What a seeding attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Seeding is switched off.
    Disabled,
    /// The stores already held election data; nothing was written.
    AlreadySeeded,
    /// The dataset was written.
    Applied(SeedCounts),
}

/// Load the configured dataset into `stores` when seeding is enabled.
///
/// # Examples
///
/// ```rust,no_run
/// use backend::outbound::persistence::in_memory_stores;
/// use backend::seed::{SeedOutcome, SeedSettings, seed_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = SeedSettings {
///     enabled: false,
///     dataset_path: None,
/// };
/// let outcome = seed_on_startup(&settings, &in_memory_stores()).await?;
/// assert_eq!(outcome, SeedOutcome::Disabled);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Fails when the dataset cannot be read or parsed, or a store rejects a
/// write.
pub async fn seed_on_startup(
    settings: &SeedSettings,
    stores: &ElectionStores,
) -> Result<SeedOutcome, StartupSeedingError> {
    if !settings.is_enabled() {
        info!(reason = "disabled", "election data seeding skipped");
        return Ok(SeedOutcome::Disabled);
    }

    let path = settings.dataset_path();
    let dataset = load_dataset(&path)?;
    let outcome = apply_dataset(dataset, stores).await?;

    match outcome {
        SeedOutcome::Applied(counts) => info!(
            path = %path.display(),
            elections = counts.elections,
            regions = counts.regions,
            parties = counts.parties,
            party_votes = counts.party_votes,
            metadata = counts.metadata,
            "election data seeding applied"
        ),
        SeedOutcome::AlreadySeeded => info!(
            path = %path.display(),
            "election data already present; skipping"
        ),
        SeedOutcome::Disabled => {}
    }
    Ok(outcome)
}

/// Write every record of `dataset` unless elections are already stored.
///
/// # Errors
/// Propagates the first store failure.
pub async fn apply_dataset(
    dataset: ElectionDataset,
    stores: &ElectionStores,
) -> Result<SeedOutcome, StoreError> {
    if stores.elections.count().await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let counts = SeedCounts {
        elections: dataset.elections.len(),
        regions: dataset.constituencies.len()
            + dataset.municipalities.len()
            + dataset.polling_stations.len(),
        parties: dataset.parties.len(),
        party_votes: dataset.party_votes.len(),
        metadata: dataset.metadata.len(),
    };

    for constituency in dataset.constituencies {
        stores.regions.constituencies.save(constituency).await?;
    }
    for municipality in dataset.municipalities {
        stores.regions.municipalities.save(municipality).await?;
    }
    for station in dataset.polling_stations {
        stores.regions.polling_stations.save(station).await?;
    }
    for party in dataset.parties {
        stores.parties.save(party).await?;
    }
    for vote in dataset.party_votes {
        stores.votes.save(vote).await?;
    }
    for metadata in dataset.metadata {
        stores.metadata.save(metadata).await?;
    }
    // Elections go last so a partial run is retried on the next start.
    for election in dataset.elections {
        stores.elections.save(election).await?;
    }

    Ok(SeedOutcome::Applied(counts))
}

fn load_dataset(path: &Path) -> Result<ElectionDataset, StartupSeedingError> {
    let read_error = |source| StartupSeedingError::DatasetRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "dataset path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    ElectionDataset::from_json(&contents).map_err(|source| StartupSeedingError::DatasetParse {
        path: path.to_path_buf(),
        source,
    })
}
