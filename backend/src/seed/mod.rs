//! Startup wiring for election data seeding.

mod config;
mod dataset;
mod startup;

pub use config::SeedSettings;
pub use dataset::ElectionDataset;
pub use startup::{SeedCounts, SeedOutcome, StartupSeedingError, apply_dataset, seed_on_startup};
