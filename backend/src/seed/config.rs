//! Seeding configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

fn default_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("election-data.json")
}

/// Configuration values controlling dataset seeding at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ELECTION_SEED")]
pub struct SeedSettings {
    /// Load the dataset into the stores on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
    /// Optional dataset path override.
    pub dataset_path: Option<PathBuf>,
}

impl SeedSettings {
    /// Whether seeding runs on startup.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Return the configured dataset path, falling back to the bundled
    /// fixture.
    #[must_use]
    pub fn dataset_path(&self) -> PathBuf {
        self.dataset_path
            .clone()
            .unwrap_or_else(default_dataset_path)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for seeding configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> SeedSettings {
        SeedSettings::load_from_iter([OsString::from("election-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn seeding_is_off_by_default() {
        let _guard = lock_env([
            ("ELECTION_SEED_ENABLED", None::<String>),
            ("ELECTION_SEED_DATASET_PATH", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.is_enabled());
        assert_eq!(settings.dataset_path(), default_dataset_path());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ELECTION_SEED_ENABLED", Some("true".to_owned())),
            (
                "ELECTION_SEED_DATASET_PATH",
                Some("/tmp/uitslagen.json".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.is_enabled());
        assert_eq!(settings.dataset_path(), PathBuf::from("/tmp/uitslagen.json"));
    }
}
