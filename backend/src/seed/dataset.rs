//! Serialised form of a complete election data set.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Constituency, Election, Metadata, Municipality, Party, PartyVote, PollingStation,
};

/// Every entity needed to serve the election API, as loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ElectionDataset {
    pub elections: Vec<Election>,
    #[serde(default)]
    pub constituencies: Vec<Constituency>,
    #[serde(default)]
    pub municipalities: Vec<Municipality>,
    #[serde(default)]
    pub polling_stations: Vec<PollingStation>,
    #[serde(default)]
    pub parties: Vec<Party>,
    #[serde(default)]
    pub party_votes: Vec<PartyVote>,
    #[serde(default)]
    pub metadata: Vec<Metadata>,
}

impl ElectionDataset {
    /// Parse a dataset from its JSON text.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed input, including region
    /// scopes that lack a required id.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}
