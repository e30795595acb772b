//! Parameter object bundling every store the services read from.

use std::sync::Arc;

use super::ports::{EntityStore, SequencedStore};
use super::{Election, Metadata, Party, PartyVote, Post, RegionStores, User};

/// All stores, one per entity kind.
#[derive(Clone)]
pub struct ElectionStores {
    /// Elections; seeded last so a populated store means a full dataset.
    pub elections: Arc<dyn EntityStore<Election>>,
    /// Constituencies, municipalities and polling stations.
    pub regions: RegionStores,
    /// Parties with their candidates.
    pub parties: Arc<dyn EntityStore<Party>>,
    /// Per-region party vote counts.
    pub votes: Arc<dyn EntityStore<PartyVote>>,
    /// Turnout figures per region.
    pub metadata: Arc<dyn EntityStore<Metadata>>,
    /// Community posts; ids assigned on insert.
    pub posts: Arc<dyn SequencedStore<Post>>,
    /// Registered users; ids assigned on insert.
    pub users: Arc<dyn SequencedStore<User>>,
}
