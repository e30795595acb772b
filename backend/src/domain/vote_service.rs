//! Party vote listings joined with party and region names.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use super::ports::EntityStore;
use super::{
    ElectionError, ElectionStores, Listing, Party, PartyId, PartyVote, PartyVoteDetail,
    RegionQueryRouter, RegionScope, vote_detail_sorts,
};

const UNKNOWN_REGION_NAME: &str = "Unknown region";
const UNKNOWN_PARTY_NAME: &str = "Unknown party";

/// Vote queries by party and by region.
#[derive(Clone)]
pub struct VoteService {
    router: RegionQueryRouter,
    parties: Arc<dyn EntityStore<Party>>,
    votes: Arc<dyn EntityStore<PartyVote>>,
}

impl VoteService {
    /// Build the service over `stores`.
    pub fn new(stores: &ElectionStores) -> Self {
        Self {
            router: RegionQueryRouter::new(stores.regions.clone(), Arc::clone(&stores.votes)),
            parties: Arc::clone(&stores.parties),
            votes: Arc::clone(&stores.votes),
        }
    }

    async fn ensure_party(&self, party: PartyId) -> Result<(), ElectionError> {
        if self.parties.find_by_id(&party).await?.is_none() {
            return Err(ElectionError::party_vote_not_found(format!(
                "With party ID {party}"
            )));
        }
        Ok(())
    }

    /// Every vote record of one party, across all regions.
    ///
    /// # Errors
    /// [`ElectionError::PartyVoteNotFound`] for an unknown party;
    /// [`ElectionError::InvalidSortProperty`] for unknown sort keys.
    pub async fn votes_for_party(
        &self,
        party: PartyId,
        listing: &Listing,
    ) -> Result<Vec<PartyVoteDetail>, ElectionError> {
        self.ensure_party(party).await?;
        let votes = self
            .votes
            .find_all()
            .await?
            .into_iter()
            .filter(|vote| vote.party == party)
            .collect();
        let details = self.details(votes).await?;
        listing.window_of(details, vote_detail_sorts())
    }

    /// Vote records within one region, optionally for a single party.
    ///
    /// # Errors
    /// The region's not-found error for an unknown region;
    /// [`ElectionError::PartyVoteNotFound`] for an unknown party;
    /// [`ElectionError::InvalidSortProperty`] for unknown sort keys.
    pub async fn votes_in_region(
        &self,
        scope: RegionScope,
        owner: Option<PartyId>,
        listing: &Listing,
    ) -> Result<Vec<PartyVoteDetail>, ElectionError> {
        if let Some(party) = owner {
            self.ensure_party(party).await?;
        }
        let votes = self.router.resolve(scope, owner).await?;
        let details = self.details(votes).await?;
        listing.window_of(details, vote_detail_sorts())
    }

    async fn details(&self, votes: Vec<PartyVote>) -> Result<Vec<PartyVoteDetail>, ElectionError> {
        let parties: BTreeMap<PartyId, Party> = self
            .parties
            .find_all()
            .await?
            .into_iter()
            .map(|party| (party.id, party))
            .collect();
        let mut region_names: BTreeMap<RegionScope, String> = BTreeMap::new();

        let mut details = Vec::with_capacity(votes.len());
        for vote in votes {
            let region_name = match region_names.get(&vote.scope) {
                Some(name) => name.clone(),
                None => {
                    let name = self.region_name(vote.scope).await?;
                    region_names.insert(vote.scope, name.clone());
                    name
                }
            };
            let (party_name, seats) = parties.get(&vote.party).map_or_else(
                || {
                    warn!(party_id = vote.party.get(), "vote references an unknown party");
                    (UNKNOWN_PARTY_NAME.to_owned(), 0)
                },
                |party| (party.name.clone(), party.seats),
            );
            details.push(PartyVoteDetail {
                party_id: vote.party,
                party_name,
                seats,
                votes: vote.votes,
                region_type: vote.scope.region_type(),
                region_id: vote.scope.region_id(),
                region_name,
            });
        }
        Ok(details)
    }

    async fn region_name(&self, scope: RegionScope) -> Result<String, ElectionError> {
        Ok(self.router.region_name(scope).await?.unwrap_or_else(|| {
            warn!(
                region_type = %scope.region_type(),
                region_id = ?scope.region_id().map(|id| id.get()),
                "vote references an unknown region"
            );
            UNKNOWN_REGION_NAME.to_owned()
        }))
    }
}

#[cfg(test)]
#[path = "vote_service_tests.rs"]
mod tests;
