//! Region-type dispatch for vote and child-region queries.
//!
//! The router is the only place that knows which store answers for which
//! [`RegionType`]. Callers hand it a [`RegionScope`]; it checks the region
//! exists, then returns candidates in store order for the caller to sort and
//! window.

use std::sync::Arc;

use tracing::debug;

use super::ports::EntityStore;
use super::{
    Constituency, ElectionError, Municipality, NATIONAL_REGION_NAME, PartyId, PartyVote,
    PollingStation, RegionId, RegionScope, RegionSummary,
};

/// The region stores, bundled for injection.
#[derive(Clone)]
pub struct RegionStores {
    /// Constituencies, children of the national scope.
    pub constituencies: Arc<dyn EntityStore<Constituency>>,
    /// Municipalities, children of a constituency.
    pub municipalities: Arc<dyn EntityStore<Municipality>>,
    /// Polling stations, children of a municipality.
    pub polling_stations: Arc<dyn EntityStore<PollingStation>>,
}

/// Resolves region scopes against the stores. Read-only.
#[derive(Clone)]
pub struct RegionQueryRouter {
    regions: RegionStores,
    votes: Arc<dyn EntityStore<PartyVote>>,
}

impl RegionQueryRouter {
    /// Build a router over `regions` and `votes`.
    pub fn new(regions: RegionStores, votes: Arc<dyn EntityStore<PartyVote>>) -> Self {
        Self { regions, votes }
    }

    /// The region stores this router dispatches to.
    #[must_use]
    pub const fn regions(&self) -> &RegionStores {
        &self.regions
    }

    /// Display name of the region a scope points at, if it exists.
    ///
    /// # Errors
    /// Propagates store failures as [`ElectionError::Internal`].
    pub async fn region_name(&self, scope: RegionScope) -> Result<Option<String>, ElectionError> {
        Ok(match scope {
            RegionScope::National => Some(NATIONAL_REGION_NAME.to_owned()),
            RegionScope::Constituency(id) => self
                .regions
                .constituencies
                .find_by_id(&id)
                .await?
                .map(|c| c.name),
            RegionScope::Municipality(id) => self
                .regions
                .municipalities
                .find_by_id(&id)
                .await?
                .map(|m| m.name),
            RegionScope::PollingStation(id) => self
                .regions
                .polling_stations
                .find_by_id(&id)
                .await?
                .map(|p| p.name),
        })
    }

    /// Fail unless the region a scope points at exists.
    ///
    /// # Errors
    /// Returns the not-found error matching the scope's region type.
    pub async fn ensure_exists(&self, scope: RegionScope) -> Result<(), ElectionError> {
        let Some(id) = scope.region_id() else {
            return Ok(());
        };
        if self.region_name(scope).await?.is_some() {
            return Ok(());
        }
        Err(ElectionError::region_not_found(scope.region_type(), id)
            .unwrap_or_else(|| ElectionError::internal("national scope carried an id")))
    }

    /// Vote records attached to `scope`, optionally narrowed to one party.
    ///
    /// An owner filter that matches nothing yields an empty list.
    ///
    /// # Errors
    /// Returns the scope's not-found error when the region does not exist.
    pub async fn resolve(
        &self,
        scope: RegionScope,
        owner: Option<PartyId>,
    ) -> Result<Vec<PartyVote>, ElectionError> {
        self.ensure_exists(scope).await?;
        let votes: Vec<PartyVote> = self
            .votes
            .find_all()
            .await?
            .into_iter()
            .filter(|vote| vote.scope == scope)
            .filter(|vote| owner.is_none_or(|party| vote.party == party))
            .collect();
        debug!(
            region_type = %scope.region_type(),
            region_id = ?scope.region_id().map(RegionId::get),
            owner = ?owner.map(PartyId::get),
            matched = votes.len(),
            "resolved votes for region"
        );
        Ok(votes)
    }

    /// Direct children of `scope`.
    ///
    /// National lists constituencies, a constituency its municipalities and a
    /// municipality its polling stations. Polling stations have no children.
    ///
    /// # Errors
    /// Returns the scope's not-found error when the region does not exist.
    pub async fn resolve_regions(
        &self,
        scope: RegionScope,
    ) -> Result<Vec<RegionSummary>, ElectionError> {
        self.ensure_exists(scope).await?;
        Ok(match scope {
            RegionScope::National => self
                .regions
                .constituencies
                .find_all()
                .await?
                .iter()
                .map(RegionSummary::from)
                .collect(),
            RegionScope::Constituency(id) => self
                .regions
                .municipalities
                .find_all()
                .await?
                .iter()
                .filter(|m| m.constituency == id)
                .map(RegionSummary::from)
                .collect(),
            RegionScope::Municipality(id) => self
                .regions
                .polling_stations
                .find_all()
                .await?
                .iter()
                .filter(|p| p.municipality == id)
                .map(RegionSummary::from)
                .collect(),
            RegionScope::PollingStation(_) => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests;
