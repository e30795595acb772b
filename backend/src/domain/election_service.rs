//! Elections, parties and turnout metadata.

use pagination::Page;

use super::{
    Election, ElectionError, ElectionId, ElectionStores, Listing, Metadata, Party, RegionId,
    RegionType, party_sorts,
};

/// Read-only queries over elections and what hangs directly off them.
#[derive(Clone)]
pub struct ElectionService {
    stores: ElectionStores,
}

impl ElectionService {
    /// Build the service over `stores`.
    #[must_use]
    pub const fn new(stores: ElectionStores) -> Self {
        Self { stores }
    }

    /// Every loaded election.
    ///
    /// # Errors
    /// [`ElectionError::ElectionNotFound`] when nothing has been loaded.
    pub async fn elections(&self) -> Result<Vec<Election>, ElectionError> {
        let elections = self.stores.elections.find_all().await?;
        if elections.is_empty() {
            return Err(ElectionError::election_not_found("no elections are loaded"));
        }
        Ok(elections)
    }

    async fn parties_of(&self, election: Option<&ElectionId>) -> Result<Vec<Party>, ElectionError> {
        if let Some(id) = election
            && self.stores.elections.find_by_id(id).await?.is_none()
        {
            return Err(ElectionError::election_not_found(format!(
                "no election with id {id}"
            )));
        }
        Ok(self
            .stores
            .parties
            .find_all()
            .await?
            .into_iter()
            .filter(|party| election.is_none_or(|id| &party.election == id))
            .collect())
    }

    /// Parties, with candidates, optionally narrowed to one election.
    ///
    /// # Errors
    /// [`ElectionError::ElectionNotFound`] for an unknown election id;
    /// [`ElectionError::InvalidSortProperty`] for unknown sort keys.
    pub async fn parties(
        &self,
        election: Option<&ElectionId>,
        listing: &Listing,
    ) -> Result<Page<Party>, ElectionError> {
        let parties = self.parties_of(election).await?;
        listing.page_of(parties, party_sorts())
    }

    /// Number of parties, optionally narrowed to one election.
    ///
    /// # Errors
    /// [`ElectionError::ElectionNotFound`] for an unknown election id.
    pub async fn party_count(&self, election: Option<&ElectionId>) -> Result<usize, ElectionError> {
        Ok(self.parties_of(election).await?.len())
    }

    /// Turnout records for every region of `region_type`, or for one region
    /// when `region_id` is given. An id is ignored for the national type.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn metadata(
        &self,
        region_type: RegionType,
        region_id: Option<RegionId>,
    ) -> Result<Vec<Metadata>, ElectionError> {
        let region_id = region_id.filter(|_| region_type != RegionType::National);
        Ok(self
            .stores
            .metadata
            .find_all()
            .await?
            .into_iter()
            .filter(|m| m.scope.region_type() == region_type)
            .filter(|m| region_id.is_none_or(|id| m.scope.region_id() == Some(id)))
            .collect())
    }
}

#[cfg(test)]
#[path = "election_service_tests.rs"]
mod tests;
