//! Region listings and lookups.
//!
//! Top-level listings are scoped to the elections held in one year; an
//! election id such as `TK2025` carries its year after the kind prefix.

use std::collections::BTreeSet;
use std::sync::Arc;

use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ports::EntityStore;
use super::{
    Election, ElectionError, ElectionId, ElectionStores, Listing, RegionId, RegionQueryRouter,
    RegionScope, RegionSummary, SortOrder, SortSpec, region_sorts,
};

/// A region together with its direct children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionWithChildren {
    pub region: RegionSummary,
    pub children: Vec<RegionSummary>,
}

/// Read-only queries over constituencies, municipalities and polling
/// stations.
#[derive(Clone)]
pub struct RegionService {
    elections: Arc<dyn EntityStore<Election>>,
    router: RegionQueryRouter,
}

impl RegionService {
    /// Build the service over `stores`.
    pub fn new(stores: &ElectionStores) -> Self {
        Self {
            elections: Arc::clone(&stores.elections),
            router: RegionQueryRouter::new(stores.regions.clone(), Arc::clone(&stores.votes)),
        }
    }

    async fn elections_in(&self, year: u16) -> Result<BTreeSet<ElectionId>, ElectionError> {
        let ids: BTreeSet<ElectionId> = self
            .elections
            .find_all()
            .await?
            .into_iter()
            .map(|election| election.id)
            .filter(|id| id.year() == Some(year))
            .collect();
        if ids.is_empty() {
            return Err(ElectionError::election_not_found(format!(
                "no election held in {year}"
            )));
        }
        Ok(ids)
    }

    async fn constituency_ids_in(&self, year: u16) -> Result<BTreeSet<RegionId>, ElectionError> {
        let elections = self.elections_in(year).await?;
        Ok(self
            .router
            .regions()
            .constituencies
            .find_all()
            .await?
            .into_iter()
            .filter(|c| elections.contains(&c.election))
            .map(|c| c.id)
            .collect())
    }

    async fn municipality_ids_in(&self, year: u16) -> Result<BTreeSet<RegionId>, ElectionError> {
        let constituencies = self.constituency_ids_in(year).await?;
        Ok(self
            .router
            .regions()
            .municipalities
            .find_all()
            .await?
            .into_iter()
            .filter(|m| constituencies.contains(&m.constituency))
            .map(|m| m.id)
            .collect())
    }

    /// Constituencies of the elections held in `year`.
    ///
    /// # Errors
    /// [`ElectionError::ElectionNotFound`] when no election took place that
    /// year; [`ElectionError::InvalidSortProperty`] for unknown sort keys.
    pub async fn constituencies(
        &self,
        year: u16,
        listing: &Listing,
    ) -> Result<Page<RegionSummary>, ElectionError> {
        let elections = self.elections_in(year).await?;
        let regions = self
            .router
            .regions()
            .constituencies
            .find_all()
            .await?
            .iter()
            .filter(|c| elections.contains(&c.election))
            .map(RegionSummary::from)
            .collect();
        listing.page_of(regions, region_sorts())
    }

    /// One constituency.
    ///
    /// # Errors
    /// [`ElectionError::ConstituencyNotFound`] for an unknown id.
    pub async fn constituency(&self, id: RegionId) -> Result<RegionSummary, ElectionError> {
        self.router
            .regions()
            .constituencies
            .find_by_id(&id)
            .await?
            .as_ref()
            .map(RegionSummary::from)
            .ok_or_else(|| ElectionError::constituency_not_found(id))
    }

    /// Municipalities of one constituency, ordered by `sort`.
    ///
    /// # Errors
    /// [`ElectionError::ConstituencyNotFound`] for an unknown id.
    pub async fn constituency_municipalities(
        &self,
        id: RegionId,
        sort: &SortSpec,
    ) -> Result<Vec<RegionSummary>, ElectionError> {
        let children = self
            .router
            .resolve_regions(RegionScope::Constituency(id))
            .await?;
        region_sorts().order(children, sort)
    }

    /// Municipalities of the elections held in `year`.
    ///
    /// # Errors
    /// See [`RegionService::constituencies`].
    pub async fn municipalities(
        &self,
        year: u16,
        listing: &Listing,
    ) -> Result<Page<RegionSummary>, ElectionError> {
        let constituencies = self.constituency_ids_in(year).await?;
        let regions = self
            .router
            .regions()
            .municipalities
            .find_all()
            .await?
            .iter()
            .filter(|m| constituencies.contains(&m.constituency))
            .map(RegionSummary::from)
            .collect();
        listing.page_of(regions, region_sorts())
    }

    /// One municipality.
    ///
    /// # Errors
    /// [`ElectionError::MunicipalityNotFound`] for an unknown id.
    pub async fn municipality(&self, id: RegionId) -> Result<RegionSummary, ElectionError> {
        self.router
            .regions()
            .municipalities
            .find_by_id(&id)
            .await?
            .as_ref()
            .map(RegionSummary::from)
            .ok_or_else(|| ElectionError::municipality_not_found(id))
    }

    /// One municipality with its polling stations in name order.
    ///
    /// # Errors
    /// [`ElectionError::MunicipalityNotFound`] for an unknown id.
    pub async fn municipality_with_polling_stations(
        &self,
        id: RegionId,
    ) -> Result<RegionWithChildren, ElectionError> {
        let region = self.municipality(id).await?;
        let children = self
            .router
            .resolve_regions(RegionScope::Municipality(id))
            .await?;
        let children = region_sorts().order(children, &SortSpec::by(SortOrder::asc("name")))?;
        Ok(RegionWithChildren { region, children })
    }

    /// Polling stations of the elections held in `year`.
    ///
    /// # Errors
    /// See [`RegionService::constituencies`].
    pub async fn polling_stations(
        &self,
        year: u16,
        listing: &Listing,
    ) -> Result<Page<RegionSummary>, ElectionError> {
        let municipalities = self.municipality_ids_in(year).await?;
        let regions = self
            .router
            .regions()
            .polling_stations
            .find_all()
            .await?
            .iter()
            .filter(|p| municipalities.contains(&p.municipality))
            .map(RegionSummary::from)
            .collect();
        listing.page_of(regions, region_sorts())
    }

    /// One polling station.
    ///
    /// # Errors
    /// [`ElectionError::PollingStationNotFound`] for an unknown id.
    pub async fn polling_station(&self, id: RegionId) -> Result<RegionSummary, ElectionError> {
        self.router
            .regions()
            .polling_stations
            .find_by_id(&id)
            .await?
            .as_ref()
            .map(RegionSummary::from)
            .ok_or_else(|| ElectionError::polling_station_not_found(id))
    }
}

#[cfg(test)]
#[path = "region_service_tests.rs"]
mod tests;
