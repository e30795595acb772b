//! Election, party and turnout endpoints.
//!
//! ```text
//! GET /api/v1/elections
//! GET /api/v1/parties?electionId=TK2025&sort=seats,desc
//! GET /api/v1/parties/count?electionId=TK2025
//! GET /api/v1/metadata/region/MUNICIPALITY/363
//! ```

use actix_web::{get, web};
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Election, ElectionId, Metadata, MetadataId, Party, RegionId, RegionType,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::{ListQuery, PARTY_LISTING};
use crate::inbound::http::state::HttpState;

/// Turnout figures as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetadataResponse {
    pub id: MetadataId,
    pub region_type: RegionType,
    /// Absent for the national record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<RegionId>,
    pub total_cast: u64,
    pub total_counted: u64,
    pub invalid: u64,
    pub blank: u64,
}

impl From<Metadata> for MetadataResponse {
    fn from(value: Metadata) -> Self {
        Self {
            id: value.id,
            region_type: value.scope.region_type(),
            region_id: value.scope.region_id(),
            total_cast: value.total_cast,
            total_counted: value.total_counted,
            invalid: value.invalid,
            blank: value.blank,
        }
    }
}

fn election_filter(query: &ListQuery) -> Option<ElectionId> {
    query
        .first("electionId")
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(ElectionId::new)
}

async fn metadata_of(
    state: &HttpState,
    raw_type: &str,
    region_id: Option<RegionId>,
) -> ApiResult<web::Json<Vec<MetadataResponse>>> {
    let region_type: RegionType = raw_type.parse()?;
    let records = state.elections.metadata(region_type, region_id).await?;
    Ok(web::Json(records.into_iter().map(Into::into).collect()))
}

/// Every loaded election.
#[utoipa::path(
    get,
    path = "/api/v1/elections",
    responses(
        (status = 200, description = "Elections", body = [Election]),
        (status = 404, description = "No elections are loaded", body = String)
    ),
    tags = ["elections"],
    operation_id = "listElections"
)]
#[get("/elections")]
pub async fn list_elections(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Election>>> {
    Ok(web::Json(state.elections.elections().await?))
}

/// Parties with their candidates.
#[utoipa::path(
    get,
    path = "/api/v1/parties",
    params(
        ("electionId" = Option<String>, Query, description = "Restrict to one election, e.g. `TK2025`"),
        ("page" = Option<usize>, Query, description = "Zero-based page index"),
        ("size" = Option<usize>, Query, description = "Page size, default 20"),
        ("sort" = Option<Vec<String>>, Query, description = "`property[,asc|desc]`; unsorted by default")
    ),
    responses(
        (status = 200, description = "Parties", body = Page<Party>),
        (status = 400, description = "Invalid sort or page", body = String),
        (status = 404, description = "Unknown election", body = String)
    ),
    tags = ["elections"],
    operation_id = "listParties"
)]
#[get("/parties")]
pub async fn list_parties(
    state: web::Data<HttpState>,
    query: ListQuery,
) -> ApiResult<web::Json<Page<Party>>> {
    let listing = query.listing(PARTY_LISTING)?;
    let election = election_filter(&query);
    Ok(web::Json(
        state.elections.parties(election.as_ref(), &listing).await?,
    ))
}

/// Number of parties.
#[utoipa::path(
    get,
    path = "/api/v1/parties/count",
    params(
        ("electionId" = Option<String>, Query, description = "Restrict to one election")
    ),
    responses(
        (status = 200, description = "Party count", body = usize),
        (status = 404, description = "Unknown election", body = String)
    ),
    tags = ["elections"],
    operation_id = "countParties"
)]
#[get("/parties/count")]
pub async fn count_parties(
    state: web::Data<HttpState>,
    query: ListQuery,
) -> ApiResult<web::Json<usize>> {
    let election = election_filter(&query);
    Ok(web::Json(state.elections.party_count(election.as_ref()).await?))
}

/// Turnout records for every region of a type.
#[utoipa::path(
    get,
    path = "/api/v1/metadata/region/{regionType}",
    params(("regionType" = RegionType, Path, description = "Region type")),
    responses(
        (status = 200, description = "Turnout records", body = [MetadataResponse]),
        (status = 400, description = "Unknown region type", body = String)
    ),
    tags = ["elections"],
    operation_id = "listRegionTypeMetadata"
)]
#[get("/metadata/region/{region_type}")]
pub async fn list_region_type_metadata(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<MetadataResponse>>> {
    metadata_of(&state, &path, None).await
}

/// Turnout records for one region.
#[utoipa::path(
    get,
    path = "/api/v1/metadata/region/{regionType}/{regionId}",
    params(
        ("regionType" = RegionType, Path, description = "Region type"),
        ("regionId" = u32, Path, description = "Region id, ignored for `NATIONAL`")
    ),
    responses(
        (status = 200, description = "Turnout records", body = [MetadataResponse]),
        (status = 400, description = "Unknown region type", body = String)
    ),
    tags = ["elections"],
    operation_id = "listRegionMetadata"
)]
#[get("/metadata/region/{region_type}/{region_id}")]
pub async fn list_region_metadata(
    state: web::Data<HttpState>,
    path: web::Path<(String, RegionId)>,
) -> ApiResult<web::Json<Vec<MetadataResponse>>> {
    let (region_type, region_id) = path.into_inner();
    metadata_of(&state, &region_type, Some(region_id)).await
}
