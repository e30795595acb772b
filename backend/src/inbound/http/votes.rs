//! Party vote endpoints.
//!
//! ```text
//! GET /api/v1/partyVotes/party/1?sort=votes,desc
//! GET /api/v1/partyVotes/region/NATIONAL
//! GET /api/v1/partyVotes/region/MUNICIPALITY/363/party/1
//! ```
//!
//! Region types are matched case-insensitively. Every type other than
//! `NATIONAL` needs a region id.

use actix_web::{get, web};

use crate::domain::{PartyId, PartyVoteDetail, RegionId, RegionScope, RegionType};
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::{ListQuery, VOTE_LISTING};
use crate::inbound::http::state::HttpState;

fn scope_of(raw_type: &str, id: Option<RegionId>) -> ApiResult<RegionScope> {
    let region_type: RegionType = raw_type.parse()?;
    RegionScope::from_parts(region_type, id)
}

async fn region_votes(
    state: &HttpState,
    scope: RegionScope,
    party: Option<PartyId>,
    query: &ListQuery,
) -> ApiResult<web::Json<Vec<PartyVoteDetail>>> {
    let listing = query.listing(VOTE_LISTING)?;
    Ok(web::Json(
        state.votes.votes_in_region(scope, party, &listing).await?,
    ))
}

/// Every vote record of one party.
#[utoipa::path(
    get,
    path = "/api/v1/partyVotes/party/{partyId}",
    params(
        ("partyId" = u32, Path, description = "Party id"),
        ("page" = Option<usize>, Query, description = "Zero-based page index"),
        ("size" = Option<usize>, Query, description = "Page size, default 500"),
        ("sort" = Option<Vec<String>>, Query, description = "`property[,asc|desc]`, default `votes,desc`")
    ),
    responses(
        (status = 200, description = "Vote details", body = [PartyVoteDetail]),
        (status = 400, description = "Invalid sort or page", body = String),
        (status = 404, description = "Unknown party", body = String)
    ),
    tags = ["votes"],
    operation_id = "listPartyVotes"
)]
#[get("/partyVotes/party/{party_id}")]
pub async fn list_party_votes(
    state: web::Data<HttpState>,
    path: web::Path<PartyId>,
    query: ListQuery,
) -> ApiResult<web::Json<Vec<PartyVoteDetail>>> {
    let listing = query.listing(VOTE_LISTING)?;
    Ok(web::Json(
        state.votes.votes_for_party(path.into_inner(), &listing).await?,
    ))
}

/// Vote records of a region type that needs no id.
#[utoipa::path(
    get,
    path = "/api/v1/partyVotes/region/{regionType}",
    params(
        ("regionType" = RegionType, Path, description = "Only `NATIONAL` is accepted without an id"),
        ("page" = Option<usize>, Query, description = "Zero-based page index"),
        ("size" = Option<usize>, Query, description = "Page size, default 500"),
        ("sort" = Option<Vec<String>>, Query, description = "`property[,asc|desc]`, default `votes,desc`")
    ),
    responses(
        (status = 200, description = "Vote details", body = [PartyVoteDetail]),
        (status = 400, description = "Unknown region type or missing region id", body = String)
    ),
    tags = ["votes"],
    operation_id = "listRegionTypeVotes"
)]
#[get("/partyVotes/region/{region_type}")]
pub async fn list_region_type_votes(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: ListQuery,
) -> ApiResult<web::Json<Vec<PartyVoteDetail>>> {
    let scope = scope_of(&path, None)?;
    region_votes(&state, scope, None, &query).await
}

/// Vote records within one region.
#[utoipa::path(
    get,
    path = "/api/v1/partyVotes/region/{regionType}/{regionId}",
    params(
        ("regionType" = RegionType, Path, description = "Region type"),
        ("regionId" = u32, Path, description = "Region id, ignored for `NATIONAL`"),
        ("page" = Option<usize>, Query, description = "Zero-based page index"),
        ("size" = Option<usize>, Query, description = "Page size, default 500"),
        ("sort" = Option<Vec<String>>, Query, description = "`property[,asc|desc]`, default `votes,desc`")
    ),
    responses(
        (status = 200, description = "Vote details", body = [PartyVoteDetail]),
        (status = 400, description = "Unknown region type or invalid sort", body = String),
        (status = 404, description = "Unknown region", body = String)
    ),
    tags = ["votes"],
    operation_id = "listRegionVotes"
)]
#[get("/partyVotes/region/{region_type}/{region_id}")]
pub async fn list_region_votes(
    state: web::Data<HttpState>,
    path: web::Path<(String, RegionId)>,
    query: ListQuery,
) -> ApiResult<web::Json<Vec<PartyVoteDetail>>> {
    let (region_type, region_id) = path.into_inner();
    let scope = scope_of(&region_type, Some(region_id))?;
    region_votes(&state, scope, None, &query).await
}

/// One party's vote records within one region.
#[utoipa::path(
    get,
    path = "/api/v1/partyVotes/region/{regionType}/{regionId}/party/{partyId}",
    params(
        ("regionType" = RegionType, Path, description = "Region type"),
        ("regionId" = u32, Path, description = "Region id, ignored for `NATIONAL`"),
        ("partyId" = u32, Path, description = "Party id"),
        ("page" = Option<usize>, Query, description = "Zero-based page index"),
        ("size" = Option<usize>, Query, description = "Page size, default 500"),
        ("sort" = Option<Vec<String>>, Query, description = "`property[,asc|desc]`, default `votes,desc`")
    ),
    responses(
        (status = 200, description = "Vote details", body = [PartyVoteDetail]),
        (status = 400, description = "Unknown region type or invalid sort", body = String),
        (status = 404, description = "Unknown region or party", body = String)
    ),
    tags = ["votes"],
    operation_id = "listRegionPartyVotes"
)]
#[get("/partyVotes/region/{region_type}/{region_id}/party/{party_id}")]
pub async fn list_region_party_votes(
    state: web::Data<HttpState>,
    path: web::Path<(String, RegionId, PartyId)>,
    query: ListQuery,
) -> ApiResult<web::Json<Vec<PartyVoteDetail>>> {
    let (region_type, region_id, party) = path.into_inner();
    let scope = scope_of(&region_type, Some(region_id))?;
    region_votes(&state, scope, Some(party), &query).await
}
