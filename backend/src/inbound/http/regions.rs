//! Region read endpoints.
//!
//! ```text
//! GET /api/v1/municipalities?year=2025&page=0&size=500&sort=name,asc
//! GET /api/v1/municipalities/363/pollingStations
//! GET /api/v1/constituencies/10/municipalities?sort=name,desc
//! ```

use actix_web::{get, web};
use pagination::Page;

use crate::domain::{RegionId, RegionSummary, RegionWithChildren};
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::{CONSTITUENCY_LISTING, ListQuery, REGION_LISTING};
use crate::inbound::http::state::HttpState;

/// Municipalities of one election year.
#[utoipa::path(
    get,
    path = "/api/v1/municipalities",
    params(
        ("year" = Option<u16>, Query, description = "Election year, defaults to the configured year"),
        ("page" = Option<usize>, Query, description = "Zero-based page index"),
        ("size" = Option<usize>, Query, description = "Page size, default 500"),
        ("sort" = Option<Vec<String>>, Query, description = "`property[,asc|desc]`, default `name,asc`")
    ),
    responses(
        (status = 200, description = "Municipalities", body = Page<RegionSummary>),
        (status = 400, description = "Invalid sort or page", body = String),
        (status = 404, description = "No election held in the year", body = String)
    ),
    tags = ["regions"],
    operation_id = "listMunicipalities"
)]
#[get("/municipalities")]
pub async fn list_municipalities(
    state: web::Data<HttpState>,
    query: ListQuery,
) -> ApiResult<web::Json<Page<RegionSummary>>> {
    let year = query.year(state.default_year)?;
    let listing = query.listing(REGION_LISTING)?;
    Ok(web::Json(state.regions.municipalities(year, &listing).await?))
}

/// One municipality.
#[utoipa::path(
    get,
    path = "/api/v1/municipalities/{id}",
    params(("id" = u32, Path, description = "Municipality id")),
    responses(
        (status = 200, description = "Municipality", body = RegionSummary),
        (status = 404, description = "Unknown municipality", body = String)
    ),
    tags = ["regions"],
    operation_id = "getMunicipality"
)]
#[get("/municipalities/{id}")]
pub async fn get_municipality(
    state: web::Data<HttpState>,
    path: web::Path<RegionId>,
) -> ApiResult<web::Json<RegionSummary>> {
    Ok(web::Json(state.regions.municipality(path.into_inner()).await?))
}

/// One municipality with its polling stations.
#[utoipa::path(
    get,
    path = "/api/v1/municipalities/{id}/pollingStations",
    params(("id" = u32, Path, description = "Municipality id")),
    responses(
        (status = 200, description = "Municipality and polling stations", body = RegionWithChildren),
        (status = 404, description = "Unknown municipality", body = String)
    ),
    tags = ["regions"],
    operation_id = "getMunicipalityPollingStations"
)]
#[get("/municipalities/{id}/pollingStations")]
pub async fn get_municipality_polling_stations(
    state: web::Data<HttpState>,
    path: web::Path<RegionId>,
) -> ApiResult<web::Json<RegionWithChildren>> {
    let id = path.into_inner();
    Ok(web::Json(
        state.regions.municipality_with_polling_stations(id).await?,
    ))
}

/// Polling stations of one election year.
#[utoipa::path(
    get,
    path = "/api/v1/pollingStations",
    params(
        ("year" = Option<u16>, Query, description = "Election year, defaults to the configured year"),
        ("page" = Option<usize>, Query, description = "Zero-based page index"),
        ("size" = Option<usize>, Query, description = "Page size, default 500"),
        ("sort" = Option<Vec<String>>, Query, description = "`property[,asc|desc]`, default `name,asc`")
    ),
    responses(
        (status = 200, description = "Polling stations", body = Page<RegionSummary>),
        (status = 400, description = "Invalid sort or page", body = String),
        (status = 404, description = "No election held in the year", body = String)
    ),
    tags = ["regions"],
    operation_id = "listPollingStations"
)]
#[get("/pollingStations")]
pub async fn list_polling_stations(
    state: web::Data<HttpState>,
    query: ListQuery,
) -> ApiResult<web::Json<Page<RegionSummary>>> {
    let year = query.year(state.default_year)?;
    let listing = query.listing(REGION_LISTING)?;
    Ok(web::Json(state.regions.polling_stations(year, &listing).await?))
}

/// One polling station.
#[utoipa::path(
    get,
    path = "/api/v1/pollingStations/{id}",
    params(("id" = u32, Path, description = "Polling station id")),
    responses(
        (status = 200, description = "Polling station", body = RegionSummary),
        (status = 404, description = "Unknown polling station", body = String)
    ),
    tags = ["regions"],
    operation_id = "getPollingStation"
)]
#[get("/pollingStations/{id}")]
pub async fn get_polling_station(
    state: web::Data<HttpState>,
    path: web::Path<RegionId>,
) -> ApiResult<web::Json<RegionSummary>> {
    Ok(web::Json(state.regions.polling_station(path.into_inner()).await?))
}

/// Constituencies of one election year.
#[utoipa::path(
    get,
    path = "/api/v1/constituencies",
    params(
        ("year" = Option<u16>, Query, description = "Election year, defaults to the configured year"),
        ("page" = Option<usize>, Query, description = "Zero-based page index"),
        ("size" = Option<usize>, Query, description = "Page size, default 100"),
        ("sort" = Option<Vec<String>>, Query, description = "`property[,asc|desc]`, default `name,asc`")
    ),
    responses(
        (status = 200, description = "Constituencies", body = Page<RegionSummary>),
        (status = 400, description = "Invalid sort or page", body = String),
        (status = 404, description = "No election held in the year", body = String)
    ),
    tags = ["regions"],
    operation_id = "listConstituencies"
)]
#[get("/constituencies")]
pub async fn list_constituencies(
    state: web::Data<HttpState>,
    query: ListQuery,
) -> ApiResult<web::Json<Page<RegionSummary>>> {
    let year = query.year(state.default_year)?;
    let listing = query.listing(CONSTITUENCY_LISTING)?;
    Ok(web::Json(state.regions.constituencies(year, &listing).await?))
}

/// One constituency.
#[utoipa::path(
    get,
    path = "/api/v1/constituencies/{id}",
    params(("id" = u32, Path, description = "Constituency id")),
    responses(
        (status = 200, description = "Constituency", body = RegionSummary),
        (status = 404, description = "Unknown constituency", body = String)
    ),
    tags = ["regions"],
    operation_id = "getConstituency"
)]
#[get("/constituencies/{id}")]
pub async fn get_constituency(
    state: web::Data<HttpState>,
    path: web::Path<RegionId>,
) -> ApiResult<web::Json<RegionSummary>> {
    Ok(web::Json(state.regions.constituency(path.into_inner()).await?))
}

/// Municipalities of one constituency, unpaged.
#[utoipa::path(
    get,
    path = "/api/v1/constituencies/{id}/municipalities",
    params(
        ("id" = u32, Path, description = "Constituency id"),
        ("sort" = Option<Vec<String>>, Query, description = "`property[,asc|desc]`, default `name,asc`")
    ),
    responses(
        (status = 200, description = "Municipalities", body = [RegionSummary]),
        (status = 400, description = "Invalid sort", body = String),
        (status = 404, description = "Unknown constituency", body = String)
    ),
    tags = ["regions"],
    operation_id = "listConstituencyMunicipalities"
)]
#[get("/constituencies/{id}/municipalities")]
pub async fn list_constituency_municipalities(
    state: web::Data<HttpState>,
    path: web::Path<RegionId>,
    query: ListQuery,
) -> ApiResult<web::Json<Vec<RegionSummary>>> {
    let sort = query.sort(REGION_LISTING)?;
    Ok(web::Json(
        state
            .regions
            .constituency_municipalities(path.into_inner(), &sort)
            .await?,
    ))
}
