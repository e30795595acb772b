//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers every HTTP endpoint and the schemas they exchange.
//! Swagger UI serves it in debug builds and `openapi-dump` prints it for
//! external tooling.

use pagination::Page;
use utoipa::OpenApi;

use crate::domain::{
    Candidate, Election, ElectionId, ErrorCode, Party, PartyId, PartyVoteDetail, PostDetail,
    PostId, RegionId, RegionSummary, RegionType, RegionWithChildren, UserId,
};
use crate::inbound::http::elections::MetadataResponse;
use crate::inbound::http::posts::CreatePostRequest;
use crate::inbound::http::users::{LoginRequest, RegisterRequest, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Election results API",
        description = "Region-scoped election results with sorting and pagination, plus community posts and users.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::elections::list_elections,
        crate::inbound::http::elections::list_parties,
        crate::inbound::http::elections::count_parties,
        crate::inbound::http::elections::list_region_type_metadata,
        crate::inbound::http::elections::list_region_metadata,
        crate::inbound::http::regions::list_municipalities,
        crate::inbound::http::regions::get_municipality,
        crate::inbound::http::regions::get_municipality_polling_stations,
        crate::inbound::http::regions::list_polling_stations,
        crate::inbound::http::regions::get_polling_station,
        crate::inbound::http::regions::list_constituencies,
        crate::inbound::http::regions::get_constituency,
        crate::inbound::http::regions::list_constituency_municipalities,
        crate::inbound::http::votes::list_party_votes,
        crate::inbound::http::votes::list_region_type_votes,
        crate::inbound::http::votes::list_region_votes,
        crate::inbound::http::votes::list_region_party_votes,
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::posts::get_post,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::login_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Candidate,
        CreatePostRequest,
        Election,
        ElectionId,
        ErrorCode,
        MetadataResponse,
        Page<Party>,
        Page<PostDetail>,
        Page<RegionSummary>,
        Party,
        PartyId,
        PartyVoteDetail,
        PostDetail,
        PostId,
        RegionId,
        RegionSummary,
        RegionType,
        RegionWithChildren,
        RegisterRequest,
        LoginRequest,
        UserId,
        UserResponse,
    )),
    tags(
        (name = "elections", description = "Elections, parties and turnout"),
        (name = "regions", description = "Constituencies, municipalities and polling stations"),
        (name = "votes", description = "Party votes per region"),
        (name = "posts", description = "Community posts"),
        (name = "users", description = "User registration, login and administration"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
