//! HTTP inbound adapter exposing the REST endpoints.

pub mod elections;
pub mod error;
pub mod health;
pub mod posts;
pub mod query;
pub mod regions;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod votes;

pub use error::ApiResult;

use actix_web::{Scope, web};

/// Every `/api/v1` endpoint. Handlers expect [`state::HttpState`] as app
/// data.
#[must_use]
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(elections::list_elections)
        .service(elections::count_parties)
        .service(elections::list_parties)
        .service(elections::list_region_type_metadata)
        .service(elections::list_region_metadata)
        .service(regions::list_municipalities)
        .service(regions::get_municipality)
        .service(regions::get_municipality_polling_stations)
        .service(regions::list_polling_stations)
        .service(regions::get_polling_station)
        .service(regions::list_constituencies)
        .service(regions::get_constituency)
        .service(regions::list_constituency_municipalities)
        .service(votes::list_party_votes)
        .service(votes::list_region_type_votes)
        .service(votes::list_region_votes)
        .service(votes::list_region_party_votes)
        .service(posts::list_posts)
        .service(posts::get_post)
        .service(posts::create_post)
        .service(users::register_user)
        .service(users::login_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::delete_user)
}
