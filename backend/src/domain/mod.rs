//! Domain primitives, services and ports.
//!
//! Purpose: hold the election model and the rules for listing it. Types here
//! know nothing about HTTP; adapters reach them through the services and
//! the ports in [`ports`].
//!
//! Public surface:
//! - Entities: [`Election`], the region hierarchy, [`Party`], [`PartyVote`],
//!   [`Metadata`], [`Post`] and [`User`].
//! - Listing rules: [`SortSpec`], [`SortWhitelist`] and [`Listing`].
//! - Dispatch: [`RegionScope`] and [`RegionQueryRouter`].
//! - Errors: [`ElectionError`], its [`ErrorKind`] and [`ErrorCode`].
//! - Services: [`RegionService`], [`ElectionService`], [`VoteService`],
//!   [`PostService`] and [`UserService`].

pub(crate) mod macros;

pub mod elections;
pub mod error;
pub mod listing;
pub mod ports;
pub mod posts;
pub mod region;
pub mod region_router;
pub mod sorting;
pub mod stores;
pub mod user;

mod election_service;
mod post_service;
mod region_service;
mod user_service;
mod vote_service;

pub use self::election_service::ElectionService;
pub use self::elections::{
    Candidate, Constituency, Election, ElectionId, Metadata, MetadataId, Municipality, Party,
    PartyId, PartyVote, PartyVoteDetail, PollingStation, RegionSummary, VoteId, party_sorts,
    region_sorts, vote_detail_sorts,
};
pub use self::error::{ElectionError, ErrorCode, ErrorKind};
pub use self::listing::Listing;
pub use self::post_service::PostService;
pub use self::posts::{
    MAX_SEARCH_QUERY_CHARS, NewPost, Post, PostDetail, PostId, SearchQuery, post_sorts,
};
pub use self::region::{NATIONAL_REGION_NAME, RegionId, RegionScope, RegionType, UnknownRegionType};
pub use self::region_router::{RegionQueryRouter, RegionStores};
pub use self::region_service::{RegionService, RegionWithChildren};
pub use self::sorting::{SortDirection, SortOrder, SortSpec, SortWhitelist, order};
pub use self::stores::ElectionStores;
pub use self::user::{Registration, User, UserId};
pub use self::user_service::UserService;
pub use self::vote_service::VoteService;
