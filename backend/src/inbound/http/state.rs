//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they only reach
//! the domain services and stay testable against in-memory stores.

use std::sync::Arc;

use crate::domain::ports::PasswordHashing;
use crate::domain::{
    ElectionService, ElectionStores, PostService, RegionService, UserService, VoteService,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub regions: Arc<RegionService>,
    pub elections: Arc<ElectionService>,
    pub votes: Arc<VoteService>,
    pub posts: Arc<PostService>,
    pub users: Arc<UserService>,
    /// Year used when a region listing names none.
    pub default_year: u16,
}

impl HttpState {
    /// Wire every service over one set of stores.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::persistence::in_memory_stores;
    /// use backend::outbound::security::Argon2PasswordHasher;
    ///
    /// let state = HttpState::new(
    ///     &in_memory_stores(),
    ///     Arc::new(Argon2PasswordHasher::default()),
    ///     2025,
    /// );
    /// assert_eq!(state.default_year, 2025);
    /// ```
    pub fn new(
        stores: &ElectionStores,
        hasher: Arc<dyn PasswordHashing>,
        default_year: u16,
    ) -> Self {
        Self {
            regions: Arc::new(RegionService::new(stores)),
            elections: Arc::new(ElectionService::new(stores.clone())),
            votes: Arc::new(VoteService::new(stores)),
            posts: Arc::new(PostService::new(
                Arc::clone(&stores.posts),
                Arc::clone(&stores.users),
            )),
            users: Arc::new(UserService::new(Arc::clone(&stores.users), hasher)),
            default_year,
        }
    }
}
