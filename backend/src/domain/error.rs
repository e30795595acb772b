//! Domain failure taxonomy.
//!
//! Every failure the election API reports is a variant of [`ElectionError`].
//! The set is closed: [`ErrorKind`] names each variant without its context
//! and [`ErrorCode`] groups kinds into the transport-agnostic categories that
//! inbound adapters translate into protocol status codes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::macros::define_port_error;
use super::ports::{HashingError, StoreError};
use super::{PostId, RegionId, RegionType, UnknownRegionType, UserId};

/// Stable machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected failure inside the service.
    InternalError,
}

define_port_error! {
    /// Failures raised by election queries, posts and user management.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{ElectionError, ErrorCode, RegionId};
    ///
    /// let err = ElectionError::municipality_not_found(RegionId::new(999));
    /// assert_eq!(err.to_string(), "Municipality with ID 999 not found.");
    /// assert_eq!(err.code(), ErrorCode::NotFound);
    /// ```
    pub enum ElectionError {
        /// A sort key is absent from the entity's whitelist or malformed.
        InvalidSortProperty { property: String } => "Invalid sort property: {property}",
        /// Free-text search input failed validation.
        InvalidSearchQuery { reason: String } => "Invalid search query: {reason}",
        /// Page index or size could not be used.
        InvalidPageRequest { reason: String } => "Invalid page request: {reason}",
        /// A region type token is not one of the known types.
        InvalidRegionType { value: String } => "Invalid region type: {value}",
        /// A non-national scope was requested without an id.
        MissingRegionId { region_type: RegionType } =>
            "Region type {region_type} requires a region id.",
        /// No municipality has the requested id.
        MunicipalityNotFound { id: RegionId } => "Municipality with ID {id} not found.",
        /// No constituency has the requested id.
        ConstituencyNotFound { id: RegionId } => "Constituency with ID {id} not found.",
        /// No polling station has the requested id.
        PollingStationNotFound { id: RegionId } => "Polling station with ID {id} not found.",
        /// No election data exists for the requested scope.
        ElectionNotFound { reason: String } => "Elections not found: {reason}",
        /// Vote lookup for a party that does not exist.
        PartyVoteNotFound { reason: String } => "Party vote(s) not found: {reason}",
        /// No post has the requested id.
        PostNotFound { id: PostId } => "Post not found with id: {id}",
        /// A new post failed validation.
        InvalidPost { reason: String } => "{reason}",
        /// A registration failed validation.
        InvalidUser { reason: String } => "{reason}",
        /// Registration conflict on the email address.
        EmailAlreadyExists { email: String } => "Email already exists: {email}",
        /// Registration conflict on the username.
        UsernameAlreadyExists { username: String } => "Username already exists: {username}",
        /// Login with an unknown email or a wrong password.
        InvalidCredentials => "Invalid credentials",
        /// No user has the requested id.
        UserNotFound { id: UserId } => "User not found with id: {id}",
        /// Store or hashing failure; never shown to clients verbatim.
        Internal { message: String } => "internal error: {message}",
    }
}

/// Fieldless discriminant of [`ElectionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ElectionError::InvalidSortProperty`].
    InvalidSortProperty,
    /// See [`ElectionError::InvalidSearchQuery`].
    InvalidSearchQuery,
    /// See [`ElectionError::InvalidPageRequest`].
    InvalidPageRequest,
    /// See [`ElectionError::InvalidRegionType`].
    InvalidRegionType,
    /// See [`ElectionError::MissingRegionId`].
    MissingRegionId,
    /// See [`ElectionError::MunicipalityNotFound`].
    MunicipalityNotFound,
    /// See [`ElectionError::ConstituencyNotFound`].
    ConstituencyNotFound,
    /// See [`ElectionError::PollingStationNotFound`].
    PollingStationNotFound,
    /// See [`ElectionError::ElectionNotFound`].
    ElectionNotFound,
    /// See [`ElectionError::PartyVoteNotFound`].
    PartyVoteNotFound,
    /// See [`ElectionError::PostNotFound`].
    PostNotFound,
    /// See [`ElectionError::InvalidPost`].
    InvalidPost,
    /// See [`ElectionError::InvalidUser`].
    InvalidUser,
    /// See [`ElectionError::EmailAlreadyExists`].
    EmailAlreadyExists,
    /// See [`ElectionError::UsernameAlreadyExists`].
    UsernameAlreadyExists,
    /// See [`ElectionError::InvalidCredentials`].
    InvalidCredentials,
    /// See [`ElectionError::UserNotFound`].
    UserNotFound,
    /// See [`ElectionError::Internal`].
    Internal,
}

impl ErrorKind {
    /// Every kind, used to prove status mappings are total.
    pub const ALL: [Self; 18] = [
        Self::InvalidSortProperty,
        Self::InvalidSearchQuery,
        Self::InvalidPageRequest,
        Self::InvalidRegionType,
        Self::MissingRegionId,
        Self::MunicipalityNotFound,
        Self::ConstituencyNotFound,
        Self::PollingStationNotFound,
        Self::ElectionNotFound,
        Self::PartyVoteNotFound,
        Self::PostNotFound,
        Self::InvalidPost,
        Self::InvalidUser,
        Self::EmailAlreadyExists,
        Self::UsernameAlreadyExists,
        Self::InvalidCredentials,
        Self::UserNotFound,
        Self::Internal,
    ];

    /// Category the kind belongs to.
    #[must_use]
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::InvalidSortProperty
            | Self::InvalidSearchQuery
            | Self::InvalidPageRequest
            | Self::InvalidRegionType
            | Self::MissingRegionId
            | Self::InvalidPost
            | Self::InvalidUser
            | Self::EmailAlreadyExists
            | Self::UsernameAlreadyExists
            | Self::InvalidCredentials => ErrorCode::InvalidRequest,
            Self::MunicipalityNotFound
            | Self::ConstituencyNotFound
            | Self::PollingStationNotFound
            | Self::ElectionNotFound
            | Self::PartyVoteNotFound
            | Self::PostNotFound
            | Self::UserNotFound => ErrorCode::NotFound,
            Self::Internal => ErrorCode::InternalError,
        }
    }
}

impl ElectionError {
    /// Discriminant of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSortProperty { .. } => ErrorKind::InvalidSortProperty,
            Self::InvalidSearchQuery { .. } => ErrorKind::InvalidSearchQuery,
            Self::InvalidPageRequest { .. } => ErrorKind::InvalidPageRequest,
            Self::InvalidRegionType { .. } => ErrorKind::InvalidRegionType,
            Self::MissingRegionId { .. } => ErrorKind::MissingRegionId,
            Self::MunicipalityNotFound { .. } => ErrorKind::MunicipalityNotFound,
            Self::ConstituencyNotFound { .. } => ErrorKind::ConstituencyNotFound,
            Self::PollingStationNotFound { .. } => ErrorKind::PollingStationNotFound,
            Self::ElectionNotFound { .. } => ErrorKind::ElectionNotFound,
            Self::PartyVoteNotFound { .. } => ErrorKind::PartyVoteNotFound,
            Self::PostNotFound { .. } => ErrorKind::PostNotFound,
            Self::InvalidPost { .. } => ErrorKind::InvalidPost,
            Self::InvalidUser { .. } => ErrorKind::InvalidUser,
            Self::EmailAlreadyExists { .. } => ErrorKind::EmailAlreadyExists,
            Self::UsernameAlreadyExists { .. } => ErrorKind::UsernameAlreadyExists,
            Self::InvalidCredentials => ErrorKind::InvalidCredentials,
            Self::UserNotFound { .. } => ErrorKind::UserNotFound,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Category of this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.kind().code()
    }

    /// The not-found error matching a scoped region type.
    ///
    /// Returns `None` for [`RegionType::National`], which always exists.
    #[must_use]
    pub fn region_not_found(region_type: RegionType, id: RegionId) -> Option<Self> {
        match region_type {
            RegionType::National => None,
            RegionType::Constituency => Some(Self::constituency_not_found(id)),
            RegionType::Municipality => Some(Self::municipality_not_found(id)),
            RegionType::PollingStation => Some(Self::polling_station_not_found(id)),
        }
    }
}

impl From<UnknownRegionType> for ElectionError {
    fn from(err: UnknownRegionType) -> Self {
        Self::invalid_region_type(err.0)
    }
}

impl From<StoreError> for ElectionError {
    fn from(err: StoreError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<HashingError> for ElectionError {
    fn from(err: HashingError) -> Self {
        Self::internal(err.to_string())
    }
}
