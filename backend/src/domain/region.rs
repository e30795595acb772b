//! Region dispatch keys and scopes.
//!
//! A [`RegionScope`] names the slice of the country a query targets. The
//! national scope never carries an id; every other scope always does.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ElectionError;
use super::macros::define_numeric_id;

/// Display name used for the nation-wide scope.
pub const NATIONAL_REGION_NAME: &str = "Nederland";

/// Closed set of region kinds.
///
/// # Examples
/// ```
/// use backend::domain::RegionType;
///
/// let parsed: RegionType = "POLLING_STATION".parse().expect("known type");
/// assert_eq!(parsed, RegionType::PollingStation);
/// assert_eq!(parsed.to_string(), "POLLING_STATION");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegionType {
    /// A municipality (gemeente).
    Municipality,
    /// A single polling station.
    PollingStation,
    /// The whole country.
    National,
    /// An electoral constituency (kieskring).
    Constituency,
}

impl RegionType {
    /// Every region type, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Municipality,
        Self::PollingStation,
        Self::National,
        Self::Constituency,
    ];

    /// Wire name of the region type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Municipality => "MUNICIPALITY",
            Self::PollingStation => "POLLING_STATION",
            Self::National => "NATIONAL",
            Self::Constituency => "CONSTITUENCY",
        }
    }
}

impl fmt::Display for RegionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a path segment names no known region type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region type: {0}")]
pub struct UnknownRegionType(pub String);

impl FromStr for RegionType {
    type Err = UnknownRegionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRegionType(s.to_owned()))
    }
}

define_numeric_id!(
    /// Numeric identifier shared by constituencies, municipalities and
    /// polling stations.
    RegionId
);

/// The region a query targets.
///
/// ## Invariants
/// - `National` carries no id, every other variant carries exactly one.
///
/// # Examples
/// ```
/// use backend::domain::{RegionId, RegionScope, RegionType};
///
/// let scope = RegionScope::from_parts(RegionType::National, Some(RegionId::new(3)))
///     .expect("national needs no id");
/// assert_eq!(scope, RegionScope::National);
/// assert!(RegionScope::from_parts(RegionType::Municipality, None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RegionScopeDto", into = "RegionScopeDto")]
pub enum RegionScope {
    /// Nation-wide.
    National,
    /// One constituency.
    Constituency(RegionId),
    /// One municipality.
    Municipality(RegionId),
    /// One polling station.
    PollingStation(RegionId),
}

impl RegionScope {
    /// Combine a type and an optional id into a scope.
    ///
    /// An id supplied with [`RegionType::National`] is ignored.
    ///
    /// # Errors
    /// Returns [`ElectionError::MissingRegionId`] when a non-national type has
    /// no id.
    pub fn from_parts(
        region_type: RegionType,
        id: Option<RegionId>,
    ) -> Result<Self, ElectionError> {
        let require = |id: Option<RegionId>| {
            id.ok_or_else(|| ElectionError::missing_region_id(region_type))
        };
        Ok(match region_type {
            RegionType::National => Self::National,
            RegionType::Constituency => Self::Constituency(require(id)?),
            RegionType::Municipality => Self::Municipality(require(id)?),
            RegionType::PollingStation => Self::PollingStation(require(id)?),
        })
    }

    /// Dispatch key of this scope.
    #[must_use]
    pub const fn region_type(&self) -> RegionType {
        match self {
            Self::National => RegionType::National,
            Self::Constituency(_) => RegionType::Constituency,
            Self::Municipality(_) => RegionType::Municipality,
            Self::PollingStation(_) => RegionType::PollingStation,
        }
    }

    /// Region id, absent for the national scope.
    #[must_use]
    pub const fn region_id(&self) -> Option<RegionId> {
        match self {
            Self::National => None,
            Self::Constituency(id) | Self::Municipality(id) | Self::PollingStation(id) => {
                Some(*id)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegionScopeDto {
    region_type: RegionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region_id: Option<RegionId>,
}

impl From<RegionScope> for RegionScopeDto {
    fn from(scope: RegionScope) -> Self {
        Self {
            region_type: scope.region_type(),
            region_id: scope.region_id(),
        }
    }
}

impl TryFrom<RegionScopeDto> for RegionScope {
    type Error = ElectionError;

    fn try_from(dto: RegionScopeDto) -> Result<Self, Self::Error> {
        Self::from_parts(dto.region_type, dto.region_id)
    }
}
