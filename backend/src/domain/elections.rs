//! Election result entities.
//!
//! Constituencies belong to an election, municipalities to a constituency
//! and polling stations to a municipality. Votes and turnout metadata are
//! attached to a [`RegionScope`].

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::macros::define_numeric_id;
use super::ports::Entity;
use super::{RegionId, RegionScope, RegionType, SortWhitelist};

/// Identifier of an election such as `TK2025`.
///
/// # Examples
/// ```
/// use backend::domain::ElectionId;
///
/// assert_eq!(ElectionId::new("TK2025").year(), Some(2025));
/// assert_eq!(ElectionId::new("referendum").year(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ElectionId(String);

impl ElectionId {
    /// Wrap a raw election id.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Year encoded after the alphabetic election-kind prefix.
    #[must_use]
    pub fn year(&self) -> Option<u16> {
        self.0
            .trim_start_matches(|c: char| c.is_ascii_alphabetic())
            .parse()
            .ok()
    }
}

impl std::fmt::Display for ElectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    pub id: ElectionId,
    pub name: String,
}

/// Electoral district within one election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constituency {
    pub id: RegionId,
    pub name: String,
    pub election: ElectionId,
}

/// Municipality within one constituency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Municipality {
    pub id: RegionId,
    pub name: String,
    pub constituency: RegionId,
}

/// Polling station within one municipality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollingStation {
    pub id: RegionId,
    /// Station code as published in the results feed, e.g. `SB3`.
    pub code: String,
    pub name: String,
    pub municipality: RegionId,
}

/// Id and display name of any region, the shape of every region listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub id: RegionId,
    pub name: String,
}

impl From<&Constituency> for RegionSummary {
    fn from(value: &Constituency) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
        }
    }
}

impl From<&Municipality> for RegionSummary {
    fn from(value: &Municipality) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
        }
    }
}

impl From<&PollingStation> for RegionSummary {
    fn from(value: &PollingStation) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
        }
    }
}

define_numeric_id!(
    /// Party identifier.
    PartyId
);

/// Candidate on a party list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u32,
    pub initials: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub elected: bool,
}

/// Party taking part in one election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    pub seats: u32,
    pub election: ElectionId,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

define_numeric_id!(
    /// Vote record identifier.
    VoteId
);

/// Votes one party received within one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyVote {
    pub id: VoteId,
    pub party: PartyId,
    pub scope: RegionScope,
    pub votes: u64,
}

define_numeric_id!(
    /// Turnout metadata identifier.
    MetadataId
);

/// Turnout figures for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub id: MetadataId,
    pub scope: RegionScope,
    pub total_cast: u64,
    pub total_counted: u64,
    pub invalid: u64,
    pub blank: u64,
}

/// A vote record joined with its party and region names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartyVoteDetail {
    pub party_id: PartyId,
    pub party_name: String,
    pub seats: u32,
    pub votes: u64,
    pub region_type: RegionType,
    pub region_id: Option<RegionId>,
    pub region_name: String,
}

macro_rules! impl_entity {
    ($($entity:ty => $id:ty),* $(,)?) => {
        $(
            impl Entity for $entity {
                type Id = $id;

                fn id(&self) -> Self::Id {
                    self.id.clone()
                }
            }
        )*
    };
}

impl_entity! {
    Election => ElectionId,
    Constituency => RegionId,
    Municipality => RegionId,
    PollingStation => RegionId,
    Party => PartyId,
    PartyVote => VoteId,
    Metadata => MetadataId,
}

static REGION_SORTS: LazyLock<SortWhitelist<RegionSummary>> = LazyLock::new(|| {
    SortWhitelist::new()
        .with("name", |a: &RegionSummary, b: &RegionSummary| {
            a.name.cmp(&b.name)
        })
        .by_key("id", |r: &RegionSummary| r.id)
});

static VOTE_DETAIL_SORTS: LazyLock<SortWhitelist<PartyVoteDetail>> = LazyLock::new(|| {
    SortWhitelist::new()
        .by_key("votes", |v: &PartyVoteDetail| v.votes)
        .by_key("partyId", |v: &PartyVoteDetail| v.party_id)
        .with("partyName", |a: &PartyVoteDetail, b: &PartyVoteDetail| {
            a.party_name.cmp(&b.party_name)
        })
});

static PARTY_SORTS: LazyLock<SortWhitelist<Party>> = LazyLock::new(|| {
    SortWhitelist::new()
        .by_key("id", |p: &Party| p.id)
        .with("name", |a: &Party, b: &Party| a.name.cmp(&b.name))
        .by_key("seats", |p: &Party| p.seats)
});

/// Sortable properties of municipality, polling station and constituency
/// listings.
#[must_use]
pub fn region_sorts() -> &'static SortWhitelist<RegionSummary> {
    &REGION_SORTS
}

/// Sortable properties of party vote listings.
#[must_use]
pub fn vote_detail_sorts() -> &'static SortWhitelist<PartyVoteDetail> {
    &VOTE_DETAIL_SORTS
}

/// Sortable properties of party listings.
#[must_use]
pub fn party_sorts() -> &'static SortWhitelist<Party> {
    &PARTY_SORTS
}
