//! Tests for vote listings.

use super::*;
use crate::domain::{ErrorKind, RegionId, RegionType, SortOrder, SortSpec};
use crate::test_support::seeded_stores;
use pagination::PageRequest;
use rstest::rstest;

async fn service() -> VoteService {
    VoteService::new(&seeded_stores().await)
}

fn by_votes_desc(size: usize) -> Listing {
    Listing::new(
        SortSpec::by(SortOrder::desc("votes")),
        PageRequest::new(0, size).expect("non-zero size"),
    )
}

fn party_names(details: &[PartyVoteDetail]) -> Vec<&str> {
    details.iter().map(|d| d.party_name.as_str()).collect()
}

#[tokio::test]
async fn tied_votes_keep_their_stored_order() {
    let details = service()
        .await
        .votes_in_region(RegionScope::Constituency(RegionId::new(9)), None, &by_votes_desc(500))
        .await
        .expect("constituency exists");
    assert_eq!(
        party_names(&details),
        ["D66", "GROENLINKS / Partij van de Arbeid (PvdA)", "PVV"]
    );
    assert!(details.iter().all(|d| d.region_name == "Amsterdam"));
}

#[tokio::test]
async fn national_votes_are_named_after_the_country() {
    let details = service()
        .await
        .votes_in_region(RegionScope::National, None, &by_votes_desc(2))
        .await
        .expect("national");
    assert_eq!(party_names(&details), ["D66", "PVV"]);
    let first = details.first().expect("one row");
    assert_eq!(first.region_name, "Nederland");
    assert_eq!(first.region_type, RegionType::National);
    assert_eq!(first.region_id, None);
    assert_eq!(first.seats, 26);
}

#[tokio::test]
async fn party_votes_span_every_region() {
    let details = service()
        .await
        .votes_for_party(PartyId::new(1), &by_votes_desc(500))
        .await
        .expect("known party");
    let regions: Vec<&str> = details.iter().map(|d| d.region_name.as_str()).collect();
    assert_eq!(regions, ["Nederland", "Amsterdam", "Amsterdam", "Stadhuis"]);
    let types: Vec<RegionType> = details.iter().map(|d| d.region_type).collect();
    assert_eq!(
        types,
        [
            RegionType::National,
            RegionType::Constituency,
            RegionType::Municipality,
            RegionType::PollingStation
        ]
    );
}

#[tokio::test]
async fn unknown_party_has_no_votes() {
    let err = service()
        .await
        .votes_for_party(PartyId::new(99), &by_votes_desc(500))
        .await
        .expect_err("unknown party");
    assert_eq!(err.kind(), ErrorKind::PartyVoteNotFound);
    assert_eq!(err.to_string(), "Party vote(s) not found: With party ID 99");
}

#[rstest]
#[case::known_party_without_votes(RegionScope::National, 7, 0)]
#[case::owner_in_municipality(RegionScope::Municipality(RegionId::new(363)), 2, 1)]
#[tokio::test]
async fn region_votes_can_be_narrowed_to_a_party(
    #[case] scope: RegionScope,
    #[case] party: u32,
    #[case] expected: usize,
) {
    let details = service()
        .await
        .votes_in_region(scope, Some(PartyId::new(party)), &by_votes_desc(500))
        .await
        .expect("known region and party");
    assert_eq!(details.len(), expected);
}

#[tokio::test]
async fn unknown_region_is_reported_before_votes() {
    let err = service()
        .await
        .votes_in_region(RegionScope::Municipality(RegionId::new(999)), None, &by_votes_desc(500))
        .await
        .expect_err("unknown municipality");
    assert_eq!(err.to_string(), "Municipality with ID 999 not found.");
}

#[tokio::test]
async fn windows_past_the_end_are_empty() {
    let listing = Listing::new(
        SortSpec::by(SortOrder::desc("votes")),
        PageRequest::new(5, 2).expect("non-zero size"),
    );
    let details = service()
        .await
        .votes_in_region(RegionScope::National, None, &listing)
        .await
        .expect("national");
    assert!(details.is_empty());
}

#[tokio::test]
async fn vote_listings_reject_unknown_sort_keys() {
    let listing = Listing::new(
        SortSpec::by(SortOrder::asc("turnout")),
        PageRequest::new(0, 10).expect("non-zero size"),
    );
    let err = service()
        .await
        .votes_in_region(RegionScope::National, None, &listing)
        .await
        .expect_err("not whitelisted");
    assert_eq!(err.kind(), ErrorKind::InvalidSortProperty);
}
