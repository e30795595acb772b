//! Tests for election, party and metadata queries.

use super::*;
use crate::domain::{ErrorKind, SortOrder, SortSpec};
use crate::outbound::persistence::in_memory_stores;
use crate::test_support::seeded_stores;
use pagination::PageRequest;
use rstest::rstest;

async fn service() -> ElectionService {
    ElectionService::new(seeded_stores().await)
}

fn listing(sort: SortSpec) -> Listing {
    Listing::new(sort, PageRequest::new(0, 20).expect("non-zero size"))
}

#[tokio::test]
async fn elections_are_listed_in_id_order() {
    let ids: Vec<String> = service()
        .await
        .elections()
        .await
        .expect("loaded")
        .into_iter()
        .map(|e| e.id.to_string())
        .collect();
    assert_eq!(ids, ["TK2023", "TK2025"]);
}

#[tokio::test]
async fn empty_store_has_no_elections() {
    let err = ElectionService::new(in_memory_stores())
        .elections()
        .await
        .expect_err("nothing loaded");
    assert_eq!(err.kind(), ErrorKind::ElectionNotFound);
}

#[tokio::test]
async fn parties_can_be_narrowed_to_one_election() {
    let election = ElectionId::new("TK2025");
    let page = service()
        .await
        .parties(Some(&election), &listing(SortSpec::by(SortOrder::desc("seats"))))
        .await
        .expect("known election");
    let names: Vec<&str> = page.content().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "PVV",
            "D66",
            "VVD",
            "GROENLINKS / Partij van de Arbeid (PvdA)",
            "Partij voor de Toekomst"
        ]
    );
    assert!(page.content().iter().all(|p| p.election == election));
}

#[tokio::test]
async fn parties_carry_their_candidates() {
    let page = service()
        .await
        .parties(None, &listing(SortSpec::unsorted()))
        .await
        .expect("listing");
    let pvv = page.content().first().expect("party 1");
    assert_eq!(pvv.candidates.first().map(|c| c.last_name.as_str()), Some("Wilders"));
}

#[rstest]
#[case(None, 6)]
#[case(Some("TK2025"), 5)]
#[case(Some("TK2023"), 1)]
#[tokio::test]
async fn party_count_follows_the_filter(#[case] election: Option<&str>, #[case] expected: usize) {
    let election = election.map(ElectionId::new);
    let count = service()
        .await
        .party_count(election.as_ref())
        .await
        .expect("count");
    assert_eq!(count, expected);
}

#[tokio::test]
async fn unknown_election_filter_is_not_found() {
    let err = service()
        .await
        .party_count(Some(&ElectionId::new("GR2022")))
        .await
        .expect_err("unknown election");
    assert_eq!(err.to_string(), "Elections not found: no election with id GR2022");
}

#[rstest]
#[case(RegionType::Municipality, None, vec![2, 3])]
#[case(RegionType::Municipality, Some(392), vec![3])]
#[case(RegionType::National, Some(5), vec![1])]
#[case(RegionType::PollingStation, None, vec![])]
#[tokio::test]
async fn metadata_is_filtered_by_region(
    #[case] region_type: RegionType,
    #[case] region_id: Option<u32>,
    #[case] expected: Vec<u32>,
) {
    let ids: Vec<u32> = service()
        .await
        .metadata(region_type, region_id.map(RegionId::new))
        .await
        .expect("metadata")
        .iter()
        .map(|m| m.id.get())
        .collect();
    assert_eq!(ids, expected);
}
