//! Region dispatch against the sample dataset.

use super::*;
use crate::domain::ErrorKind;
use crate::test_support::seeded_stores;
use rstest::rstest;

async fn router() -> RegionQueryRouter {
    let stores = seeded_stores().await;
    RegionQueryRouter::new(stores.regions, stores.votes)
}

fn vote_ids(votes: &[PartyVote]) -> Vec<u32> {
    votes.iter().map(|vote| vote.id.get()).collect()
}

#[rstest]
#[case::municipality(RegionScope::Municipality(RegionId::new(999)), ErrorKind::MunicipalityNotFound)]
#[case::constituency(RegionScope::Constituency(RegionId::new(999)), ErrorKind::ConstituencyNotFound)]
#[case::station(RegionScope::PollingStation(RegionId::new(999)), ErrorKind::PollingStationNotFound)]
#[tokio::test]
async fn unknown_regions_fail_with_their_own_kind(
    #[case] scope: RegionScope,
    #[case] expected: ErrorKind,
) {
    let err = router().await.resolve(scope, None).await.expect_err("absent");
    assert_eq!(err.kind(), expected);
}

#[rstest]
#[tokio::test]
async fn missing_municipality_names_the_id() {
    let err = router()
        .await
        .resolve(RegionScope::Municipality(RegionId::new(999)), None)
        .await
        .expect_err("absent");
    assert_eq!(err.to_string(), "Municipality with ID 999 not found.");
}

#[rstest]
#[tokio::test]
async fn national_owner_without_records_is_empty() {
    let votes = router()
        .await
        .resolve(RegionScope::National, Some(PartyId::new(7)))
        .await
        .expect("national scope always exists");
    assert!(votes.is_empty());
}

#[rstest]
#[case::national(RegionScope::National, None, vec![1, 2, 3, 4])]
#[case::constituency(RegionScope::Constituency(RegionId::new(9)), None, vec![5, 6, 7])]
#[case::owner(RegionScope::Municipality(RegionId::new(363)), Some(3), vec![10])]
#[case::station(RegionScope::PollingStation(RegionId::new(3631)), Some(1), vec![11])]
#[case::no_votes(RegionScope::Municipality(RegionId::new(394)), None, vec![])]
#[tokio::test]
async fn votes_are_narrowed_to_scope_and_owner(
    #[case] scope: RegionScope,
    #[case] owner: Option<u32>,
    #[case] expected: Vec<u32>,
) {
    let votes = router()
        .await
        .resolve(scope, owner.map(PartyId::new))
        .await
        .expect("region exists");
    assert_eq!(vote_ids(&votes), expected);
}

#[rstest]
#[case::national(RegionScope::National, vec![9, 10, 13, 109])]
#[case::constituency(RegionScope::Constituency(RegionId::new(10)), vec![392, 394])]
#[case::municipality(RegionScope::Municipality(RegionId::new(363)), vec![3631, 3632])]
#[case::station(RegionScope::PollingStation(RegionId::new(3631)), vec![])]
#[tokio::test]
async fn children_follow_the_region_hierarchy(
    #[case] scope: RegionScope,
    #[case] expected: Vec<u32>,
) {
    let ids: Vec<u32> = router()
        .await
        .resolve_regions(scope)
        .await
        .expect("region exists")
        .iter()
        .map(|region| region.id.get())
        .collect();
    assert_eq!(ids, expected);
}

#[rstest]
#[case(RegionScope::National, Some("Nederland"))]
#[case(RegionScope::Constituency(RegionId::new(13)), Some("'s-Gravenhage"))]
#[case(RegionScope::PollingStation(RegionId::new(3632)), Some("Centrale Bibliotheek"))]
#[case(RegionScope::Municipality(RegionId::new(1)), None)]
#[tokio::test]
async fn region_names_are_looked_up_per_type(
    #[case] scope: RegionScope,
    #[case] expected: Option<&str>,
) {
    let name = router().await.region_name(scope).await.expect("lookup");
    assert_eq!(name.as_deref(), expected);
}
