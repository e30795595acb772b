//! Tests for post queries and creation.

use super::*;
use crate::domain::{ErrorKind, SortOrder, SortSpec};
use crate::outbound::persistence::InMemoryStore;
use chrono::{TimeZone, Utc};
use pagination::PageRequest;
use rstest::{fixture, rstest};

fn user(id: u32, username: &str) -> User {
    User {
        id: UserId::new(id),
        username: username.to_owned(),
        email: format!("{username}@example.nl"),
        password_hash: "$argon2id$stub".to_owned(),
    }
}

fn post(id: u32, user_id: u32, title: &str, content: &str, day: u32) -> Post {
    Post {
        id: PostId::new(id),
        user_id: UserId::new(user_id),
        title: title.to_owned(),
        content: content.to_owned(),
        created_at: Utc
            .with_ymd_and_hms(2025, 10, day, 12, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

#[fixture]
fn service() -> PostService {
    let users = InMemoryStore::with_entities([user(1, "kiezer01"), user(2, "stemmer02")]);
    let posts = InMemoryStore::with_entities([
        post(1, 1, "Opkomst in Amsterdam", "Hoger dan verwacht.", 29),
        post(2, 2, "Zetelverdeling", "D66 en PVV gelijk.", 30),
        post(3, 9, "Weesbericht", "Auteur bestaat niet meer.", 31),
    ]);
    PostService::new(Arc::new(posts), Arc::new(users))
}

fn listing(sort: SortSpec) -> Listing {
    Listing::new(sort, PageRequest::new(0, 20).expect("non-zero size"))
}

fn ids(page: &Page<PostDetail>) -> Vec<u32> {
    page.content().iter().map(|p| p.id.get()).collect()
}

#[rstest]
#[tokio::test]
async fn newest_posts_come_first(service: PostService) {
    let page = service
        .list(None, &listing(SortSpec::by(SortOrder::desc("createdAt"))))
        .await
        .expect("listing");
    assert_eq!(ids(&page), [3, 2, 1]);
}

#[rstest]
#[case("amsterdam", vec![1])]
#[case("PVV", vec![2])]
#[case("bericht", vec![3])]
#[tokio::test]
async fn search_matches_title_or_content(
    service: PostService,
    #[case] raw: &str,
    #[case] expected: Vec<u32>,
) {
    let query = SearchQuery::parse(Some(raw)).expect("short query").expect("non-blank");
    let page = service
        .list(Some(&query), &listing(SortSpec::unsorted()))
        .await
        .expect("listing");
    assert_eq!(ids(&page), expected);
}

#[rstest]
#[tokio::test]
async fn post_listings_reject_unknown_fields(service: PostService) {
    let err = service
        .list(None, &listing(SortSpec::by(SortOrder::asc("unknownField"))))
        .await
        .expect_err("not whitelisted");
    assert_eq!(err.kind(), ErrorKind::InvalidSortProperty);
    assert_eq!(err.to_string(), "Invalid sort property: unknownField");
}

#[rstest]
#[tokio::test]
async fn author_names_are_joined(service: PostService) {
    assert_eq!(
        service.get(PostId::new(2)).await.expect("present").author_name,
        "stemmer02"
    );
    assert_eq!(
        service.get(PostId::new(3)).await.expect("present").author_name,
        "Unknown user"
    );
}

#[rstest]
#[tokio::test]
async fn missing_posts_are_not_found(service: PostService) {
    let err = service.get(PostId::new(3_000)).await.expect_err("absent");
    assert_eq!(err.to_string(), "Post not found with id: 3000");
}

#[rstest]
#[tokio::test]
async fn created_posts_get_the_next_id(service: PostService) {
    let before = Utc::now();
    let draft = NewPost::new(UserId::new(1), "Nieuw", "Eerste uitslagen binnen.").expect("valid");
    let created = service.create(draft).await.expect("author exists");
    assert_eq!(created.id, PostId::new(4));
    assert_eq!(created.author_name, "kiezer01");
    assert!(created.created_at >= before);
    assert_eq!(
        service.get(PostId::new(4)).await.expect("stored").title,
        "Nieuw"
    );
}

#[rstest]
#[tokio::test]
async fn posts_need_an_existing_author(service: PostService) {
    let draft = NewPost::new(UserId::new(42), "Titel", "Inhoud").expect("valid");
    let err = service.create(draft).await.expect_err("unknown author");
    assert_eq!(err.to_string(), "User not found with id: 42");
}
