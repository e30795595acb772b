//! Community posts and their search input.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::macros::define_numeric_id;
use super::ports::{Entity, SequencedEntity};
use super::{ElectionError, SortWhitelist, UserId};

/// Longest accepted search query, in characters.
pub const MAX_SEARCH_QUERY_CHARS: usize = 200;

define_numeric_id!(
    /// Post identifier, assigned on insert.
    PostId
);

/// A stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Post {
    type Id = PostId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl SequencedEntity for Post {
    fn next_id(last: Option<Self::Id>) -> Self::Id {
        PostId::new(last.map_or(1, |id| id.get().saturating_add(1)))
    }
}

/// Validated input for a new post.
///
/// ## Invariants
/// - `title` and `content` contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    user_id: UserId,
    title: String,
    content: String,
}

impl NewPost {
    /// Validate a draft.
    ///
    /// # Errors
    /// Returns [`ElectionError::InvalidPost`] when the title or content is
    /// blank.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{NewPost, UserId};
    ///
    /// let err = NewPost::new(UserId::new(1), " ", "body").expect_err("blank title");
    /// assert_eq!(err.to_string(), "Title cannot be empty.");
    /// ```
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ElectionError> {
        let title = title.into();
        let content = content.into();
        if title.trim().is_empty() {
            return Err(ElectionError::invalid_post("Title cannot be empty."));
        }
        if content.trim().is_empty() {
            return Err(ElectionError::invalid_post("Content cannot be empty."));
        }
        Ok(Self {
            user_id,
            title,
            content,
        })
    }

    /// Author of the draft.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Stamp the draft with its id and creation time.
    #[must_use]
    pub fn into_post(self, id: PostId, created_at: DateTime<Utc>) -> Post {
        Post {
            id,
            user_id: self.user_id,
            title: self.title,
            content: self.content,
            created_at,
        }
    }
}

/// Case-insensitive free-text filter over post titles and contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Validate raw query input; blank input means "no filter".
    ///
    /// # Errors
    /// Returns [`ElectionError::InvalidSearchQuery`] when the input exceeds
    /// [`MAX_SEARCH_QUERY_CHARS`].
    pub fn parse(raw: Option<&str>) -> Result<Option<Self>, ElectionError> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        if raw.chars().count() > MAX_SEARCH_QUERY_CHARS {
            return Err(ElectionError::invalid_search_query(format!(
                "Maximum length of {MAX_SEARCH_QUERY_CHARS} characters exceeded."
            )));
        }
        let needle = raw.trim();
        if needle.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            needle: needle.to_lowercase(),
        }))
    }

    /// Whether `post` mentions the query in its title or content.
    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        post.title.to_lowercase().contains(&self.needle)
            || post.content.to_lowercase().contains(&self.needle)
    }
}

/// A post joined with its author's name, the shape of post listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: PostId,
    pub user_id: UserId,
    pub author_name: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl PostDetail {
    /// Attach `author_name` to `post`.
    pub fn new(post: Post, author_name: impl Into<String>) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            author_name: author_name.into(),
            title: post.title,
            content: post.content,
            created_at: post.created_at,
        }
    }
}

fn by_title(a: &PostDetail, b: &PostDetail) -> std::cmp::Ordering {
    a.title.cmp(&b.title)
}

// `name` is accepted as an alias of `title`.
static POST_SORTS: LazyLock<SortWhitelist<PostDetail>> = LazyLock::new(|| {
    SortWhitelist::new()
        .by_key("id", |p: &PostDetail| p.id)
        .with("title", by_title)
        .with("name", by_title)
        .by_key("createdAt", |p: &PostDetail| p.created_at)
});

/// Sortable properties of post listings.
#[must_use]
pub fn post_sorts() -> &'static SortWhitelist<PostDetail> {
    &POST_SORTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortOrder, SortSpec};
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn post() -> Post {
        Post {
            id: PostId::new(1),
            user_id: UserId::new(2),
            title: "Opkomst in Utrecht".to_owned(),
            content: "De opkomst was hoger dan verwacht.".to_owned(),
            created_at: Utc
                .with_ymd_and_hms(2025, 10, 30, 21, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[rstest]
    #[case("", "body", "Title cannot be empty.")]
    #[case("title", "   ", "Content cannot be empty.")]
    fn blank_fields_are_rejected(
        #[case] title: &str,
        #[case] content: &str,
        #[case] message: &str,
    ) {
        let err = NewPost::new(UserId::new(1), title, content).expect_err("invalid");
        assert_eq!(err, ElectionError::invalid_post(message));
    }

    #[rstest]
    fn accepted_drafts_keep_their_text() {
        let draft = NewPost::new(UserId::new(1), "Titel", "Inhoud").expect("valid");
        let post = draft.into_post(PostId::new(9), Utc::now());
        assert_eq!(post.title, "Titel");
        assert_eq!(post.content, "Inhoud");
        assert_eq!(post.id, PostId::new(9));
    }

    #[rstest]
    fn ids_follow_the_highest_assigned() {
        assert_eq!(Post::next_id(None), PostId::new(1));
        assert_eq!(Post::next_id(Some(PostId::new(4))), PostId::new(5));
    }

    #[rstest]
    fn search_query_of_exactly_the_limit_is_accepted() {
        let raw = "a".repeat(MAX_SEARCH_QUERY_CHARS);
        assert!(SearchQuery::parse(Some(&raw)).is_ok());
    }

    #[rstest]
    fn overlong_search_query_is_rejected() {
        let raw = "a".repeat(MAX_SEARCH_QUERY_CHARS + 1);
        let err = SearchQuery::parse(Some(&raw)).expect_err("too long");
        assert_eq!(
            err.to_string(),
            "Invalid search query: Maximum length of 200 characters exceeded."
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some("   "))]
    fn blank_search_means_no_filter(#[case] raw: Option<&str>) {
        assert_eq!(SearchQuery::parse(raw), Ok(None));
    }

    #[rstest]
    #[case("UTRECHT", true)]
    #[case("verwacht", true)]
    #[case("Amsterdam", false)]
    fn search_matches_title_or_content(post: Post, #[case] raw: &str, #[case] expected: bool) {
        let query = SearchQuery::parse(Some(raw))
            .expect("valid")
            .expect("non-blank");
        assert_eq!(query.matches(&post), expected);
    }

    #[rstest]
    fn post_whitelist_rejects_unknown_fields(post: Post) {
        let details = vec![PostDetail::new(post, "kiezer")];
        let spec = SortSpec::by(SortOrder::asc("unknownField"));
        let err = post_sorts().order(details, &spec).expect_err("unknown");
        assert_eq!(err, ElectionError::invalid_sort_property("unknownField"));
    }

    #[rstest]
    fn name_sorts_posts_like_title(post: Post) {
        let titled = |id: u32, title: &str| {
            let mut draft = post.clone();
            draft.id = PostId::new(id);
            draft.title = title.to_owned();
            PostDetail::new(draft, "kiezer")
        };
        let details = vec![titled(1, "Zetels"), titled(2, "Opkomst"), titled(3, "Kabinet")];
        let ids = |spec: SortSpec| -> Vec<u32> {
            post_sorts()
                .order(details.clone(), &spec)
                .expect("known key")
                .iter()
                .map(|p| p.id.get())
                .collect()
        };
        assert_eq!(ids(SortSpec::by(SortOrder::asc("name"))), [3, 2, 1]);
        assert_eq!(
            ids(SortSpec::by(SortOrder::desc("name"))),
            ids(SortSpec::by(SortOrder::desc("title")))
        );
    }
}
