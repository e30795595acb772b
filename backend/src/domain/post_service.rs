//! Post listings, lookups and creation.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use pagination::Page;
use tracing::info;

use super::ports::SequencedStore;
use super::{
    ElectionError, Listing, NewPost, Post, PostDetail, PostId, SearchQuery, User, UserId,
    post_sorts,
};

const UNKNOWN_AUTHOR_NAME: &str = "Unknown user";

/// Post queries and the create command.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn SequencedStore<Post>>,
    users: Arc<dyn SequencedStore<User>>,
}

impl PostService {
    /// Build the service over the post and user stores.
    pub fn new(posts: Arc<dyn SequencedStore<Post>>, users: Arc<dyn SequencedStore<User>>) -> Self {
        Self { posts, users }
    }

    async fn authors(&self) -> Result<BTreeMap<UserId, String>, ElectionError> {
        Ok(self
            .users
            .find_all()
            .await?
            .into_iter()
            .map(|user| (user.id, user.username))
            .collect())
    }

    /// Posts matching `query`, with author names, sorted and paged.
    ///
    /// # Errors
    /// [`ElectionError::InvalidSortProperty`] for unknown sort keys.
    pub async fn list(
        &self,
        query: Option<&SearchQuery>,
        listing: &Listing,
    ) -> Result<Page<PostDetail>, ElectionError> {
        let authors = self.authors().await?;
        let details = self
            .posts
            .find_all()
            .await?
            .into_iter()
            .filter(|post| query.is_none_or(|q| q.matches(post)))
            .map(|post| {
                let author = authors
                    .get(&post.user_id)
                    .map_or(UNKNOWN_AUTHOR_NAME, String::as_str);
                PostDetail::new(post, author)
            })
            .collect();
        listing.page_of(details, post_sorts())
    }

    /// One post with its author name.
    ///
    /// # Errors
    /// [`ElectionError::PostNotFound`] for an unknown id.
    pub async fn get(&self, id: PostId) -> Result<PostDetail, ElectionError> {
        let post = self
            .posts
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ElectionError::post_not_found(id))?;
        let author = self
            .users
            .find_by_id(&post.user_id)
            .await?
            .map_or_else(|| UNKNOWN_AUTHOR_NAME.to_owned(), |user| user.username);
        Ok(PostDetail::new(post, author))
    }

    /// Store a validated draft, stamped with the current time.
    ///
    /// # Errors
    /// [`ElectionError::UserNotFound`] when the author does not exist.
    pub async fn create(&self, draft: NewPost) -> Result<PostDetail, ElectionError> {
        let author_id = draft.user_id();
        let author = self
            .users
            .find_by_id(&author_id)
            .await?
            .ok_or_else(|| ElectionError::user_not_found(author_id))?;
        let post = self
            .posts
            .insert(Box::new(move |id| draft.into_post(id, Utc::now())))
            .await?;
        info!(post_id = post.id.get(), user_id = author_id.get(), "post created");
        Ok(PostDetail::new(post, author.username))
    }
}

#[cfg(test)]
#[path = "post_service_tests.rs"]
mod tests;
