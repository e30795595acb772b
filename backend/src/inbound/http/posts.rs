//! Community post endpoints.
//!
//! ```text
//! GET  /api/v1/posts?query=opkomst&sort=createdAt,desc
//! GET  /api/v1/posts/3
//! POST /api/v1/posts {"userId":1,"title":"Uitslag","content":"..."}
//! ```

use actix_web::{HttpResponse, get, post, web};
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewPost, PostDetail, PostId, SearchQuery, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::{ListQuery, POST_LISTING};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/v1/posts`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: UserId,
    pub title: String,
    pub content: String,
}

impl TryFrom<CreatePostRequest> for NewPost {
    type Error = crate::domain::ElectionError;

    fn try_from(value: CreatePostRequest) -> Result<Self, Self::Error> {
        Self::new(value.user_id, value.title, value.content)
    }
}

/// Posts, optionally filtered by a search query.
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(
        ("query" = Option<String>, Query, description = "Case-insensitive match on title or content, at most 200 characters"),
        ("page" = Option<usize>, Query, description = "Zero-based page index"),
        ("size" = Option<usize>, Query, description = "Page size, default 20"),
        ("sort" = Option<Vec<String>>, Query, description = "`property[,asc|desc]`, default `createdAt,desc`")
    ),
    responses(
        (status = 200, description = "Posts", body = Page<PostDetail>),
        (status = 400, description = "Invalid search, sort or page", body = String)
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
#[get("/posts")]
pub async fn list_posts(
    state: web::Data<HttpState>,
    query: ListQuery,
) -> ApiResult<web::Json<Page<PostDetail>>> {
    let search = SearchQuery::parse(query.first("query"))?;
    let listing = query.listing(POST_LISTING)?;
    Ok(web::Json(state.posts.list(search.as_ref(), &listing).await?))
}

/// One post.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = u32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post", body = PostDetail),
        (status = 404, description = "Unknown post", body = String)
    ),
    tags = ["posts"],
    operation_id = "getPost"
)]
#[get("/posts/{id}")]
pub async fn get_post(
    state: web::Data<HttpState>,
    path: web::Path<PostId>,
) -> ApiResult<web::Json<PostDetail>> {
    Ok(web::Json(state.posts.get(path.into_inner()).await?))
}

/// Publish a post.
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Created post", body = PostDetail),
        (status = 400, description = "Blank title or content", body = String),
        (status = 404, description = "Unknown author", body = String)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePostRequest>,
) -> ApiResult<HttpResponse> {
    let draft = NewPost::try_from(payload.into_inner())?;
    let created = state.posts.create(draft).await?;
    Ok(HttpResponse::Created().json(created))
}
