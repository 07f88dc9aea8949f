use axum::{
    Extension,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use tracing::debug;

use back2me_store::PostFilter;
use back2me_types::api::{
    CreatePostResponse, PostResponse, PostSummary, PostsQuery, PostsResponse, SearchQuery,
};
use back2me_types::models::{NewPost, PostId, PostStatus, SessionClaim};

use crate::auth::AppState;
use crate::codec::extract_field;
use crate::reply::ApiReply;

/// `GET /api/posts?status=&item_name=&location=`
pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<PostsQuery>, QueryRejection>,
) -> Result<ApiReply, ApiReply> {
    let Query(query) = query.map_err(bad_query)?;
    let filter = PostFilter {
        status: query.status,
        item_name: query.item_name,
        location: query.location,
    };
    let posts = state.store.filter_posts(&filter)?;

    Ok(ApiReply::ok(&PostsResponse {
        posts: posts.iter().map(PostSummary::from).collect(),
    }))
}

/// `GET /api/posts/search?q=`
pub async fn search_posts(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<ApiReply, ApiReply> {
    let Query(query) = query.map_err(bad_query)?;
    let posts = state.store.search_posts(&query.q)?;

    Ok(ApiReply::ok(&PostsResponse {
        posts: posts.iter().map(PostSummary::from).collect(),
    }))
}

pub async fn get_post(
    State(state): State<AppState>,
    post_id: Result<Path<PostId>, PathRejection>,
) -> Result<ApiReply, ApiReply> {
    let Path(post_id) = post_id.map_err(|e| {
        debug!("Bad post id: {}", e);
        ApiReply::fail("Post not found")
    })?;
    let post = state
        .store
        .get_post(post_id)?
        .ok_or_else(|| ApiReply::fail("Post not found"))?;

    Ok(ApiReply::ok(&PostResponse { post }))
}

/// Create a post owned by the session's account.
pub async fn create_post(
    State(state): State<AppState>,
    Extension(claim): Extension<SessionClaim>,
    body: String,
) -> Result<ApiReply, ApiReply> {
    let status: PostStatus = extract_field(&body, "status")
        .parse()
        .map_err(|_| ApiReply::fail("Status must be 'lost' or 'found'"))?;

    let image_url = Some(extract_field(&body, "image_url")).filter(|url| !url.is_empty());

    let post = state.store.create_post(
        claim.user_id,
        NewPost {
            status,
            item_name: extract_field(&body, "item_name"),
            location: extract_field(&body, "location"),
            place: extract_field(&body, "place"),
            description: extract_field(&body, "description"),
            image_url,
        },
    )?;

    Ok(ApiReply::ok(&CreatePostResponse {
        post_id: post.id,
        post,
    }))
}

fn bad_query(rejection: QueryRejection) -> ApiReply {
    debug!("Rejected query string: {}", rejection);
    ApiReply::fail("Invalid query parameters")
}
