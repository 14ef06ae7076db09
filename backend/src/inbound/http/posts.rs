//! Post feed handler.
//!
//! ```text
//! GET /            -> { "data": [AuthoredPost; 50] }
//! GET /?limit=10   -> { "data": [AuthoredPost; 10] }
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{AuthoredPost, Error, PostLimit};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AuthoredPostSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Limit used by `GET /` when the caller supplies none.
pub const ROUTE_DEFAULT_LIMIT: u32 = 50;

/// Query string for `GET /`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostsQueryParams {
    /// Maximum number of posts to return (1 to 1000).
    #[param(minimum = 1, maximum = 1000, example = 50)]
    pub limit: Option<u32>,
}

/// Response envelope for `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostsResponse {
    /// Posts with authors resolved.
    #[schema(value_type = Vec<AuthoredPostSchema>)]
    pub data: Vec<AuthoredPost>,
}

fn route_limit(params: &PostsQueryParams) -> Result<PostLimit, Error> {
    PostLimit::new(params.limit.unwrap_or(ROUTE_DEFAULT_LIMIT)).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": "limit",
            "min": err.min,
            "max": err.max,
        }))
    })
}

/// List posts with their authors joined in.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use postfeed::inbound::http::posts::list_posts;
///
/// let app = App::new().service(list_posts);
/// ```
#[utoipa::path(
    get,
    path = "/",
    params(PostsQueryParams),
    responses(
        (status = 200, description = "Posts with authors", body = PostsResponse),
        (status = 400, description = "Invalid limit", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
#[get("/")]
pub async fn list_posts(
    state: web::Data<HttpState>,
    query: web::Query<PostsQueryParams>,
) -> ApiResult<web::Json<PostsResponse>> {
    let limit = route_limit(&query)?;
    let data = state.posts.list_posts(Some(limit)).await?;
    Ok(web::Json(PostsResponse { data }))
}
