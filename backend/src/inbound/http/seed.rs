//! Example data seeding handler.
//!
//! ```text
//! GET /add -> { "result": { "users": InsertReceipt, "posts": InsertReceipt } }
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::SeedReceipt;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, SeedReceiptSchema};
use crate::inbound::http::state::HttpState;

/// Response envelope for `GET /add`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    /// Raw acknowledgements of the users and posts inserts.
    #[schema(value_type = SeedReceiptSchema)]
    pub result: SeedReceipt,
}

/// Insert 3 example users and 20,000 example posts.
///
/// A store that already holds the example users answers `409 conflict`
/// and is left unchanged.
#[utoipa::path(
    get,
    path = "/add",
    responses(
        (status = 200, description = "Insert acknowledgements", body = SeedResponse),
        (status = 409, description = "Example data already present", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    ),
    tags = ["seed"],
    operation_id = "seedExampleData"
)]
#[get("/add")]
pub async fn seed_example_data(state: web::Data<HttpState>) -> ApiResult<web::Json<SeedResponse>> {
    let result = state.example_data.seed().await?;
    Ok(web::Json(SeedResponse { result }))
}
