//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the feed, seed and health endpoints plus the schema
//! wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves it in
//! debug builds, and `cargo run --bin openapi-dump` prints it for tooling.

use utoipa::OpenApi;

use crate::inbound::http::posts::PostsResponse;
use crate::inbound::http::schemas::{
    AuthoredPostSchema, ErrorCodeSchema, ErrorSchema, InsertReceiptSchema, SeedReceiptSchema,
    UserSchema,
};
use crate::inbound::http::seed::SeedResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "postfeed API",
        description = "Seeds a document store with example users and posts and reads posts with their authors joined in."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::seed::seed_example_data,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PostsResponse,
        SeedResponse,
        AuthoredPostSchema,
        UserSchema,
        InsertReceiptSchema,
        SeedReceiptSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "posts", description = "Post feed with joined authors"),
        (name = "seed", description = "Example data seeding"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
