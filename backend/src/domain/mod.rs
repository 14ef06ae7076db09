//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed entities and the use-cases the HTTP adapter
//! drives, without depending on actix-web or the storage driver.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`User`], [`Post`], [`AuthoredPost`], [`PostLimit`]: feed data.
//! - [`InsertReceipt`] / [`SeedReceipt`]: raw bulk insert acknowledgements.
//! - [`PostsQueryService`]: the post feed with authors joined in.
//! - [`ExampleDataSeeder`]: writes the synthetic users and posts.

pub mod error;
pub mod example_data;
pub mod insert_receipt;
pub mod ports;
pub mod post;
pub mod posts_query_service;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::example_data::{ExampleDataSeeder, ExampleDataSeedingError};
pub use self::insert_receipt::{InsertReceipt, SeedReceipt};
pub use self::post::{AuthoredPost, Post, PostId, PostLimit, PostLimitError, PostValidationError};
pub use self::posts_query_service::PostsQueryService;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError};

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
