//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their shape and live in the inbound adapter where
//! framework concerns belong.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with stored data.
    #[schema(rename = "conflict")]
    Conflict,
    /// The document store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "example data already present")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Application-level identifier referenced from posts.
    #[schema(example = "a8Fk2LmQ0z")]
    id: String,
    /// Unique username.
    #[schema(example = "user1")]
    username: String,
    /// Contact address.
    #[schema(example = "user1@example.com")]
    email: String,
}

/// OpenAPI schema for [`crate::domain::AuthoredPost`].
#[derive(ToSchema)]
#[schema(as = AuthoredPost)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct AuthoredPostSchema {
    /// Application-level identifier.
    #[schema(example = "Qw3rTy7u8I")]
    id: String,
    /// Headline.
    #[schema(example = "Post 0")]
    title: String,
    /// Body text.
    #[schema(example = "Content of post 0")]
    content: String,
    /// Resolved authors; ids with no matching user are omitted.
    authors: Vec<UserSchema>,
}

/// OpenAPI schema for [`crate::domain::InsertReceipt`].
#[derive(ToSchema)]
#[schema(as = InsertReceipt, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct InsertReceiptSchema {
    /// Whether the store acknowledged the write.
    acknowledged: bool,
    /// Number of records written.
    inserted_count: u64,
    /// Storage identity keyed by input position.
    inserted_ids: BTreeMap<String, String>,
}

/// OpenAPI schema for [`crate::domain::SeedReceipt`].
#[derive(ToSchema)]
#[schema(as = SeedReceipt)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct SeedReceiptSchema {
    /// Users insert acknowledgement.
    users: InsertReceiptSchema,
    /// Posts insert acknowledgement.
    posts: InsertReceiptSchema,
}

#[cfg(test)]
mod tests {
    use utoipa::PartialSchema;

    use super::*;

    fn schema_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let json = schema_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "not_found",
            "conflict",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_camel_case_trace_id() {
        let json = schema_json::<ErrorSchema>();
        assert!(json.contains("traceId"));
        assert!(!json.contains("trace_id"));
    }

    #[test]
    fn insert_receipt_schema_uses_wire_names() {
        let json = schema_json::<InsertReceiptSchema>();
        assert!(json.contains("insertedCount"));
        assert!(json.contains("insertedIds"));
    }

    #[test]
    fn schema_names_drop_the_wrapper_suffix() {
        assert_eq!(AuthoredPostSchema::name(), "AuthoredPost");
        assert_eq!(SeedReceiptSchema::name(), "SeedReceipt");
    }
}
