//! Seed record types produced by the generator.
//!
//! These types are intentionally independent of backend domain types. The
//! backend converts them into validated domain entities before persisting.

/// A generated user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSeed {
    /// Generated identifier.
    pub id: String,
    /// Username copied from the plan.
    pub username: String,
    /// Email copied from the plan.
    pub email: String,
}

/// A generated post record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSeed {
    /// Generated identifier.
    pub id: String,
    /// Title derived from the post index.
    pub title: String,
    /// Body derived from the post index.
    pub content: String,
    /// Author identifiers, in plan order.
    pub authors: Vec<String>,
}

/// All records generated for one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    /// RNG seed the identifiers were drawn with.
    pub rng_seed: u64,
    /// Users in plan order.
    pub users: Vec<UserSeed>,
    /// Posts in index order.
    pub posts: Vec<PostSeed>,
}
