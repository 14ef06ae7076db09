//! Error types for the example-data crate.
//!
//! Plan validation and data generation fail in distinct ways, so each gets a
//! semantic `thiserror` enum.

use thiserror::Error;

/// Errors raised while parsing or validating a [`crate::SeedPlan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The plan JSON is malformed or missing required fields.
    #[error("invalid seed plan JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The plan declares no users, so no post can have authors.
    #[error("seed plan declares no users")]
    NoUsers,

    /// Two users share a username.
    #[error("seed plan declares username '{username}' more than once")]
    DuplicateUsername {
        /// The repeated username.
        username: String,
    },

    /// A user's username or email is blank.
    #[error("seed plan user at index {index} has a blank username or email")]
    BlankUserField {
        /// Index of the offending user.
        index: usize,
    },

    /// A batch does not start where the previous one ended.
    #[error("post batch {batch} starts at {actual}, expected {expected}")]
    NonContiguousBatch {
        /// Index of the offending batch.
        batch: usize,
        /// First post index the batch should have used.
        expected: usize,
        /// First post index the batch declares.
        actual: usize,
    },

    /// A batch ends before it starts.
    #[error("post batch {batch} ends at {last} before it starts at {first}")]
    InvertedBatch {
        /// Index of the offending batch.
        batch: usize,
        /// Declared first post index.
        first: usize,
        /// Declared last post index.
        last: usize,
    },

    /// A batch reaches past the largest supported post count.
    #[error("post batch {batch} ends at {last}, but plans hold at most {max} posts")]
    TooManyPosts {
        /// Index of the offending batch.
        batch: usize,
        /// Declared last post index.
        last: usize,
        /// Largest supported post count.
        max: usize,
    },

    /// A batch names no authors.
    #[error("post batch {batch} names no authors")]
    NoAuthors {
        /// Index of the offending batch.
        batch: usize,
    },

    /// A batch references a user index outside the plan.
    #[error("post batch {batch} references user {author}, but only {user_count} users exist")]
    AuthorOutOfRange {
        /// Index of the offending batch.
        batch: usize,
        /// The out-of-range user index.
        author: usize,
        /// Number of users in the plan.
        user_count: usize,
    },
}

/// Errors raised while generating seed data from a valid plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The RNG kept producing identifiers that were already in use.
    #[error("failed to generate a unique identifier after {max_attempts} attempts")]
    IdCollision {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}
