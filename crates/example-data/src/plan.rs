//! Seed plan types and JSON parsing.
//!
//! A plan lists the users to create and the post batches that reference
//! them. Batches cover contiguous post index ranges starting at zero, and each
//! batch assigns the same ordered author list to every post it covers.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::PlanError;

/// A user declared by a seed plan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSpec {
    username: String,
    email: String,
}

impl UserSpec {
    /// Create a user specification.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Username to store for the user.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Email address to store for the user.
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// A contiguous, inclusive range of post indexes sharing one author list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBatch {
    first: usize,
    last: usize,
    authors: Vec<usize>,
}

impl PostBatch {
    /// Create a batch covering `first..=last`, authored by the users at the
    /// given plan indexes.
    pub fn new(first: usize, last: usize, authors: impl Into<Vec<usize>>) -> Self {
        Self {
            first,
            last,
            authors: authors.into(),
        }
    }

    /// First post index covered by the batch.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Last post index covered by the batch (inclusive).
    pub fn last(&self) -> usize {
        self.last
    }

    /// Plan indexes of the users authoring every post in the batch.
    pub fn authors(&self) -> &[usize] {
        &self.authors
    }

    /// Number of posts covered by the batch.
    pub fn len(&self) -> usize {
        self.last.saturating_sub(self.first).saturating_add(1)
    }

    /// Batches always cover at least one post once validated.
    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }
}

/// Validated description of the data to seed.
///
/// # Example
///
/// ```
/// use example_data::SeedPlan;
///
/// let plan = SeedPlan::from_json(r#"{
///     "users": [
///         {"username": "ada", "email": "ada@example.com"},
///         {"username": "grace", "email": "grace@example.com"}
///     ],
///     "batches": [{"first": 0, "last": 9, "authors": [0, 1]}]
/// }"#).expect("valid plan");
///
/// assert_eq!(plan.users().len(), 2);
/// assert_eq!(plan.post_count(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    users: Vec<UserSpec>,
    batches: Vec<PostBatch>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedPlan {
    users: Vec<UserSpec>,
    #[serde(default)]
    batches: Vec<PostBatch>,
}

/// Number of posts in the standard plan.
pub const STANDARD_POST_COUNT: usize = 20_000;

/// Largest number of posts a plan may describe.
pub const MAX_POST_COUNT: usize = 1_000_000;

impl SeedPlan {
    /// The plan served by the seeding endpoint.
    ///
    /// Three users; posts `0..=6999` are authored by `user1` and `user3`,
    /// `7000..=13999` by `user1` and `user2`, and `14000..=19999` by `user3`
    /// and `user2`.
    pub fn standard() -> Self {
        Self {
            users: vec![
                UserSpec::new("user1", "user1@example.com"),
                UserSpec::new("user2", "user2@example.com"),
                UserSpec::new("user3", "user3@example.com"),
            ],
            batches: vec![
                PostBatch::new(0, 6_999, [0, 2]),
                PostBatch::new(7_000, 13_999, [0, 1]),
                PostBatch::new(14_000, STANDARD_POST_COUNT - 1, [2, 1]),
            ],
        }
    }

    /// Build and validate a plan from parts.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError`] when the plan has no users, repeats a username,
    /// has blank user fields, declares batches that are not contiguous from
    /// zero or reference unknown users, or describes more than
    /// [`MAX_POST_COUNT`] posts.
    pub fn new(users: Vec<UserSpec>, batches: Vec<PostBatch>) -> Result<Self, PlanError> {
        let plan = Self { users, batches };
        plan.validate()?;
        Ok(plan)
    }

    /// Parse and validate a plan from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::ParseError`] for malformed JSON, otherwise the
    /// same errors as [`SeedPlan::new`].
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let raw: RawSeedPlan = serde_json::from_str(json).map_err(|e| PlanError::ParseError {
            message: e.to_string(),
        })?;
        Self::new(raw.users, raw.batches)
    }

    /// Users to create, in insertion order.
    pub fn users(&self) -> &[UserSpec] {
        &self.users
    }

    /// Post batches, in index order.
    pub fn batches(&self) -> &[PostBatch] {
        &self.batches
    }

    /// Total number of posts described by the plan.
    pub fn post_count(&self) -> usize {
        self.batches.iter().map(PostBatch::len).sum()
    }

    fn validate(&self) -> Result<(), PlanError> {
        if self.users.is_empty() {
            return Err(PlanError::NoUsers);
        }

        let mut usernames = HashSet::with_capacity(self.users.len());
        for (index, user) in self.users.iter().enumerate() {
            if user.username.trim().is_empty() || user.email.trim().is_empty() {
                return Err(PlanError::BlankUserField { index });
            }
            if !usernames.insert(user.username.as_str()) {
                return Err(PlanError::DuplicateUsername {
                    username: user.username.clone(),
                });
            }
        }

        let mut expected = 0;
        for (batch_index, batch) in self.batches.iter().enumerate() {
            if batch.first != expected {
                return Err(PlanError::NonContiguousBatch {
                    batch: batch_index,
                    expected,
                    actual: batch.first,
                });
            }
            if batch.is_empty() {
                return Err(PlanError::InvertedBatch {
                    batch: batch_index,
                    first: batch.first,
                    last: batch.last,
                });
            }
            if batch.authors.is_empty() {
                return Err(PlanError::NoAuthors { batch: batch_index });
            }
            if let Some(&author) = batch.authors.iter().find(|&&a| a >= self.users.len()) {
                return Err(PlanError::AuthorOutOfRange {
                    batch: batch_index,
                    author,
                    user_count: self.users.len(),
                });
            }
            expected = batch
                .last
                .checked_add(1)
                .filter(|&count| count <= MAX_POST_COUNT)
                .ok_or(PlanError::TooManyPosts {
                    batch: batch_index,
                    last: batch.last,
                    max: MAX_POST_COUNT,
                })?;
        }

        Ok(())
    }
}
