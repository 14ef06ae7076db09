//! Posts and the query limit used to fetch them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::{User, UserId};

/// Validation errors for post identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostValidationError {
    /// The identifier was empty.
    #[error("post id must not be empty")]
    EmptyId,
    /// The identifier contained whitespace.
    #[error("post id must not contain whitespace")]
    WhitespaceInId,
}

/// Application-level post identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostId(String);

impl PostId {
    /// Validate and construct a [`PostId`].
    pub fn new(id: impl Into<String>) -> Result<Self, PostValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(PostValidationError::EmptyId);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(PostValidationError::WhitespaceInId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for PostId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostId> for String {
    fn from(value: PostId) -> Self {
        value.0
    }
}

impl TryFrom<String> for PostId {
    type Error = PostValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A post as written to the store, with authors held by reference.
///
/// Author ids are not checked against the users collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier.
    pub id: PostId,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Author references in authoring order.
    pub authors: Vec<UserId>,
}

/// A post returned by the query service, with authors resolved to users.
///
/// Authors whose id matched no stored user are absent. Resolved authors
/// follow the users collection's order, and a user referenced twice by the
/// same post appears once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoredPost {
    /// Stable identifier.
    pub id: PostId,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Resolved author records.
    pub authors: Vec<User>,
}

/// Errors raised when building a [`PostLimit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("limit must be between {min} and {max}, got {value}")]
pub struct PostLimitError {
    /// Smallest accepted value.
    pub min: u32,
    /// Largest accepted value.
    pub max: u32,
    /// Rejected input.
    pub value: u32,
}

/// Maximum number of posts a single query may return.
///
/// # Examples
/// ```
/// use postfeed::domain::PostLimit;
///
/// assert_eq!(PostLimit::default().get(), 40);
/// assert_eq!(PostLimit::new(50).expect("in range").get(), 50);
/// assert!(PostLimit::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostLimit(u32);

impl PostLimit {
    /// Smallest accepted limit.
    pub const MIN: u32 = 1;
    /// Largest accepted limit.
    pub const MAX: u32 = 1_000;
    /// Limit applied when a caller supplies none.
    pub const DEFAULT: u32 = 40;

    /// Validate and construct a limit.
    pub fn new(value: u32) -> Result<Self, PostLimitError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PostLimitError {
                min: Self::MIN,
                max: Self::MAX,
                value,
            })
        }
    }

    /// The limit as a count.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PostLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
