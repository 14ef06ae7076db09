//! User identity as seen by readers of posts.
//!
//! Users are created in bulk by the example data seeder and never change
//! afterwards. Posts refer to them by [`UserId`] value only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`UserId::new`] and [`User::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier contained whitespace.
    #[error("user id must not contain whitespace")]
    WhitespaceInId,
    /// The username was blank.
    #[error("username must not be empty")]
    EmptyUsername,
    /// The email address has no `@` separator.
    #[error("email must contain '@'")]
    InvalidEmail,
}

/// Application-level user identifier.
///
/// This is the `id` field of a stored user, not the store's internal `_id`.
///
/// # Examples
/// ```
/// use postfeed::domain::UserId;
///
/// let id = UserId::new("a8Fk2LmQ0z").expect("valid id");
/// assert_eq!(id.as_ref(), "a8Fk2LmQ0z");
/// assert!(UserId::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(UserValidationError::WhitespaceInId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A stored user.
///
/// ## Invariants
/// - `username` is non-blank.
/// - `email` contains `@`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    username: String,
    email: String,
}

impl User {
    /// Build a validated user.
    ///
    /// # Examples
    /// ```
    /// use postfeed::domain::{User, UserId};
    ///
    /// let id = UserId::new("u1").expect("valid id");
    /// let user = User::new(id, "user1", "user1@example.com").expect("valid user");
    /// assert_eq!(user.username(), "user1");
    /// ```
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let username = username.into();
        let email = email.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if !email.contains('@') {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self {
            id,
            username,
            email,
        })
    }

    /// Stable identifier referenced from posts.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Unique login-style name.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Contact address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

#[derive(Serialize, Deserialize)]
struct UserDto {
    id: UserId,
    username: String,
    email: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            username: value.username,
            email: value.email,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        Self::new(value.id, value.username, value.email)
    }
}
