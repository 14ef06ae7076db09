//! BSON document shapes for the users and posts collections.
//!
//! These types are internal to the adapter. The store adds `_id` on insert;
//! none of the read shapes carry it.

use serde::{Deserialize, Serialize};

use crate::domain::{
    AuthoredPost, Post, PostId, PostValidationError, User, UserId, UserValidationError,
};

/// Stored user document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UserDocument {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_owned(),
            email: user.email().to_owned(),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = UserValidationError;

    fn try_from(doc: UserDocument) -> Result<Self, Self::Error> {
        Self::new(UserId::new(doc.id)?, doc.username, doc.email)
    }
}

/// Stored post document with author ids held by value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PostDocument {
    pub id: String,
    pub title: String,
    pub content: String,
    pub authors: Vec<String>,
}

impl From<&Post> for PostDocument {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            authors: post.authors.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Shape produced by the posts-with-authors pipeline.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AuthoredPostDocument {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub authors: Vec<UserDocument>,
}

/// A joined document that failed domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum DocumentError {
    #[error("stored post is invalid: {0}")]
    Post(#[from] PostValidationError),
    #[error("stored user is invalid: {0}")]
    User(#[from] UserValidationError),
}

impl TryFrom<AuthoredPostDocument> for AuthoredPost {
    type Error = DocumentError;

    fn try_from(doc: AuthoredPostDocument) -> Result<Self, Self::Error> {
        let authors = doc
            .authors
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: PostId::new(doc.id)?,
            title: doc.title,
            content: doc.content,
            authors,
        })
    }
}
