//! Driving port for reading posts with their authors.
//!
//! Inbound adapters depend on this port rather than on persistence. The
//! production implementation is [`crate::domain::PostsQueryService`]; tests
//! can use [`FixturePostsQuery`].

use async_trait::async_trait;

use crate::domain::{AuthoredPost, Error, PostId, PostLimit, User, UserId};

/// Use-case port for the post feed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsQuery: Send + Sync {
    /// Return up to `limit` posts, or [`PostLimit::DEFAULT`] when `None`.
    async fn list_posts(&self, limit: Option<PostLimit>) -> Result<Vec<AuthoredPost>, Error>;
}

/// Fixture query returning a single post with one author.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePostsQuery;

#[async_trait]
impl PostsQuery for FixturePostsQuery {
    async fn list_posts(&self, _limit: Option<PostLimit>) -> Result<Vec<AuthoredPost>, Error> {
        let author_id = UserId::new("fixtureU01")
            .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))?;
        let author = User::new(author_id, "user1", "user1@example.com")
            .map_err(|err| Error::internal(format!("invalid fixture user: {err}")))?;
        let id = PostId::new("fixtureP01")
            .map_err(|err| Error::internal(format!("invalid fixture post id: {err}")))?;
        Ok(vec![AuthoredPost {
            id,
            title: "Post 0".to_owned(),
            content: "Content of post 0".to_owned(),
            authors: vec![author],
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_returns_one_authored_post() {
        let posts = FixturePostsQuery
            .list_posts(None)
            .await
            .expect("fixture posts");
        assert_eq!(posts.len(), 1);
        let authors: Vec<&str> = posts
            .iter()
            .flat_map(|post| post.authors.iter().map(User::username))
            .collect();
        assert_eq!(authors, ["user1"]);
    }
}
