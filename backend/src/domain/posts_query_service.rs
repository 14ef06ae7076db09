//! Post feed domain service.
//!
//! Implements [`PostsQuery`] on top of a [`PostRepository`]. Storage failures
//! are logged here and re-raised as domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{PostRepository, PostRepositoryError, PostsQuery};
use crate::domain::{AuthoredPost, Error, PostLimit};

/// Post feed service implementing the [`PostsQuery`] driving port.
#[derive(Clone)]
pub struct PostsQueryService<R> {
    repository: Arc<R>,
}

impl<R> PostsQueryService<R> {
    /// Create a new service reading from `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> PostsQueryService<R>
where
    R: PostRepository,
{
    fn map_repository_error(err: PostRepositoryError) -> Error {
        match err {
            PostRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("post repository unavailable: {message}"))
            }
            PostRepositoryError::Query { message } => {
                Error::internal(format!("post repository error: {message}"))
            }
            PostRepositoryError::DuplicateKey { message } => {
                Error::internal(format!("unexpected duplicate key while reading posts: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> PostsQuery for PostsQueryService<R>
where
    R: PostRepository,
{
    async fn list_posts(&self, limit: Option<PostLimit>) -> Result<Vec<AuthoredPost>, Error> {
        let limit = limit.unwrap_or_default();
        match self.repository.find_with_authors(limit).await {
            Ok(posts) => {
                debug!(limit = limit.get(), returned = posts.len(), "fetched posts");
                Ok(posts)
            }
            Err(err) => {
                error!(error = %err, limit = limit.get(), "failed to fetch posts");
                Err(Self::map_repository_error(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::MockPostRepository;
    use crate::domain::{ErrorCode, PostId, User, UserId};

    fn sample_post() -> AuthoredPost {
        let author = User::new(
            UserId::new("u1").expect("valid id"),
            "user1",
            "user1@example.com",
        )
        .expect("valid user");
        AuthoredPost {
            id: PostId::new("p1").expect("valid id"),
            title: "Post 0".to_owned(),
            content: "Content of post 0".to_owned(),
            authors: vec![author],
        }
    }

    #[rstest]
    #[tokio::test]
    async fn missing_limit_falls_back_to_default() {
        let mut repo = MockPostRepository::new();
        repo.expect_find_with_authors()
            .with(eq(PostLimit::default()))
            .times(1)
            .return_once(|_| Ok(vec![sample_post()]));

        let service = PostsQueryService::new(Arc::new(repo));
        let posts = service.list_posts(None).await.expect("posts returned");

        assert_eq!(posts, vec![sample_post()]);
    }

    #[rstest]
    #[tokio::test]
    async fn explicit_limit_is_forwarded() {
        let limit = PostLimit::new(50).expect("valid limit");
        let mut repo = MockPostRepository::new();
        repo.expect_find_with_authors()
            .with(eq(limit))
            .times(1)
            .return_once(|_| Ok(Vec::new()));

        let service = PostsQueryService::new(Arc::new(repo));
        let posts = service.list_posts(Some(limit)).await.expect("posts returned");

        assert!(posts.is_empty());
    }

    #[rstest]
    #[case(PostRepositoryError::connection("no primary"), ErrorCode::ServiceUnavailable)]
    #[case(PostRepositoryError::query("bad pipeline"), ErrorCode::InternalError)]
    #[case(PostRepositoryError::duplicate_key("E11000"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn repository_errors_are_re_raised(
        #[case] failure: PostRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockPostRepository::new();
        repo.expect_find_with_authors()
            .times(1)
            .return_once(move |_| Err(failure));

        let service = PostsQueryService::new(Arc::new(repo));
        let err = service.list_posts(None).await.expect_err("error propagates");

        assert_eq!(err.code(), expected);
    }
}
