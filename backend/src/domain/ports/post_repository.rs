//! Driven port for post persistence, including the author join.

use async_trait::async_trait;

use crate::domain::{AuthoredPost, InsertReceipt, Post, PostLimit};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by post repository adapters.
    pub enum PostRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "post repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "post repository query failed: {message}",
        /// A unique index rejected an inserted post.
        DuplicateKey { message: String } => "post repository rejected duplicate key: {message}",
    }
}

/// Port for reading and writing posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch up to `limit` posts in natural store order with authors resolved.
    ///
    /// Adapters join each author id against the `id` field of the users
    /// collection. Unknown ids are dropped and the storage identity is never
    /// returned.
    async fn find_with_authors(
        &self,
        limit: PostLimit,
    ) -> Result<Vec<AuthoredPost>, PostRepositoryError>;

    /// Insert `posts` as one ordered bulk write.
    ///
    /// The first rejected record stops the write; records before it stay
    /// written.
    async fn insert_posts(&self, posts: &[Post]) -> Result<InsertReceipt, PostRepositoryError>;
}
