//! MongoDB-backed `PostRepository` adapter.
//!
//! Reads run the aggregation in [`super::pipeline`] so the join happens in
//! the database.

use async_trait::async_trait;
use futures_util::TryStreamExt;

use crate::domain::ports::{PostRepository, PostRepositoryError};
use crate::domain::{AuthoredPost, InsertReceipt, Post, PostLimit};

use super::documents::{AuthoredPostDocument, PostDocument};
use super::error_mapping::map_mongo_error;
use super::pipeline::posts_with_authors_pipeline;
use super::receipt::receipt_from_insert_many;
use super::store::MongoStore;

/// Reads and writes the `posts` collection.
#[derive(Clone, Debug)]
pub struct MongoPostRepository {
    store: MongoStore,
}

impl MongoPostRepository {
    /// Create a repository over `store`.
    pub fn new(store: MongoStore) -> Self {
        Self { store }
    }
}

fn map_error(err: &mongodb::error::Error) -> PostRepositoryError {
    map_mongo_error(
        err,
        PostRepositoryError::connection,
        PostRepositoryError::duplicate_key,
        PostRepositoryError::query,
    )
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn find_with_authors(
        &self,
        limit: PostLimit,
    ) -> Result<Vec<AuthoredPost>, PostRepositoryError> {
        let cursor = self
            .store
            .posts()
            .aggregate(posts_with_authors_pipeline(limit))
            .await
            .map_err(|err| map_error(&err))?;
        let documents: Vec<AuthoredPostDocument> = cursor
            .with_type::<AuthoredPostDocument>()
            .try_collect()
            .await
            .map_err(|err| map_error(&err))?;

        documents
            .into_iter()
            .map(|doc| {
                AuthoredPost::try_from(doc).map_err(|err| PostRepositoryError::query(err.to_string()))
            })
            .collect()
    }

    async fn insert_posts(&self, posts: &[Post]) -> Result<InsertReceipt, PostRepositoryError> {
        if posts.is_empty() {
            return Ok(InsertReceipt::acknowledged(Vec::new()));
        }
        let documents: Vec<PostDocument> = posts.iter().map(PostDocument::from).collect();
        let result = self
            .store
            .posts()
            .insert_many(documents)
            .await
            .map_err(|err| map_error(&err))?;
        Ok(receipt_from_insert_many(&result))
    }
}
