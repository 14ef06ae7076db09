//! MongoDB-backed `UserRepository` adapter.

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{InsertReceipt, User};

use super::documents::UserDocument;
use super::error_mapping::map_mongo_error;
use super::receipt::receipt_from_insert_many;
use super::store::MongoStore;

/// Writes users into the `users` collection.
#[derive(Clone, Debug)]
pub struct MongoUserRepository {
    store: MongoStore,
}

impl MongoUserRepository {
    /// Create a repository over `store`.
    pub fn new(store: MongoStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert_users(&self, users: &[User]) -> Result<InsertReceipt, UserRepositoryError> {
        if users.is_empty() {
            return Ok(InsertReceipt::acknowledged(Vec::new()));
        }
        let documents: Vec<UserDocument> = users.iter().map(UserDocument::from).collect();
        let result = self
            .store
            .users()
            .insert_many(documents)
            .await
            .map_err(|err| {
                map_mongo_error(
                    &err,
                    UserRepositoryError::connection,
                    UserRepositoryError::duplicate_key,
                    UserRepositoryError::query,
                )
            })?;
        Ok(receipt_from_insert_many(&result))
    }
}
