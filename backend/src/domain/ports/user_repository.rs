//! Driven port for user persistence.
use async_trait::async_trait;

use crate::domain::{InsertReceipt, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A unique index rejected an inserted user.
        DuplicateKey { message: String } => "user repository rejected duplicate key: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert `users` as one ordered bulk write.
    async fn insert_users(&self, users: &[User]) -> Result<InsertReceipt, UserRepositoryError>;
}
