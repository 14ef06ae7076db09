//! Driven port for creating the store's unique indexes.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while creating indexes.
    pub enum StorageIndexesError {
        /// The store could not be reached.
        Connection { message: String } => "index bootstrap connection failed: {message}",
        /// The store rejected an index definition.
        Query { message: String } => "index bootstrap failed: {message}",
    }
}

/// Port for the index bootstrap run before the server accepts traffic.
///
/// Implementations create unique indexes on `users.id`, `users.username`
/// and `posts.id`. Calling it again is a no-op once the indexes exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageIndexes: Send + Sync {
    /// Create any missing indexes.
    async fn ensure_indexes(&self) -> Result<(), StorageIndexesError>;
}
