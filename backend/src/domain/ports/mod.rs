//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`PostsQuery`], [`ExampleDataCommand`]) are called by
//! inbound adapters. Driven ports ([`PostRepository`], [`UserRepository`],
//! [`StorageIndexes`]) are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod example_data_command;
mod post_repository;
mod posts_query;
mod storage_indexes;
mod user_repository;

#[cfg(test)]
pub use example_data_command::MockExampleDataCommand;
pub use example_data_command::{ExampleDataCommand, FixtureExampleDataCommand};
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::{PostRepository, PostRepositoryError};
#[cfg(test)]
pub use posts_query::MockPostsQuery;
pub use posts_query::{FixturePostsQuery, PostsQuery};
#[cfg(test)]
pub use storage_indexes::MockStorageIndexes;
pub use storage_indexes::{StorageIndexes, StorageIndexesError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
