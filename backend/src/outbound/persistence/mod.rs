//! MongoDB persistence adapters.
//!
//! Concrete implementations of the driven ports backed by the official
//! `mongodb` driver.
//!
//! - **Thin adapters**: repositories translate between BSON documents and
//!   domain types. No business logic resides here.
//! - **Internal documents**: the BSON shapes in `documents.rs` never leave
//!   this module, and neither does the store's `_id`.
//! - **Strongly typed errors**: driver errors are classified once in
//!   `error_mapping.rs` and mapped to each port's error enum.
//!
//! # Example
//!
//! ```ignore
//! use postfeed::outbound::persistence::{MongoPostRepository, MongoStore, StoreConfig};
//!
//! let store = MongoStore::connect(&StoreConfig::new(uri, "postfeed")).await?;
//! let posts = MongoPostRepository::new(store.clone());
//! ```

mod documents;
mod error_mapping;
mod mongo_post_repository;
mod mongo_storage_indexes;
mod mongo_user_repository;
mod pipeline;
mod receipt;
mod store;

pub use mongo_post_repository::MongoPostRepository;
pub use mongo_storage_indexes::MongoStorageIndexes;
pub use mongo_user_repository::MongoUserRepository;
pub use store::{MongoStore, POSTS_COLLECTION, StoreConfig, StoreError, USERS_COLLECTION};
