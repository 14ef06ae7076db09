//! In-process document store.
//!
//! Mirrors the MongoDB adapters closely enough for HTTP and service tests:
//!
//! - bulk inserts are ordered and stop at the first rejected record, keeping
//!   the records written before it
//! - unique indexes are enforced only after [`StorageIndexes::ensure_indexes`]
//! - the author join returns users in insertion order, once each, and drops
//!   ids with no matching user
//!
//! Each record is assigned a 24-hex-digit storage id, as the real store would.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::ports::{
    PostRepository, PostRepositoryError, StorageIndexes, StorageIndexesError, UserRepository,
    UserRepositoryError,
};
use crate::domain::{AuthoredPost, InsertReceipt, Post, PostLimit, User};

#[derive(Debug, Default)]
struct MemoryState {
    users: Vec<User>,
    posts: Vec<Post>,
    indexed: bool,
}

/// Shared in-memory store implementing every driven port.
///
/// Clones share the same collections.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

fn storage_id() -> String {
    ObjectId::new().to_hex()
}

impl InMemoryStore {
    /// Create an empty store without indexes.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, String> {
        self.state
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.lock().map_or(0, |state| state.users.len())
    }

    /// Number of stored posts.
    pub fn post_count(&self) -> usize {
        self.lock().map_or(0, |state| state.posts.len())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert_users(&self, users: &[User]) -> Result<InsertReceipt, UserRepositoryError> {
        let mut state = self.lock().map_err(UserRepositoryError::query)?;
        let mut ids = Vec::with_capacity(users.len());
        for (index, user) in users.iter().enumerate() {
            if state.indexed {
                let clash = state
                    .users
                    .iter()
                    .find(|existing| existing.id() == user.id() || existing.username() == user.username());
                if let Some(existing) = clash {
                    let key = if existing.id() == user.id() {
                        format!("id: {}", user.id())
                    } else {
                        format!("username: {}", user.username())
                    };
                    return Err(UserRepositoryError::duplicate_key(format!(
                        "E11000 duplicate key error at index {index}, collection users, key {{ {key} }}"
                    )));
                }
            }
            state.users.push(user.clone());
            ids.push(storage_id());
        }
        Ok(InsertReceipt::acknowledged(ids))
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_with_authors(
        &self,
        limit: PostLimit,
    ) -> Result<Vec<AuthoredPost>, PostRepositoryError> {
        let state = self.lock().map_err(PostRepositoryError::query)?;
        let limit = usize::try_from(limit.get()).unwrap_or(usize::MAX);
        let posts = state
            .posts
            .iter()
            .take(limit)
            .map(|post| {
                let wanted: HashSet<_> = post.authors.iter().collect();
                AuthoredPost {
                    id: post.id.clone(),
                    title: post.title.clone(),
                    content: post.content.clone(),
                    authors: state
                        .users
                        .iter()
                        .filter(|user| wanted.contains(user.id()))
                        .cloned()
                        .collect(),
                }
            })
            .collect();
        Ok(posts)
    }

    async fn insert_posts(&self, posts: &[Post]) -> Result<InsertReceipt, PostRepositoryError> {
        let mut state = self.lock().map_err(PostRepositoryError::query)?;
        let mut ids = Vec::with_capacity(posts.len());
        for (index, post) in posts.iter().enumerate() {
            if state.indexed && state.posts.iter().any(|existing| existing.id == post.id) {
                return Err(PostRepositoryError::duplicate_key(format!(
                    "E11000 duplicate key error at index {index}, collection posts, key {{ id: {} }}",
                    post.id
                )));
            }
            state.posts.push(post.clone());
            ids.push(storage_id());
        }
        Ok(InsertReceipt::acknowledged(ids))
    }
}

#[async_trait]
impl StorageIndexes for InMemoryStore {
    async fn ensure_indexes(&self) -> Result<(), StorageIndexesError> {
        let mut state = self.lock().map_err(StorageIndexesError::query)?;
        let mut user_ids = HashSet::new();
        let mut usernames = HashSet::new();
        let users_unique = state
            .users
            .iter()
            .all(|user| user_ids.insert(user.id().clone()) && usernames.insert(user.username().to_owned()));
        let mut post_ids = HashSet::new();
        let posts_unique = state.posts.iter().all(|post| post_ids.insert(post.id.clone()));
        if !(users_unique && posts_unique) {
            return Err(StorageIndexesError::query(
                "E11000 duplicate key error while building unique index",
            ));
        }
        state.indexed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
