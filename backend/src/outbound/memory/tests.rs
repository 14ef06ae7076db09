//! Behaviour of the in-memory store against the port contracts.

use rstest::{fixture, rstest};

use super::*;
use crate::domain::{PostId, UserId};

fn user(id: &str, username: &str) -> User {
    User::new(
        UserId::new(id).expect("valid id"),
        username,
        format!("{username}@example.com"),
    )
    .expect("valid user")
}

fn post(id: &str, authors: &[&str]) -> Post {
    Post {
        id: PostId::new(id).expect("valid id"),
        title: format!("title {id}"),
        content: format!("content {id}"),
        authors: authors
            .iter()
            .map(|author| UserId::new(*author).expect("valid id"))
            .collect(),
    }
}

#[fixture]
fn users() -> Vec<User> {
    vec![user("u1", "user1"), user("u2", "user2"), user("u3", "user3")]
}

fn usernames(post: &AuthoredPost) -> Vec<&str> {
    post.authors.iter().map(User::username).collect()
}

#[rstest]
#[tokio::test]
async fn join_omits_unknown_author_ids(users: Vec<User>) {
    let store = InMemoryStore::new();
    store.insert_users(&users).await.expect("users inserted");
    store
        .insert_posts(&[post("p1", &["u1", "ghost"])])
        .await
        .expect("posts inserted");

    let posts = store
        .find_with_authors(PostLimit::default())
        .await
        .expect("posts read");

    let first = posts.first().expect("one post");
    assert_eq!(usernames(first), ["user1"]);
}

#[rstest]
#[tokio::test]
async fn join_follows_user_order_and_deduplicates(users: Vec<User>) {
    let store = InMemoryStore::new();
    store.insert_users(&users).await.expect("users inserted");
    store
        .insert_posts(&[post("p1", &["u3", "u1", "u3"])])
        .await
        .expect("posts inserted");

    let posts = store
        .find_with_authors(PostLimit::default())
        .await
        .expect("posts read");

    let first = posts.first().expect("one post");
    assert_eq!(usernames(first), ["user1", "user3"]);
}

#[rstest]
#[tokio::test]
async fn limit_caps_result_in_insertion_order(users: Vec<User>) {
    let store = InMemoryStore::new();
    store.insert_users(&users).await.expect("users inserted");
    let posts: Vec<Post> = (0..5).map(|i| post(&format!("p{i}"), &["u1"])).collect();
    store.insert_posts(&posts).await.expect("posts inserted");

    let found = store
        .find_with_authors(PostLimit::new(3).expect("valid limit"))
        .await
        .expect("posts read");

    let ids: Vec<&str> = found.iter().map(|p| p.id.as_ref()).collect();
    assert_eq!(ids, ["p0", "p1", "p2"]);
}

#[rstest]
#[tokio::test]
async fn duplicates_are_accepted_before_indexes_exist(users: Vec<User>) {
    let store = InMemoryStore::new();
    store.insert_users(&users).await.expect("first insert");
    store.insert_users(&users).await.expect("second insert");
    assert_eq!(store.user_count(), 6);
}

#[rstest]
#[tokio::test]
async fn ensure_indexes_fails_over_existing_duplicates(users: Vec<User>) {
    let store = InMemoryStore::new();
    store.insert_users(&users).await.expect("first insert");
    store.insert_users(&users).await.expect("second insert");

    let result = store.ensure_indexes().await;
    assert!(matches!(result, Err(StorageIndexesError::Query { .. })));
}

#[rstest]
#[tokio::test]
async fn ordered_insert_stops_at_first_duplicate(users: Vec<User>) {
    let store = InMemoryStore::new();
    store.ensure_indexes().await.expect("indexes");
    let first = users.first().cloned().expect("user");
    store
        .insert_users(std::slice::from_ref(&first))
        .await
        .expect("first user inserted");

    let batch = vec![user("u9", "user9"), first, user("u8", "user8")];
    let err = store.insert_users(&batch).await.expect_err("duplicate rejected");

    assert!(matches!(err, UserRepositoryError::DuplicateKey { .. }));
    assert_eq!(store.user_count(), 2);
}

#[rstest]
#[tokio::test]
async fn duplicate_username_with_new_id_is_rejected_once_indexed() {
    let store = InMemoryStore::new();
    store.ensure_indexes().await.expect("indexes");
    store
        .insert_users(&[user("u1", "user1")])
        .await
        .expect("inserted");

    let err = store
        .insert_users(&[user("other", "user1")])
        .await
        .expect_err("username clash");

    assert!(err.to_string().contains("username: user1"));
}

#[rstest]
#[tokio::test]
async fn duplicate_post_ids_are_rejected_once_indexed() {
    let store = InMemoryStore::new();
    store.ensure_indexes().await.expect("indexes");
    let err = store
        .insert_posts(&[post("p1", &[]), post("p1", &[])])
        .await
        .expect_err("duplicate post id");

    assert!(matches!(err, PostRepositoryError::DuplicateKey { .. }));
    assert_eq!(store.post_count(), 1);
}

#[rstest]
#[tokio::test]
async fn receipts_carry_one_storage_id_per_record(users: Vec<User>) {
    let store = InMemoryStore::new();
    let receipt = store.insert_users(&users).await.expect("inserted");

    assert!(receipt.acknowledged);
    assert_eq!(receipt.inserted_count, 3);
    assert!(
        receipt
            .inserted_ids
            .values()
            .all(|id| id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit()))
    );
}
