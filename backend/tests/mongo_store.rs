//! MongoDB adapter tests gated by `POSTFEED_TEST_MONGODB_URI`.
//!
//! Each test uses a fresh database named after the test and drops it
//! afterwards. Without the variable the tests print a skip marker and pass.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;
use std::time::Duration;

use rstest::rstest;

use postfeed::domain::ports::{
    PostRepository, PostRepositoryError, StorageIndexes, UserRepository, UserRepositoryError,
};
use postfeed::domain::{ExampleDataSeeder, Post, PostId, PostLimit, User, UserId};
use postfeed::outbound::persistence::{
    MongoPostRepository, MongoStorageIndexes, MongoStore, MongoUserRepository, StoreConfig,
    StoreError,
};

const URI_VAR: &str = "POSTFEED_TEST_MONGODB_URI";

async fn fresh_store(name: &str) -> Option<MongoStore> {
    let Ok(uri) = std::env::var(URI_VAR) else {
        eprintln!("SKIP-MONGODB: set {URI_VAR} to run {name}");
        return None;
    };
    let database = format!("postfeed_test_{name}");
    let config = StoreConfig::new(uri, database).with_server_selection_timeout(Duration::from_secs(5));
    let store = MongoStore::connect(&config).await.expect("MongoDB reachable");
    store.database().drop().await.expect("drop stale database");
    MongoStorageIndexes::new(store.clone())
        .ensure_indexes()
        .await
        .expect("indexes created");
    Some(store)
}

async fn drop_database(store: &MongoStore) {
    store.database().drop().await.expect("drop test database");
}

fn user(id: &str, username: &str) -> User {
    User::new(
        UserId::new(id).expect("valid id"),
        username,
        format!("{username}@example.com"),
    )
    .expect("valid user")
}

#[rstest]
#[tokio::test]
async fn unreachable_server_fails_the_ping() {
    let config = StoreConfig::new("mongodb://127.0.0.1:1/?directConnection=true", "unused")
        .with_server_selection_timeout(Duration::from_millis(200));
    let err = MongoStore::connect(&config).await.expect_err("nothing listens on port 1");
    assert!(matches!(err, StoreError::Ping { .. }));
}

#[rstest]
#[tokio::test]
async fn malformed_uri_is_a_configuration_error() {
    let config = StoreConfig::new("not-a-uri", "unused");
    let err = MongoStore::connect(&config).await.expect_err("rejected");
    assert!(matches!(err, StoreError::Configuration { .. }));
}

#[rstest]
#[tokio::test]
async fn store_targets_the_configured_database() {
    let Some(store) = fresh_store("target").await else {
        return;
    };
    let name = store.database().name().to_owned();
    drop_database(&store).await;
    assert_eq!(name, "postfeed_test_target");
}

#[rstest]
#[tokio::test]
async fn join_returns_authors_without_storage_ids() {
    let Some(store) = fresh_store("join").await else {
        return;
    };
    let users = MongoUserRepository::new(store.clone());
    let posts = MongoPostRepository::new(store.clone());
    users
        .insert_users(&[user("u1", "user1"), user("u2", "user2")])
        .await
        .expect("users inserted");
    posts
        .insert_posts(&[Post {
            id: PostId::new("p1").expect("valid id"),
            title: "t".to_owned(),
            content: "c".to_owned(),
            authors: vec![
                UserId::new("u2").expect("valid id"),
                UserId::new("ghost").expect("valid id"),
            ],
        }])
        .await
        .expect("post inserted");

    let found = posts
        .find_with_authors(PostLimit::default())
        .await
        .expect("posts read");
    drop_database(&store).await;

    let post = found.first().expect("one post");
    let ids: Vec<&str> = post.authors.iter().map(|u| u.id().as_ref()).collect();
    assert_eq!(ids, ["u2"]);
}

#[rstest]
#[tokio::test]
async fn unique_indexes_reject_duplicates() {
    let Some(store) = fresh_store("duplicates").await else {
        return;
    };
    let users = MongoUserRepository::new(store.clone());
    let posts = MongoPostRepository::new(store.clone());
    users
        .insert_users(&[user("u1", "user1")])
        .await
        .expect("first insert");

    let user_err = users
        .insert_users(&[user("u1", "user1")])
        .await
        .expect_err("duplicate user");
    let post = Post {
        id: PostId::new("p1").expect("valid id"),
        title: "t".to_owned(),
        content: "c".to_owned(),
        authors: Vec::new(),
    };
    let post_err = posts
        .insert_posts(&[post.clone(), post])
        .await
        .expect_err("duplicate post");
    drop_database(&store).await;

    assert!(matches!(user_err, UserRepositoryError::DuplicateKey { .. }));
    assert!(matches!(post_err, PostRepositoryError::DuplicateKey { .. }));
}

#[rstest]
#[tokio::test]
async fn standard_seed_inserts_every_record() {
    let Some(store) = fresh_store("seed").await else {
        return;
    };
    let seeder = ExampleDataSeeder::new(
        Arc::new(MongoUserRepository::new(store.clone())),
        Arc::new(MongoPostRepository::new(store.clone())),
    )
    .with_rng_seed(Some(3));

    let receipt = seeder.seed_records().await.expect("seeded");
    let feed = MongoPostRepository::new(store.clone())
        .find_with_authors(PostLimit::new(50).expect("valid limit"))
        .await
        .expect("feed read");
    drop_database(&store).await;

    assert_eq!(receipt.users.inserted_count, 3);
    assert_eq!(receipt.posts.inserted_count, 20_000);
    assert_eq!(receipt.posts.inserted_ids.len(), 20_000);
    assert_eq!(feed.len(), 50);
    assert!(feed.iter().all(|post| post.authors.len() == 2));
}
