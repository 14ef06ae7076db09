//! Aggregation pipeline for the post feed.

use mongodb::bson::{Document, doc};

use crate::domain::PostLimit;

use super::store::USERS_COLLECTION;

/// Build the `$limit` / `$lookup` / `$project` pipeline run against posts.
///
/// The limit comes first so the join only touches the returned posts.
/// `$lookup` on an array `localField` yields matching users in users
/// collection order, each at most once, and drops ids with no match.
pub(crate) fn posts_with_authors_pipeline(limit: PostLimit) -> Vec<Document> {
    vec![
        doc! { "$limit": i64::from(limit.get()) },
        doc! {
            "$lookup": {
                "from": USERS_COLLECTION,
                "localField": "authors",
                "foreignField": "id",
                "as": "authors",
            }
        },
        doc! {
            "$project": {
                "_id": 0,
                "id": 1,
                "title": 1,
                "content": 1,
                "authors.id": 1,
                "authors.username": 1,
                "authors.email": 1,
            }
        },
    ]
}
