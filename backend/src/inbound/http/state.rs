//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ExampleDataCommand, FixtureExampleDataCommand, FixturePostsQuery, PostsQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Post feed use-case.
    pub posts: Arc<dyn PostsQuery>,
    /// Example data seeding use-case.
    pub example_data: Arc<dyn ExampleDataCommand>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use postfeed::domain::ports::{FixtureExampleDataCommand, FixturePostsQuery};
    /// use postfeed::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixturePostsQuery), Arc::new(FixtureExampleDataCommand));
    /// let _posts = state.posts.clone();
    /// ```
    pub fn new(posts: Arc<dyn PostsQuery>, example_data: Arc<dyn ExampleDataCommand>) -> Self {
        Self {
            posts,
            example_data,
        }
    }

    /// State backed by the fixture ports.
    pub fn fixtures() -> Self {
        Self::new(Arc::new(FixturePostsQuery), Arc::new(FixtureExampleDataCommand))
    }
}
