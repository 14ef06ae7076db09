//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod posts;
pub mod schemas;
pub mod seed;
pub mod state;

pub use error::ApiResult;
