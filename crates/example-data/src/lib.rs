//! Synthetic users and posts for seeding the postfeed document store.
//!
//! This crate is independent of backend domain types to avoid circular
//! dependencies. It provides:
//!
//! - [`SeedPlan`]: which users to create and which users author which posts
//! - [`generate_seed_data`]: reproducible record generation from a plan and an
//!   RNG seed
//! - short alphanumeric identifiers ([`generate_id`], [`is_valid_id`])
//!
//! # Example
//!
//! ```
//! use example_data::{SeedPlan, generate_seed_data, is_valid_id};
//!
//! let data = generate_seed_data(&SeedPlan::standard(), 7).expect("generation succeeds");
//!
//! assert!(data.users.iter().all(|user| is_valid_id(&user.id)));
//! assert!(data.posts.iter().all(|post| post.authors.len() == 2));
//! ```

mod error;
mod generator;
mod id;
mod plan;
mod seed;

pub use error::{GenerationError, PlanError};
pub use generator::{fresh_rng_seed, generate_seed_data};
pub use id::{ID_ALPHABET, ID_LENGTH, generate_id, is_valid_id};
pub use plan::{MAX_POST_COUNT, PostBatch, STANDARD_POST_COUNT, SeedPlan, UserSpec};
pub use seed::{PostSeed, SeedData, UserSeed};
