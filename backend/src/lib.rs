//! postfeed: seed a document store with example users and posts, then serve
//! posts with their authors joined in.
//!
//! The crate follows a hexagonal layout: [`domain`] holds entities, services
//! and ports; [`inbound`] adapts HTTP onto the driving ports; [`outbound`]
//! implements the driven ports for MongoDB and for an in-process store.

pub mod doc;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
