//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: MongoDB-backed repositories and index bootstrap
//! - **memory**: in-process store with the same semantics, used by tests and
//!   by `store = memory`
//!
//! Adapters are thin translators that convert between domain types and
//! storage representations. They contain no business logic.

pub mod memory;
pub mod persistence;
