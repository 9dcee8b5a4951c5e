//! Shared domain primitives for the Biztime service.
//!
//! Holds the types and error enum that both the database gateway and the
//! HTTP layer agree on. Nothing in here performs I/O.

pub mod error;
pub mod types;
