//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `ranking` - Pure outranking engine (matrix, preferences, flows, ranking)

pub mod foundation;
pub mod ranking;
