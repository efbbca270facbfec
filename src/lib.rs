//! Outrank - Multi-criteria outranking engine
//!
//! This crate ranks a set of alternatives scored on several benefit/cost
//! criteria using a PROMETHEE-style pairwise preference method, and wires
//! the engine to its collaborators (alternative storage, criterion metadata,
//! ranking store) through ports and adapters.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
