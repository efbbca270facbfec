//! Criterion metadata adapters.

mod configured;

pub use configured::ConfiguredCriteriaReader;
