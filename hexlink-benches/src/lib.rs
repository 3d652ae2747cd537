//! Benchmark support crate for hexlink.
//!
//! Provides seeded graph and query fixtures and parameter types used by the
//! Criterion benchmarks comparing live searches with cached spanning-forest
//! queries.

pub mod error;
pub mod fixtures;
pub mod params;
