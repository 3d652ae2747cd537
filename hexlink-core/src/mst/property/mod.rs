//! Property-based tests for the cached spanning forest.
//!
//! Replays random sequences of weight writes and connectivity queries,
//! checking that cached answers always match live ones and that every
//! rebuilt forest is a genuine spanning forest of the live graph.

mod invariants;
mod strategies;
mod types;
