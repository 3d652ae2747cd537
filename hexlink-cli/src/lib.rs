//! Support library for the `hexlink` binary.
//!
//! Exposes the command pipeline and logging setup so integration tests can
//! drive commands against in-memory input and output without spawning a
//! subprocess.

pub mod cli;
pub mod logging;
