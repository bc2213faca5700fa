//! CLI command implementations.

pub mod themes;
