//! Shared test utilities for tintlog integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Every harness logs into its own temporary directory and
//! captures console output in memory, so harnesses can run in parallel.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
