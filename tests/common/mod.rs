//! Shared test utilities for airfeed integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod builders;
pub mod fake_source_api;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
