//! Shared primitives for the splitstat A/B-testing workspace.
//!
//! `splitstat-core` provides the foundation the other splitstat crates build on:
//!
//! - **Error types** — [`SplitstatError`] and [`Result`] for structured error handling
//! - **Traits** — [`Scored`] and [`Summarizable`] for result types across crates

pub mod error;
pub mod traits;

pub use error::{Result, SplitstatError};
pub use traits::*;
