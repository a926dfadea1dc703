//! Shared primitives for the betaturn crates.
//!
//! `betaturn-core` provides the pieces every other crate builds on:
//!
//! - **Error types** — [`BetaTurnError`] and [`Result`] for structured error handling
//! - **Traits** — Small reporting abstractions like [`Annotated`], [`Scored`], [`Summarizable`]
//! - **Compression** — gzip and zstd with algorithm auto-detection (std feature only)

pub mod error;
pub mod traits;

#[cfg(feature = "std")]
pub mod compress;

pub use error::{BetaTurnError, Result};
pub use traits::*;
