//! Shared primitives for the catena chain-processing workspace.
//!
//! `catena-core` provides the foundation that the domain crates build on:
//!
//! - **Error types** — [`CatenaError`] and [`Result`] for structured error handling
//! - **Traits** — Core abstractions like [`Sequence`], [`Annotated`], [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{CatenaError, Result};
pub use traits::*;
