#![forbid(unsafe_code)]

//! Shared foundations for Tabula.
//!
//! Every crate in the workspace reports failures through [`TabulaError`], so
//! callers only ever match on one error type regardless of whether a table,
//! a chart, a paginator, or an output sink failed.

pub mod error;

pub use error::{Result, TabulaError};
