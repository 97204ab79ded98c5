#![forbid(unsafe_code)]

//! Text measurement for Tabula.
//!
//! Tables and charts both lay text out on a fixed-width grid. This crate owns
//! the two primitives they share:
//! - [`measure`] - column count of a string
//! - [`resize`] - truncate or pad a string to an exact column count
//!
//! # Example
//! ```
//! use tabula_text::{Alignment, measure, resize};
//!
//! assert_eq!(measure("Ann"), 3);
//! assert_eq!(resize("Ann", 5, Alignment::Right), "  Ann");
//! assert_eq!(resize("Bartholomew", 4, Alignment::Left), "Bart");
//! ```

pub mod width;

pub use width::{Alignment, measure, resize};
