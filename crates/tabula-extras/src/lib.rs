//! Charts and export for Tabula.
//!
//! Each module is behind a Cargo feature flag; both are on by default.
//!
//! | Feature | Module | Description |
//! |---------|--------|-------------|
//! | `charts` | [`charts`], [`pie`] | Bar, line, scatter, and pie charts with pagination |
//! | `export` | [`export`] | Markdown and HTML export of tables and rendered output |
//! | `tracing` | | `widget_render` spans around chart rendering |

#![forbid(unsafe_code)]

#[cfg(feature = "charts")]
pub mod charts;
#[cfg(feature = "charts")]
pub mod pie;

#[cfg(feature = "export")]
pub mod export;

#[cfg(feature = "charts")]
pub use charts::{ChartLayout, Graph, GraphSettings, GraphType, PaginatedGraph};
#[cfg(feature = "charts")]
pub use pie::PieSlice;

#[cfg(feature = "export")]
pub use export::{HtmlExporter, MarkdownExporter};
