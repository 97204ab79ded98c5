#![forbid(unsafe_code)]

//! Styling values for Tabula.
//!
//! Everything in this crate is plain data: a 16-entry [`ColorToken`]
//! palette, border glyph sets for tables ([`TableFormatting`] with its named
//! presets), and glyph/color sets for charts ([`GraphFormatting`],
//! [`PieGraphFormatting`]). Renderers read these values; nothing here writes
//! to a terminal.

pub mod color;
pub mod graph_theme;
pub mod table_theme;

pub use color::ColorToken;
pub use graph_theme::{AnyGraphFormatting, GraphFormatting, PieGraphFormatting};
pub use table_theme::{BorderGlyphs, HeaderFormatting, TableFormatting, TablePreset};
