#![forbid(unsafe_code)]

//! Tabula public facade crate.
//!
//! Re-exports the table, chart, and export types from the internal crates,
//! offers a prelude, and adds console helpers that render straight to any
//! [`std::io::Write`] with ANSI colors.
//!
//! ```
//! use tabula::prelude::*;
//!
//! let table = Table::from_rows([["Name", "Age"], ["Ann", "30"]])
//!     .with_formatting(TableFormatting::ASCII);
//! let text = table.render_to_string().unwrap();
//! assert_eq!(text.lines().nth(1), Some("|Name|Age|"));
//! ```

#[cfg(feature = "crossterm")]
mod console;

#[cfg(feature = "crossterm")]
pub use console::{print_rendered, print_table, write_records, write_rendered, write_table};
#[cfg(all(feature = "crossterm", feature = "extras"))]
pub use console::{print_graph, write_graph};

// --- Core re-exports -------------------------------------------------------

pub use tabula_core::{Result, TabulaError};
pub use tabula_text::{Alignment, measure, resize};

// --- Style re-exports ------------------------------------------------------

pub use tabula_style::{
    AnyGraphFormatting, BorderGlyphs, ColorToken, GraphFormatting, HeaderFormatting,
    PieGraphFormatting, TableFormatting, TablePreset,
};

// --- Render re-exports -----------------------------------------------------

#[cfg(feature = "crossterm")]
pub use tabula_render::AnsiSink;
pub use tabula_render::{Canvas, CaptureSink, GlyphSink, PlainSink, Render};

// --- Widget re-exports -----------------------------------------------------

pub use tabula_widgets::{
    Cell, CellClass, ColumnDescriptor, IndicatorMode, PageIndicator, Paginated, PaginatedTable,
    Pagination, Row, Table, TableRecord, TableSettings, Value,
};

// --- Extras re-exports -----------------------------------------------------

#[cfg(feature = "extras")]
pub use tabula_extras::{
    ChartLayout, Graph, GraphSettings, GraphType, HtmlExporter, MarkdownExporter, PaginatedGraph,
    PieSlice,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, Cell, ColorToken, GlyphSink, Pagination, Render, Result, Row, TabulaError,
        Table, TableFormatting, TableRecord, TableSettings, Value,
    };

    #[cfg(feature = "extras")]
    pub use crate::{Graph, GraphFormatting, GraphSettings, GraphType, PieGraphFormatting};

    pub use crate::{core, render, style, text, widgets};
    #[cfg(feature = "extras")]
    pub use crate::extras;
}

pub use tabula_core as core;
#[cfg(feature = "extras")]
pub use tabula_extras as extras;
pub use tabula_render as render;
pub use tabula_style as style;
pub use tabula_text as text;
pub use tabula_widgets as widgets;
