//! Console helpers: render straight to a writer with ANSI colors.
//!
//! Each helper rasterizes first and writes afterwards, so a validation error
//! leaves the writer untouched. The writer is flushed on success.

use std::io::{self, Write};

use tabula_core::Result;
use tabula_render::{AnsiSink, Render};
use tabula_style::TableFormatting;
use tabula_widgets::{Table, TableRecord, TableSettings};

/// Render anything to `writer` with ANSI colors.
///
/// # Errors
///
/// Any validation error of `item`, or [`tabula_core::TabulaError::Io`] when
/// the writer fails.
pub fn write_rendered<W: Write, R: Render + ?Sized>(writer: W, item: &R) -> Result<()> {
    let canvas = item.to_canvas()?;
    let mut sink = AnsiSink::new(writer);
    canvas.present(&mut sink)?;
    sink.flush()?;
    Ok(())
}

/// [`write_rendered`] to stdout.
///
/// # Errors
///
/// As [`write_rendered`].
pub fn print_rendered<R: Render + ?Sized>(item: &R) -> Result<()> {
    write_rendered(io::stdout().lock(), item)
}

/// Render a table to `writer`.
///
/// # Errors
///
/// [`tabula_core::TabulaError::EmptyTable`] for a table without a header,
/// or an I/O error from the writer.
pub fn write_table<W: Write>(writer: W, table: &Table) -> Result<()> {
    write_rendered(writer, table)
}

/// Render a table to stdout.
///
/// # Errors
///
/// As [`write_table`].
pub fn print_table(table: &Table) -> Result<()> {
    print_rendered(table)
}

/// Build a table from typed records and render it to `writer` in one go.
///
/// # Errors
///
/// An I/O error from the writer. The header always comes from the record
/// descriptors, so the table is never empty.
pub fn write_records<W, R>(
    writer: W,
    records: impl IntoIterator<Item = R>,
    formatting: TableFormatting,
    settings: TableSettings,
) -> Result<()>
where
    W: Write,
    R: TableRecord,
{
    let table = Table::from_records(records)
        .with_formatting(formatting)
        .with_settings(settings);
    write_table(writer, &table)
}

#[cfg(feature = "extras")]
mod graph {
    use super::{Result, Write, print_rendered, write_rendered};
    use tabula_extras::Graph;

    /// Render a graph to `writer`.
    ///
    /// # Errors
    ///
    /// Any graph validation error (no values, zero ticks, pie without pie
    /// formatting, ...) or an I/O error from the writer.
    pub fn write_graph<W: Write, T>(writer: W, graph: &Graph<T>) -> Result<()> {
        write_rendered(writer, graph)
    }

    /// Render a graph to stdout.
    ///
    /// # Errors
    ///
    /// As [`write_graph`].
    pub fn print_graph<T>(graph: &Graph<T>) -> Result<()> {
        print_rendered(graph)
    }
}

#[cfg(feature = "extras")]
pub use graph::{print_graph, write_graph};

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::TabulaError;

    #[test]
    fn write_table_emits_colors_and_text() {
        let table = Table::from_rows([["a"], ["b"]]);
        let mut out = Vec::new();
        write_table(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains('a'));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn failed_render_writes_nothing() {
        let mut out = Vec::new();
        let err = write_table(&mut out, &Table::new()).unwrap_err();
        assert!(matches!(err, TabulaError::EmptyTable));
        assert!(out.is_empty());
    }
}
