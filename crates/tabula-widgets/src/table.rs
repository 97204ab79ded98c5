//! Table model and renderer.
//!
//! A [`Table`] owns its rows and is never modified by rendering. Each render
//! works on a [`PreparedTable`]: a snapshot with ragged rows padded, empty
//! cells replaced, the cell preset applied, and (optionally) a row index
//! column in front. Column widths are measured on that snapshot.

use std::fmt;
use std::sync::Arc;

use tabula_core::{Result, TabulaError};
use tabula_render::{Canvas, GlyphLine, Render};
use tabula_style::{BorderGlyphs, ColorToken, TableFormatting};
use tabula_text::{Alignment, measure, resize};

use crate::cell::{Cell, Row, Value};

/// Per-cell transform applied to every snapshot cell before measuring.
pub type CellPreset = Arc<dyn Fn(Cell) -> Cell + Send + Sync>;

/// Behavior switches for table rendering.
#[derive(Clone)]
pub struct TableSettings {
    /// Text shown in cells with no value or only whitespace.
    pub null_replacement: String,
    pub cell_preset: Option<CellPreset>,
    /// Print `"<n> rows"` under the table.
    pub display_row_count: bool,
    /// Prepend a column holding each body row's line number.
    pub display_row_indexes: bool,
    pub row_index_color: ColorToken,
    /// Alignment for cells without an explicit one.
    pub text_alignment: Alignment,
    /// Alignment for numeric cells without an explicit one.
    pub number_alignment: Alignment,
}

impl TableSettings {
    #[must_use]
    pub fn with_null_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.null_replacement = replacement.into();
        self
    }

    #[must_use]
    pub fn with_cell_preset(mut self, preset: impl Fn(Cell) -> Cell + Send + Sync + 'static) -> Self {
        self.cell_preset = Some(Arc::new(preset));
        self
    }

    #[must_use]
    pub fn with_row_count(mut self, display: bool) -> Self {
        self.display_row_count = display;
        self
    }

    #[must_use]
    pub fn with_row_indexes(mut self, display: bool) -> Self {
        self.display_row_indexes = display;
        self
    }

    #[must_use]
    pub fn with_row_index_color(mut self, color: ColorToken) -> Self {
        self.row_index_color = color;
        self
    }

    #[must_use]
    pub fn with_text_alignment(mut self, alignment: Alignment) -> Self {
        self.text_alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_number_alignment(mut self, alignment: Alignment) -> Self {
        self.number_alignment = alignment;
        self
    }
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            null_replacement: "Null".to_owned(),
            cell_preset: None,
            display_row_count: false,
            display_row_indexes: false,
            row_index_color: ColorToken::DarkGray,
            text_alignment: Alignment::Left,
            number_alignment: Alignment::Right,
        }
    }
}

impl fmt::Debug for TableSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSettings")
            .field("null_replacement", &self.null_replacement)
            .field("cell_preset", &self.cell_preset.as_ref().map(|_| "Fn(Cell) -> Cell"))
            .field("display_row_count", &self.display_row_count)
            .field("display_row_indexes", &self.display_row_indexes)
            .field("row_index_color", &self.row_index_color)
            .field("text_alignment", &self.text_alignment)
            .field("number_alignment", &self.number_alignment)
            .finish()
    }
}

/// A grid of cells with an optional header row.
///
/// The first row added becomes the header unless one was set explicitly.
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Option<Row>,
    rows: Vec<Row>,
    settings: TableSettings,
    formatting: TableFormatting,
}

impl Table {
    /// Create an empty table with default settings and formatting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from nested iterables of values. The first inner
    /// iterable is the header.
    pub fn from_rows<R, V>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut table = Self::new();
        table.add_rows(rows.into_iter().map(Row::from_values));
        table
    }

    /// Build a table by mapping each item to a row. The first row produced is
    /// the header.
    pub fn from_data_with<T>(items: impl IntoIterator<Item = T>, row_for: impl Fn(&T) -> Row) -> Self {
        let mut table = Self::new();
        table.add_rows(items.into_iter().map(|item| row_for(&item)));
        table
    }

    // ----- Builders -----

    #[must_use]
    pub fn with_formatting(mut self, formatting: TableFormatting) -> Self {
        self.formatting = formatting;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: TableSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the header row, replacing any existing one.
    #[must_use]
    pub fn with_header(mut self, header: Row) -> Self {
        self.set_header(header);
        self
    }

    #[must_use]
    pub fn with_row(mut self, row: Row) -> Self {
        self.add_row(row);
        self
    }

    // ----- Mutation -----

    pub fn set_header(&mut self, mut header: Row) {
        header.attach(0);
        self.header = Some(header);
    }

    /// Add a row. Becomes the header if the table has none yet.
    pub fn add_row(&mut self, mut row: Row) {
        if self.header.is_none() {
            self.set_header(row);
            return;
        }
        row.attach(self.rows.len() + 1);
        self.rows.push(row);
    }

    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = Row>) {
        for row in rows {
            self.add_row(row);
        }
    }

    pub fn set_formatting(&mut self, formatting: TableFormatting) {
        self.formatting = formatting;
    }

    pub fn set_settings(&mut self, settings: TableSettings) {
        self.settings = settings;
    }

    pub fn settings_mut(&mut self) -> &mut TableSettings {
        &mut self.settings
    }

    // ----- Accessors -----

    #[must_use]
    pub fn header(&self) -> Option<&Row> {
        self.header.as_ref()
    }

    /// Body rows, header excluded.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    #[must_use]
    pub const fn formatting(&self) -> &TableFormatting {
        &self.formatting
    }

    /// A table carrying this table's header, settings, and formatting, with
    /// `rows` as its body. Rows keep their line indexes.
    pub(crate) fn with_body(&self, rows: &[Row]) -> Self {
        Self {
            header: self.header.clone(),
            rows: rows.to_vec(),
            settings: self.settings.clone(),
            formatting: self.formatting,
        }
    }

    /// Snapshot the table for rendering or export.
    ///
    /// # Errors
    ///
    /// [`TabulaError::EmptyTable`] when the table has no header.
    pub fn prepare(&self) -> Result<PreparedTable> {
        let header = self.header.clone().ok_or(TabulaError::EmptyTable)?;
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(header);
        rows.extend(self.rows.iter().cloned());

        let columns = rows.iter().map(Row::len).max().unwrap_or(0);
        let settings = &self.settings;

        for row in &mut rows {
            row.pad_to(columns);
            row.map_cells(|mut cell| {
                if cell.raw().is_none() || cell.text().trim().is_empty() {
                    cell.set_text(settings.null_replacement.as_str());
                }
                match &settings.cell_preset {
                    Some(preset) => preset(cell),
                    None => cell,
                }
            });
            if settings.display_row_indexes {
                let index = if row.line_index() == 0 {
                    Cell::new("#")
                } else {
                    Cell::new(row.line_index())
                };
                row.insert_front(
                    index
                        .with_alignment(Alignment::Right)
                        .with_padding(0)
                        .with_color(settings.row_index_color),
                );
            }
        }

        let column_count = rows.first().map_or(0, Row::len);
        let mut widths = vec![0usize; column_count];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(measure(cell.text()) + cell.padding());
            }
        }

        let header = rows.remove(0);
        Ok(PreparedTable {
            header,
            rows,
            widths,
            text_alignment: settings.text_alignment,
            number_alignment: settings.number_alignment,
        })
    }
}

/// A render-ready snapshot of a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedTable {
    header: Row,
    rows: Vec<Row>,
    widths: Vec<usize>,
    text_alignment: Alignment,
    number_alignment: Alignment,
}

impl PreparedTable {
    #[must_use]
    pub fn header(&self) -> &Row {
        &self.header
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Column widths in display columns, borders excluded.
    #[must_use]
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.widths.len()
    }

    /// Effective alignment: explicit, else by numeric class.
    #[must_use]
    pub fn alignment_of(&self, cell: &Cell) -> Alignment {
        cell.alignment().unwrap_or(if cell.is_numeric() {
            self.number_alignment
        } else {
            self.text_alignment
        })
    }

    /// The cell's text fitted to its column.
    #[must_use]
    pub fn fit(&self, column: usize, cell: &Cell) -> String {
        let width = self.widths.get(column).copied().unwrap_or(0);
        resize(cell.text(), width, self.alignment_of(cell))
    }

    fn row_line(&self, row: &Row, vertical: char, divider: ColorToken) -> GlyphLine {
        let total: usize = self.widths.iter().sum::<usize>() + self.widths.len() + 1;
        let mut line = GlyphLine::with_capacity(total);
        for (column, cell) in row.cells().iter().enumerate() {
            line.push(vertical, Some(divider));
            line.push_str(&self.fit(column, cell), Some(cell.color()));
        }
        line.push(vertical, Some(divider));
        line
    }

    fn divider(&self, (left, middle, right): (char, char, char), glyphs: &BorderGlyphs, color: ColorToken) -> GlyphLine {
        let mut line = GlyphLine::new();
        line.push(left, Some(color));
        for (i, width) in self.widths.iter().enumerate() {
            if i > 0 {
                line.push(middle, Some(color));
            }
            line.push_repeat(glyphs.horizontal, *width, Some(color));
        }
        line.push(right, Some(color));
        line
    }
}

impl Render for Table {
    fn to_canvas(&self) -> Result<Canvas> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Table",
            rows = self.rows.len(),
            row_indexes = self.settings.display_row_indexes
        )
        .entered();

        let prepared = self.prepare()?;
        let header = &self.formatting.header;
        let body = &self.formatting;
        let mut canvas = Canvas::new();

        if header.has_top_divider {
            canvas.push_line(prepared.divider(header.glyphs.top(), &header.glyphs, header.divider_color));
        }
        canvas.push_line(prepared.row_line(&prepared.header, header.glyphs.vertical, header.divider_color));

        if header.separated {
            canvas.push_line(prepared.divider(header.glyphs.bottom(), &header.glyphs, header.divider_color));
            canvas.push_line(prepared.divider(body.glyphs.top(), &body.glyphs, body.divider_color));
        } else {
            canvas.push_line(prepared.divider(
                header.glyphs.middle_row(),
                &header.glyphs,
                header.divider_color,
            ));
        }

        let last = prepared.rows.len().saturating_sub(1);
        for (i, row) in prepared.rows.iter().enumerate() {
            canvas.push_line(prepared.row_line(row, body.glyphs.vertical, body.divider_color));
            if i < last {
                canvas.push_line(prepared.divider(body.glyphs.middle_row(), &body.glyphs, body.divider_color));
            }
        }

        canvas.push_line(prepared.divider(body.glyphs.bottom(), &body.glyphs, body.divider_color));

        if self.settings.display_row_count {
            let count = prepared.rows.len();
            let text = if count == 1 {
                "1 row".to_owned()
            } else {
                format!("{count} rows")
            };
            let mut line = GlyphLine::new();
            line.push_str(&text, None);
            canvas.push_line(line);
        }

        Ok(canvas)
    }
}
