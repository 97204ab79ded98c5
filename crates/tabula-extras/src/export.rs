#![forbid(unsafe_code)]

//! Export adapters for tables and rendered output.
//!
//! Table exporters work on the same prepared snapshot the console renderer
//! uses, so null replacement, the cell preset, and the row index column all
//! show up in the exported text. Borders and colors are not exported, except
//! by [`HtmlExporter::export_canvas`], which keeps glyph colors as inline
//! styles.
//!
//! # Supported Formats
//!
//! - [`MarkdownExporter`]: GitHub-style pipe table.
//! - [`HtmlExporter`]: `<table>` markup for tables, `<pre>` with colored
//!   `<span>`s for any rendered canvas.
//!
//! ```
//! use tabula_extras::export::MarkdownExporter;
//! use tabula_widgets::Table;
//!
//! let table = Table::from_rows([["Name", "Age"], ["Ann", "30"]]);
//! let md = MarkdownExporter::default().export(&table).unwrap();
//! assert_eq!(md, "| Name | Age |\n| --- | --- |\n| Ann | 30 |\n");
//! ```

use tabula_core::Result;
use tabula_render::{Canvas, Render};
use tabula_style::ColorToken;
use tabula_text::{Alignment, measure, resize};
use tabula_widgets::{PreparedTable, Row, Table};

// ---------------------------------------------------------------------------
// Markdown Exporter
// ---------------------------------------------------------------------------

/// Configuration for Markdown export.
#[derive(Debug, Clone, Default)]
pub struct MarkdownExporter {
    /// Pad every cell to its column width so the source lines up.
    pub pad_columns: bool,
}

impl MarkdownExporter {
    /// Export with padded columns.
    #[must_use]
    pub fn padded() -> Self {
        Self { pad_columns: true }
    }

    /// Export a table as a pipe table.
    ///
    /// # Errors
    ///
    /// [`tabula_core::TabulaError::EmptyTable`] when the table has no header.
    pub fn export(&self, table: &Table) -> Result<String> {
        let prepared = table.prepare()?;
        let escaped = |row: &Row| -> Vec<String> {
            row.cells().iter().map(|c| markdown_escape(c.text())).collect()
        };
        let header = escaped(prepared.header());
        let body: Vec<Vec<String>> = prepared.rows().iter().map(escaped).collect();

        let widths: Vec<usize> = if self.pad_columns {
            (0..header.len())
                .map(|c| {
                    std::iter::once(&header)
                        .chain(&body)
                        .map(|row| measure(&row[c]))
                        .max()
                        .unwrap_or(0)
                        .max(3)
                })
                .collect()
        } else {
            vec![0; header.len()]
        };

        let mut out = String::new();
        self.push_row(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat((*w).max(3))).collect();
        push_pipe_row(&mut out, &rule);
        for row in &body {
            self.push_row(&mut out, row, &widths);
        }
        Ok(out)
    }

    fn push_row(&self, out: &mut String, cells: &[String], widths: &[usize]) {
        if self.pad_columns {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths)
                .map(|(text, w)| resize(text, *w, Alignment::Left))
                .collect();
            push_pipe_row(out, &padded);
        } else {
            push_pipe_row(out, cells);
        }
    }
}

fn push_pipe_row(out: &mut String, cells: &[String]) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out.push('\n');
}

/// Escape pipes and flatten line breaks so a cell stays on one row.
fn markdown_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => out.push_str("\\|"),
            '\r' => {}
            '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// HTML Exporter
// ---------------------------------------------------------------------------

/// Configuration for HTML export.
#[derive(Debug, Clone)]
pub struct HtmlExporter {
    /// Value of the `class` attribute on the outer element; `None` omits it.
    pub class: Option<String>,
    /// Emit each cell's color as an inline `style` (tables only).
    pub cell_colors: bool,
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self {
            class: Some("tabula".into()),
            cell_colors: false,
        }
    }
}

impl HtmlExporter {
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn without_class(mut self) -> Self {
        self.class = None;
        self
    }

    #[must_use]
    pub fn with_cell_colors(mut self, enabled: bool) -> Self {
        self.cell_colors = enabled;
        self
    }

    /// Export a table as `<table>` markup.
    ///
    /// # Errors
    ///
    /// [`tabula_core::TabulaError::EmptyTable`] when the table has no header.
    pub fn export(&self, table: &Table) -> Result<String> {
        let prepared = table.prepare()?;
        let mut out = String::new();
        out.push_str("<table");
        self.push_class(&mut out);
        out.push_str(">\n<thead>\n");
        self.push_row(&mut out, &prepared, prepared.header(), "th");
        out.push_str("</thead>\n<tbody>\n");
        for row in prepared.rows() {
            self.push_row(&mut out, &prepared, row, "td");
        }
        out.push_str("</tbody>\n</table>\n");
        Ok(out)
    }

    /// Export already rasterized output as a `<pre>` block, one `<span>` per
    /// color run.
    #[must_use]
    pub fn export_canvas(&self, canvas: &Canvas) -> String {
        let mut out = String::new();
        out.push_str("<pre");
        self.push_class(&mut out);
        out.push('>');
        for (y, line) in canvas.lines().iter().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            let glyphs = line.glyphs();
            let mut start = 0;
            while start < glyphs.len() {
                let color = glyphs[start].color;
                let end = glyphs[start..]
                    .iter()
                    .position(|g| g.color != color)
                    .map_or(glyphs.len(), |n| start + n);
                let text: String = glyphs[start..end].iter().map(|g| g.ch).collect();
                match color {
                    Some(token) => {
                        out.push_str("<span style=\"");
                        push_color_style(&mut out, token);
                        out.push_str("\">");
                        html_escape_into(&mut out, &text);
                        out.push_str("</span>");
                    }
                    None => html_escape_into(&mut out, &text),
                }
                start = end;
            }
        }
        out.push_str("</pre>");
        out
    }

    /// Render anything and export the result with [`HtmlExporter::export_canvas`].
    ///
    /// # Errors
    ///
    /// Whatever rendering `item` returns.
    pub fn export_rendered<R: Render + ?Sized>(&self, item: &R) -> Result<String> {
        Ok(self.export_canvas(&item.to_canvas()?))
    }

    fn push_class(&self, out: &mut String) {
        if let Some(class) = &self.class {
            out.push_str(" class=\"");
            html_escape_into(out, class);
            out.push('"');
        }
    }

    fn push_row(&self, out: &mut String, prepared: &PreparedTable, row: &Row, tag: &str) {
        out.push_str("<tr>");
        for cell in row.cells() {
            out.push('<');
            out.push_str(tag);
            if self.cell_colors {
                out.push_str(" style=\"");
                push_color_style(out, cell.color());
                let align = prepared.alignment_of(cell);
                if align != Alignment::Left {
                    out.push_str("text-align:");
                    out.push_str(align.as_str());
                    out.push(';');
                }
                out.push('"');
            }
            out.push('>');
            html_escape_into(out, cell.text());
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        out.push_str("</tr>\n");
    }
}

fn push_color_style(out: &mut String, token: ColorToken) {
    let (r, g, b) = token.rgb();
    out.push_str(&format!("color:#{r:02x}{g:02x}{b:02x};"));
}

/// HTML-escape a string into the output buffer.
fn html_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::TabulaError;
    use tabula_render::GlyphLine;
    use tabula_widgets::{Cell, TableSettings};

    fn table() -> Table {
        Table::new()
            .with_row(Row::from_values(["Key", "Value"]))
            .with_row(Row::from_values(["a|b", "line\nbreak"]))
            .with_row(Row::new([Cell::new("<x>"), Cell::empty()]))
    }

    #[test]
    fn markdown_escapes_pipes_and_newlines() {
        let md = MarkdownExporter::default().export(&table()).unwrap();
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[0], "| Key | Value |");
        assert_eq!(lines[1], "| --- | --- |");
        assert_eq!(lines[2], "| a\\|b | line break |");
        assert_eq!(lines[3], "| <x> | Null |");
    }

    #[test]
    fn markdown_padding_aligns_columns() {
        let md = MarkdownExporter::padded().export(&table()).unwrap();
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[0], "| Key  | Value      |");
        assert_eq!(lines[1], "| ---- | ---------- |");
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn markdown_includes_row_indexes() {
        let t = table().with_settings(TableSettings::default().with_row_indexes(true));
        let md = MarkdownExporter::default().export(&t).unwrap();
        assert!(md.starts_with("| # | Key | Value |"));
        assert!(md.contains("| 2 | <x> | Null |"));
    }

    #[test]
    fn html_table_structure_and_escaping() {
        let html = HtmlExporter::default().export(&table()).unwrap();
        assert!(html.starts_with("<table class=\"tabula\">\n<thead>\n<tr><th>Key</th><th>Value</th></tr>\n</thead>\n<tbody>\n"));
        assert!(html.contains("<td>&lt;x&gt;</td><td>Null</td>"));
        assert!(html.ends_with("</tbody>\n</table>\n"));
    }

    #[test]
    fn html_class_is_configurable() {
        let html = HtmlExporter::default().without_class().export(&table()).unwrap();
        assert!(html.starts_with("<table>\n"));
        let html = HtmlExporter::default().with_class("a\"b").export(&table()).unwrap();
        assert!(html.starts_with("<table class=\"a&quot;b\">"));
    }

    #[test]
    fn html_cell_colors_and_alignment() {
        let t = Table::from_rows([["n"], ["42"]]);
        let html = HtmlExporter::default().with_cell_colors(true).export(&t).unwrap();
        assert!(html.contains("<td style=\"color:#ffffff;text-align:right;\">42</td>"));
        assert!(html.contains("<th style=\"color:#ffffff;\">n</th>"));
    }

    #[test]
    fn exporting_headerless_table_fails() {
        assert!(matches!(
            MarkdownExporter::default().export(&Table::new()),
            Err(TabulaError::EmptyTable)
        ));
        assert!(HtmlExporter::default().export(&Table::new()).is_err());
    }

    #[test]
    fn canvas_export_groups_color_runs() {
        let mut line = GlyphLine::new();
        line.push_str("ab", Some(ColorToken::Red));
        line.push_str("<", None);
        let mut canvas = Canvas::new();
        canvas.push_line(line);
        canvas.push_line(GlyphLine::new());
        let html = HtmlExporter::default().without_class().export_canvas(&canvas);
        assert_eq!(html, "<pre><span style=\"color:#ff0000;\">ab</span>&lt;\n</pre>");
    }

    #[test]
    fn html_escape_handles_all_special_chars() {
        let mut out = String::new();
        html_escape_into(&mut out, "<script>alert(\"hi&bye\")</script>");
        assert_eq!(out, "&lt;script&gt;alert(&quot;hi&amp;bye&quot;)&lt;/script&gt;");
    }
}
