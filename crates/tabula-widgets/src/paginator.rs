//! Paging through renderables.
//!
//! [`Paginated`] holds pre-split pages and a cursor. Direct jumps
//! ([`Pagination::go_to_page`], [`Pagination::print_page`]) reject indexes
//! outside the page list; stepping past either end with
//! [`Pagination::print_next`] / [`Pagination::print_previous`] is a no-op
//! that reports `false`.

use tabula_core::{Result, TabulaError};
use tabula_render::{GlyphSink, Render};

use crate::table::Table;

/// Navigation over a fixed list of pages.
pub trait Pagination {
    type Page: Render;

    fn pages(&self) -> &[Self::Page];

    /// Zero-based index of the current page.
    fn current_page_index(&self) -> usize;

    /// Move the cursor without printing.
    ///
    /// # Errors
    ///
    /// [`TabulaError::IndexOutOfRange`] when `index >= total_pages()`.
    fn go_to_page(&mut self, index: usize) -> Result<()>;

    fn total_pages(&self) -> usize {
        self.pages().len()
    }

    /// Print page `index`; the cursor does not move.
    ///
    /// # Errors
    ///
    /// [`TabulaError::IndexOutOfRange`] for a bad index, or any render error.
    fn print_page(&self, sink: &mut dyn GlyphSink, index: usize) -> Result<()> {
        let page = self.pages().get(index).ok_or(TabulaError::IndexOutOfRange {
            index,
            len: self.total_pages(),
        })?;
        page.render(sink)
    }

    fn print_current(&self, sink: &mut dyn GlyphSink) -> Result<()> {
        self.print_page(sink, self.current_page_index())
    }

    /// Advance and print. Returns `false` (printing nothing) on the last page.
    fn print_next(&mut self, sink: &mut dyn GlyphSink) -> Result<bool> {
        let next = self.current_page_index() + 1;
        if next >= self.total_pages() {
            return Ok(false);
        }
        self.go_to_page(next)?;
        self.print_current(sink)?;
        Ok(true)
    }

    /// Step back and print. Returns `false` (printing nothing) on the first
    /// page.
    fn print_previous(&mut self, sink: &mut dyn GlyphSink) -> Result<bool> {
        let Some(previous) = self.current_page_index().checked_sub(1) else {
            return Ok(false);
        };
        self.go_to_page(previous)?;
        self.print_current(sink)?;
        Ok(true)
    }
}

/// A non-empty list of pages with a cursor.
#[derive(Debug, Clone)]
pub struct Paginated<P> {
    pages: Vec<P>,
    current: usize,
}

impl<P: Render> Paginated<P> {
    /// # Errors
    ///
    /// [`TabulaError::InvalidArgument`] when `pages` is empty.
    pub fn new(pages: Vec<P>) -> Result<Self> {
        if pages.is_empty() {
            return Err(TabulaError::invalid_argument("a paginator needs at least one page"));
        }
        Ok(Self { pages, current: 0 })
    }

    /// The page under the cursor.
    #[must_use]
    pub fn current(&self) -> &P {
        &self.pages[self.current]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.pages.iter()
    }

    /// Page indicator for the cursor position.
    #[must_use]
    pub fn indicator(&self) -> PageIndicator {
        PageIndicator::new(self.current + 1, self.pages.len())
    }

    #[must_use]
    pub fn into_pages(self) -> Vec<P> {
        self.pages
    }
}

impl<P: Render> Pagination for Paginated<P> {
    type Page = P;

    fn pages(&self) -> &[P] {
        &self.pages
    }

    fn current_page_index(&self) -> usize {
        self.current
    }

    fn go_to_page(&mut self, index: usize) -> Result<()> {
        if index >= self.pages.len() {
            return Err(TabulaError::IndexOutOfRange {
                index,
                len: self.pages.len(),
            });
        }
        self.current = index;
        Ok(())
    }
}

impl<'a, P> IntoIterator for &'a Paginated<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Pages of a [`Table`], each with the full header.
pub type PaginatedTable = Paginated<Table>;

impl Table {
    /// Split the body into pages of at most `rows_per_page` rows. Every page
    /// repeats the header and shares settings and formatting. A table with
    /// no body rows yields one header-only page.
    ///
    /// # Errors
    ///
    /// [`TabulaError::InvalidArgument`] for `rows_per_page == 0`,
    /// [`TabulaError::EmptyTable`] when there is no header.
    pub fn paginate(&self, rows_per_page: usize) -> Result<PaginatedTable> {
        if rows_per_page == 0 {
            return Err(TabulaError::invalid_argument("rows per page must be at least 1"));
        }
        if self.header().is_none() {
            return Err(TabulaError::EmptyTable);
        }

        let pages = if self.rows().is_empty() {
            vec![self.with_body(&[])]
        } else {
            self.rows()
                .chunks(rows_per_page)
                .map(|chunk| self.with_body(chunk))
                .collect()
        };
        Paginated::new(pages)
    }
}

/// How a [`PageIndicator`] is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorMode {
    /// `Page X/Y`.
    Page,
    /// `X/Y`.
    #[default]
    Compact,
    /// One symbol per page, e.g. `.*..`; falls back to compact when too wide.
    Dots,
}

/// A one-line "where am I" label for paged output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    current: usize,
    total: usize,
    mode: IndicatorMode,
    active: char,
    inactive: char,
}

impl PageIndicator {
    /// `current` is one-based.
    #[must_use]
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current,
            total,
            mode: IndicatorMode::Compact,
            active: '*',
            inactive: '.',
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: IndicatorMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn dots_symbols(mut self, active: char, inactive: char) -> Self {
        self.active = active;
        self.inactive = inactive;
        self
    }

    fn normalized(&self) -> (usize, usize) {
        if self.total == 0 {
            return (0, 0);
        }
        (self.current.clamp(1, self.total), self.total)
    }

    /// Format for at most `max_width` columns.
    #[must_use]
    pub fn format(&self, max_width: usize) -> String {
        if max_width == 0 {
            return String::new();
        }
        let (current, total) = self.normalized();
        match self.mode {
            IndicatorMode::Page => format!("Page {current}/{total}"),
            IndicatorMode::Compact => format!("{current}/{total}"),
            IndicatorMode::Dots if total > 0 && total <= max_width => (1..=total)
                .map(|i| if i == current { self.active } else { self.inactive })
                .collect(),
            IndicatorMode::Dots => format!("{current}/{total}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_render::CaptureSink;

    fn numbered(body_rows: usize) -> Table {
        let mut table = Table::from_rows([["n"]]);
        for i in 0..body_rows {
            table.add_row(crate::cell::Row::from_values([i]));
        }
        table
    }

    #[test]
    fn splits_rows_and_repeats_header() {
        let pages = numbered(23).paginate(10).unwrap();
        let sizes: Vec<_> = pages.iter().map(|p| p.rows().len()).collect();
        assert_eq!(sizes, [10, 10, 3]);
        assert!(pages.iter().all(|p| p.header().unwrap().cells()[0].text() == "n"));
        assert_eq!(pages.pages()[2].rows()[0].line_index(), 21);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(
            numbered(3).paginate(0),
            Err(TabulaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn headerless_table_cannot_paginate() {
        assert!(matches!(Table::new().paginate(5), Err(TabulaError::EmptyTable)));
    }

    #[test]
    fn header_only_table_yields_single_page() {
        let pages = numbered(0).paginate(5).unwrap();
        assert_eq!(pages.total_pages(), 1);
        assert!(pages.current().rows().is_empty());
    }

    #[test]
    fn navigation_policy() {
        let mut pages = numbered(5).paginate(2).unwrap();
        let mut sink = CaptureSink::new();

        assert!(!pages.print_previous(&mut sink).unwrap());
        assert!(sink.lines().is_empty());

        assert!(pages.print_next(&mut sink).unwrap());
        assert_eq!(pages.current_page_index(), 1);
        assert!(pages.print_next(&mut sink).unwrap());
        assert!(!pages.print_next(&mut sink).unwrap());
        assert_eq!(pages.current_page_index(), 2);

        let err = pages.go_to_page(3).unwrap_err();
        assert!(matches!(err, TabulaError::IndexOutOfRange { index: 3, len: 3 }));
        assert!(pages.print_page(&mut sink, 7).is_err());

        pages.go_to_page(0).unwrap();
        assert_eq!(pages.current_page_index(), 0);
    }

    #[test]
    fn empty_page_list_is_rejected() {
        assert!(Paginated::<Table>::new(Vec::new()).is_err());
    }

    #[test]
    fn indicator_modes() {
        let ind = PageIndicator::new(2, 4);
        assert_eq!(ind.format(80), "2/4");
        assert_eq!(ind.mode(IndicatorMode::Page).format(80), "Page 2/4");
        assert_eq!(ind.mode(IndicatorMode::Dots).format(80), ".*..");
        assert_eq!(ind.mode(IndicatorMode::Dots).format(3), "2/4");
        assert_eq!(PageIndicator::new(9, 3).format(80), "3/3");
        assert_eq!(PageIndicator::new(1, 0).format(80), "0/0");
        assert_eq!(ind.format(0), "");
    }

    #[test]
    fn paginated_indicator_tracks_cursor() {
        let mut pages = numbered(4).paginate(2).unwrap();
        pages.go_to_page(1).unwrap();
        assert_eq!(pages.indicator().format(10), "2/2");
    }
}
