//! Property-based invariant tests for table layout.
//!
//! 1. Every rendered row is exactly as wide as the dividers.
//! 2. Every column segment of every row has exactly `widths[c]` columns.
//! 3. A column is as wide as its widest cell text plus padding.
//! 4. Null replacement text participates in width measurement.
//! 5. Pagination preserves every body row, in order.

use proptest::prelude::*;
use tabula_render::Render;
use tabula_style::TableFormatting;
use tabula_text::measure;
use tabula_widgets::{Cell, Pagination, Row, Table, TableSettings};

// ── Helpers ─────────────────────────────────────────────────────────────

fn cell_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .]{0,12}"
}

fn grid_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(cell_text(), 1..6), 1..8)
}

fn table_from(grid: &[Vec<String>]) -> Table {
    Table::from_rows(grid.iter().map(|row| row.iter().map(String::as_str)))
        .with_formatting(TableFormatting::ASCII)
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn rows_match_divider_width(grid in grid_strategy()) {
        let out = table_from(&grid).render_to_string().unwrap();
        let lines: Vec<&str> = out.lines().collect();
        let width = measure(lines[0]);
        for line in &lines {
            prop_assert_eq!(measure(line), width);
        }
    }

    #[test]
    fn segments_match_column_widths(grid in grid_strategy()) {
        let table = table_from(&grid);
        let prepared = table.prepare().unwrap();
        let out = table.render_to_string().unwrap();

        // Cell text is drawn from a charset without '|', so splitting is exact.
        for line in out.lines().filter(|l| l.starts_with('|')) {
            let segments: Vec<&str> = line[1..line.len() - 1].split('|').collect();
            prop_assert_eq!(segments.len(), prepared.column_count());
            for (segment, width) in segments.iter().zip(prepared.widths()) {
                prop_assert_eq!(measure(segment), *width);
            }
        }
    }

    #[test]
    fn width_is_widest_cell_plus_padding(
        grid in grid_strategy(),
        padding in 0usize..4,
    ) {
        let table = table_from(&grid).with_settings(
            TableSettings::default()
                .with_null_replacement("-")
                .with_cell_preset(move |cell| cell.with_padding(padding)),
        );
        let prepared = table.prepare().unwrap();
        let rows: Vec<&Row> = std::iter::once(prepared.header()).chain(prepared.rows()).collect();
        for (c, width) in prepared.widths().iter().enumerate() {
            let widest = rows
                .iter()
                .map(|row| measure(row.cells()[c].text()) + padding)
                .max()
                .unwrap();
            prop_assert_eq!(*width, widest);
        }
    }

    #[test]
    fn null_replacement_sets_minimum_width(replacement in "[A-Z/]{1,8}") {
        let table = Table::new()
            .with_row(Row::new([Cell::new("")]))
            .with_row(Row::new([Cell::empty()]))
            .with_settings(TableSettings::default().with_null_replacement(replacement.clone()));
        let prepared = table.prepare().unwrap();
        prop_assert_eq!(prepared.widths()[0], measure(&replacement));
    }

    #[test]
    fn pagination_keeps_every_row(body in 0usize..40, per_page in 1usize..12) {
        let mut table = Table::from_rows([["v"]]);
        for i in 0..body {
            table.add_row(Row::from_values([i]));
        }
        let pages = table.paginate(per_page).unwrap();
        let flattened: Vec<usize> = pages
            .pages()
            .iter()
            .flat_map(|p| p.rows().iter().map(Row::line_index))
            .collect();
        prop_assert_eq!(flattened, (1..=body).collect::<Vec<_>>());
        prop_assert!(pages.pages().iter().all(|p| p.rows().len() <= per_page));
        prop_assert_eq!(pages.total_pages(), body.div_ceil(per_page).max(1));
    }
}
