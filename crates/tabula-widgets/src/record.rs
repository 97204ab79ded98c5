//! Typed records as table rows.
//!
//! A [`TableRecord`] lists its columns once through [`ColumnDescriptor`]s and
//! yields one value per declared column. [`Table::from_records`] turns the
//! descriptors into a header and the values into body rows.
//!
//! ```
//! use tabula_widgets::{ColumnDescriptor, Table, TableRecord, Value};
//!
//! struct Order {
//!     id: u32,
//!     item: &'static str,
//!     note: &'static str,
//! }
//!
//! impl TableRecord for Order {
//!     fn columns() -> Vec<ColumnDescriptor> {
//!         vec![
//!             ColumnDescriptor::new("id").display_name("Order #").order(0),
//!             ColumnDescriptor::new("item"),
//!             ColumnDescriptor::new("note").ignored(true),
//!         ]
//!     }
//!
//!     fn values(&self) -> Vec<Value> {
//!         vec![self.id.into(), self.item.into(), self.note.into()]
//!     }
//! }
//!
//! let table = Table::from_records([Order { id: 7, item: "Tea", note: "" }]);
//! assert_eq!(table.header().unwrap().cells()[0].text(), "Order #");
//! assert_eq!(table.header().unwrap().len(), 2);
//! ```

use tabula_style::ColorToken;
use tabula_text::Alignment;

use crate::cell::{Cell, Row, Value};
use crate::table::Table;

/// How one record field appears as a table column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Sort key; columns without one go last, in declaration order.
    pub order: Option<i32>,
    pub display_name: Option<String>,
    pub color: Option<ColorToken>,
    pub alignment: Option<Alignment>,
    pub ignored: bool,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: ColorToken) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    #[must_use]
    pub fn ignored(mut self, ignored: bool) -> Self {
        self.ignored = ignored;
        self
    }

    /// Header text for this column.
    #[must_use]
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    fn style(&self, mut cell: Cell) -> Cell {
        if let Some(color) = self.color {
            cell.set_color(color);
        }
        cell.set_alignment(self.alignment);
        cell
    }
}

/// A value type that can be listed in a table.
pub trait TableRecord {
    /// Column descriptors in declaration order.
    fn columns() -> Vec<ColumnDescriptor>;

    /// One value per descriptor, in the same order as [`TableRecord::columns`].
    fn values(&self) -> Vec<Value>;
}

/// Visible columns sorted by order, as indexes into the declaration list.
fn visible_columns(columns: &[ColumnDescriptor]) -> Vec<usize> {
    let mut visible: Vec<usize> = (0..columns.len()).filter(|&i| !columns[i].ignored).collect();
    visible.sort_by_key(|&i| (columns[i].order.is_none(), columns[i].order.unwrap_or(0)));
    visible
}

impl Table {
    /// Build a table from typed records: a header from the descriptors and
    /// one body row per record.
    pub fn from_records<R: TableRecord>(records: impl IntoIterator<Item = R>) -> Self {
        let columns = R::columns();
        let visible = visible_columns(&columns);

        let header = Row::new(visible.iter().map(|&i| Cell::new(columns[i].title())));
        let mut table = Self::new().with_header(header);

        for record in records {
            let mut values = record.values();
            let cells = visible.iter().map(|&i| {
                let value = values.get_mut(i).map(std::mem::take).unwrap_or_default();
                columns[i].style(Cell::new(value))
            });
            table.add_row(Row::new(cells));
        }
        table
    }
}
