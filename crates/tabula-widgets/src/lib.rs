#![forbid(unsafe_code)]

//! Tables for Tabula.
//!
//! # Role
//! `tabula-widgets` owns the table model (values, cells, rows), the table
//! renderer, typed-record column discovery, and pagination.
//!
//! # Example
//! ```
//! use tabula_render::Render;
//! use tabula_style::TableFormatting;
//! use tabula_widgets::Table;
//!
//! let table = Table::from_rows([["Name", "Age"], ["Ann", "30"]])
//!     .with_formatting(TableFormatting::ASCII);
//! let out = table.render_to_string().unwrap();
//! assert!(out.contains("|Ann | 30|"));
//! ```

pub mod cell;
pub mod paginator;
pub mod record;
pub mod table;

pub use cell::{Cell, CellClass, Row, Value};
pub use paginator::{IndicatorMode, PageIndicator, Paginated, PaginatedTable, Pagination};
pub use record::{ColumnDescriptor, TableRecord};
pub use table::{CellPreset, PreparedTable, Table, TableSettings};
