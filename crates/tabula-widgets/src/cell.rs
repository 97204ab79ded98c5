//! Cell values, classification, and rows.

use std::fmt;

use bitflags::bitflags;
use tabula_style::ColorToken;
use tabula_text::Alignment;

/// The raw value behind a cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Number(f64),
    String(String),
    /// Any other displayable value, stored as its rendered text.
    Other(String),
}

impl Value {
    /// Wrap any displayable value that has no dedicated variant.
    pub fn other(value: impl fmt::Display) -> Self {
        Self::Other(value.to_string())
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Display text. `None` yields the empty string.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::String(s) | Self::Other(s) => s.clone(),
        }
    }

    /// Numeric view, if the value is a number.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) | Self::Other(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f64);

impl From<f32> for Value {
    /// Goes through the `f32` text so widening adds no digits.
    fn from(value: f32) -> Self {
        Self::Number(value.to_string().parse().unwrap_or(f64::from(value)))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

bitflags! {
    /// What a cell's content looks like, computed from its value and text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellClass: u8 {
        const NULL = 0b001;
        const NUMERIC = 0b010;
        const BOOL = 0b100;
    }
}

impl CellClass {
    /// Classify a raw value together with its display text.
    #[must_use]
    pub fn classify(raw: &Value, text: &str) -> Self {
        let mut class = Self::empty();
        let trimmed = text.trim();
        if raw.is_none() {
            class |= Self::NULL;
        }
        if matches!(raw, Value::Number(_))
            || trimmed.parse::<f64>().is_ok_and(f64::is_finite)
        {
            class |= Self::NUMERIC;
        }
        if matches!(raw, Value::Bool(_))
            || trimmed.eq_ignore_ascii_case("true")
            || trimmed.eq_ignore_ascii_case("false")
        {
            class |= Self::BOOL;
        }
        class
    }
}

/// A single table cell.
///
/// `text` is what gets measured and drawn; `raw` is the value it came from.
/// The classification is refreshed whenever either changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    text: String,
    raw: Value,
    class: CellClass,
    color: ColorToken,
    padding: usize,
    alignment: Option<Alignment>,
    position: (usize, usize),
}

impl Cell {
    /// Create a cell from any value. The text is the value's display text.
    pub fn new(value: impl Into<Value>) -> Self {
        let raw = value.into();
        let text = raw.to_text();
        let class = CellClass::classify(&raw, &text);
        Self {
            text,
            raw,
            class,
            color: ColorToken::default(),
            padding: 0,
            alignment: None,
            position: (0, 0),
        }
    }

    /// A cell with no value.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Value::None)
    }

    // ----- Builders -----

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    /// Extra columns reserved after the text when measuring the column.
    #[must_use]
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    // ----- Mutation -----

    /// Replace the display text, keeping the raw value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.class = CellClass::classify(&self.raw, &self.text);
    }

    /// Replace the raw value; the text follows it.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.raw = value.into();
        self.text = self.raw.to_text();
        self.class = CellClass::classify(&self.raw, &self.text);
    }

    pub fn set_color(&mut self, color: ColorToken) {
        self.color = color;
    }

    pub fn set_padding(&mut self, padding: usize) {
        self.padding = padding;
    }

    pub fn set_alignment(&mut self, alignment: Option<Alignment>) {
        self.alignment = alignment;
    }

    pub(crate) fn set_position(&mut self, column: usize, row: usize) {
        self.position = (column, row);
    }

    // ----- Accessors -----

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    #[must_use]
    pub const fn class(&self) -> CellClass {
        self.class
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.class.contains(CellClass::NULL)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.class.contains(CellClass::NUMERIC)
    }

    #[must_use]
    pub const fn is_bool(&self) -> bool {
        self.class.contains(CellClass::BOOL)
    }

    #[must_use]
    pub const fn color(&self) -> ColorToken {
        self.color
    }

    #[must_use]
    pub const fn padding(&self) -> usize {
        self.padding
    }

    /// Explicit alignment, `None` when the table defaults apply.
    #[must_use]
    pub const fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    /// `(column, row)`; the row is the owning row's line index.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        self.position
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A row of cells. The line index is assigned when the row joins a table:
/// 0 for the header, 1.. for body rows in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
    line_index: usize,
}

impl Row {
    /// Create a row from cells.
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            line_index: 0,
        }
    }

    /// Create a row from raw values, one cell each.
    pub fn from_values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::new(values.into_iter().map(Cell::new))
    }

    /// Create a row from raw values, copying color and padding from `preset`.
    pub fn from_values_styled<V: Into<Value>>(
        values: impl IntoIterator<Item = V>,
        preset: &Cell,
    ) -> Self {
        Self::new(values.into_iter().map(|v| {
            Cell::new(v)
                .with_color(preset.color())
                .with_padding(preset.padding())
        }))
    }

    /// Append a cell.
    #[must_use]
    pub fn with_cell(mut self, cell: Cell) -> Self {
        self.push(cell);
        self
    }

    pub fn push(&mut self, cell: Cell) {
        let column = self.cells.len();
        self.cells.push(cell);
        let line = self.line_index;
        if let Some(last) = self.cells.last_mut() {
            last.set_position(column, line);
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[must_use]
    pub fn get(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub const fn line_index(&self) -> usize {
        self.line_index
    }

    /// Assign the line index and rewrite every cell position.
    pub(crate) fn attach(&mut self, line_index: usize) {
        self.line_index = line_index;
        self.reindex();
    }

    pub(crate) fn reindex(&mut self) {
        let line = self.line_index;
        for (column, cell) in self.cells.iter_mut().enumerate() {
            cell.set_position(column, line);
        }
    }

    pub(crate) fn pad_to(&mut self, columns: usize) {
        while self.cells.len() < columns {
            self.push(Cell::empty());
        }
    }

    pub(crate) fn insert_front(&mut self, cell: Cell) {
        self.cells.insert(0, cell);
        self.reindex();
    }

    pub(crate) fn map_cells(&mut self, mut f: impl FnMut(Cell) -> Cell) {
        let cells = std::mem::take(&mut self.cells);
        self.cells = cells.into_iter().map(&mut f).collect();
        self.reindex();
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::new(iter)
    }
}
