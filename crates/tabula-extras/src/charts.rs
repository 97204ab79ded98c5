#![forbid(unsafe_code)]

//! Character-cell charts: bar, line, and scatter over one shared frame.
//!
//! Every sample gets an x label from the tick formatter; labels are laid out
//! left to right with `x_axis_padding` spaces between them, and each sample
//! is plotted in the column under the middle of its label. Rows run from the
//! upper bound (top) to the lower bound (bottom) in `num_of_y_ticks` bands of
//! `y_axis_padding + 1` rows.
//!
//! ```
//! use tabula_extras::charts::{Graph, GraphType};
//! use tabula_render::Render;
//!
//! let graph = Graph::new(vec![3, 7, 5]).with_graph_type(GraphType::Bar);
//! let out = graph.render_to_string().unwrap();
//! assert!(out.contains('#'));
//! ```

use std::fmt;
use std::sync::Arc;

use tabula_core::{Result, TabulaError};
use tabula_render::{Canvas, Glyph, GlyphLine, Render};
use tabula_style::{AnyGraphFormatting, GraphFormatting, PieGraphFormatting};
use tabula_text::measure;
use tabula_widgets::Paginated;

use crate::pie;

// ===== Settings =====

/// Which renderer draws a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphType {
    #[default]
    Bar,
    Line,
    Scatter,
    Pie,
}

pub type ValueGetter<T> = Arc<dyn Fn(&T) -> f64 + Send + Sync>;
pub type XTickFormatter<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
pub type YTickFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Samples shown per page by [`Graph::paginate_default`].
pub const DEFAULT_COLUMNS_PER_PAGE: usize = 7;

/// How samples are read, labeled, and scaled.
pub struct GraphSettings<T> {
    pub value_getter: ValueGetter<T>,
    pub x_tick_formatter: XTickFormatter<T>,
    pub y_tick_formatter: YTickFormatter,
    /// Plain rows between two y tick rows.
    pub y_axis_padding: usize,
    /// Spaces between neighbouring x labels.
    pub x_axis_padding: usize,
    pub num_of_y_ticks: usize,
    pub header: String,
    /// Lower bound; `None` means 0.9 × the smallest value.
    pub min_value: Option<f64>,
    /// Upper bound; `None` means 1.1 × the largest value.
    pub max_value: Option<f64>,
    pub graph_type: GraphType,
}

impl<T> GraphSettings<T> {
    /// Settings for arbitrary sample types. Y labels use two decimals.
    pub fn new(
        value_getter: impl Fn(&T) -> f64 + Send + Sync + 'static,
        x_tick_formatter: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            value_getter: Arc::new(value_getter),
            x_tick_formatter: Arc::new(x_tick_formatter),
            y_tick_formatter: Arc::new(|y| format!("{y:.2}")),
            y_axis_padding: 1,
            x_axis_padding: 2,
            num_of_y_ticks: 5,
            header: String::new(),
            min_value: None,
            max_value: None,
            graph_type: GraphType::Bar,
        }
    }

    #[must_use]
    pub fn with_value_getter(mut self, getter: impl Fn(&T) -> f64 + Send + Sync + 'static) -> Self {
        self.value_getter = Arc::new(getter);
        self
    }

    #[must_use]
    pub fn with_x_tick_formatter(mut self, formatter: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.x_tick_formatter = Arc::new(formatter);
        self
    }

    #[must_use]
    pub fn with_y_tick_formatter(mut self, formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.y_tick_formatter = Arc::new(formatter);
        self
    }

    #[must_use]
    pub fn with_y_axis_padding(mut self, padding: usize) -> Self {
        self.y_axis_padding = padding;
        self
    }

    #[must_use]
    pub fn with_x_axis_padding(mut self, padding: usize) -> Self {
        self.x_axis_padding = padding;
        self
    }

    #[must_use]
    pub fn with_y_ticks(mut self, ticks: usize) -> Self {
        self.num_of_y_ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    #[must_use]
    pub fn with_graph_type(mut self, graph_type: GraphType) -> Self {
        self.graph_type = graph_type;
        self
    }

    pub(crate) fn value_of(&self, sample: &T) -> f64 {
        (self.value_getter)(sample)
    }

    pub(crate) fn x_label(&self, sample: &T) -> String {
        (self.x_tick_formatter)(sample)
    }
}

impl<T> Default for GraphSettings<T>
where
    T: Copy + Into<f64> + fmt::Display + 'static,
{
    fn default() -> Self {
        Self::new(|v: &T| (*v).into(), |v: &T| v.to_string())
    }
}

impl<T> Clone for GraphSettings<T> {
    fn clone(&self) -> Self {
        Self {
            value_getter: Arc::clone(&self.value_getter),
            x_tick_formatter: Arc::clone(&self.x_tick_formatter),
            y_tick_formatter: Arc::clone(&self.y_tick_formatter),
            y_axis_padding: self.y_axis_padding,
            x_axis_padding: self.x_axis_padding,
            num_of_y_ticks: self.num_of_y_ticks,
            header: self.header.clone(),
            min_value: self.min_value,
            max_value: self.max_value,
            graph_type: self.graph_type,
        }
    }
}

impl<T> fmt::Debug for GraphSettings<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphSettings")
            .field("y_axis_padding", &self.y_axis_padding)
            .field("x_axis_padding", &self.x_axis_padding)
            .field("num_of_y_ticks", &self.num_of_y_ticks)
            .field("header", &self.header)
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("graph_type", &self.graph_type)
            .finish_non_exhaustive()
    }
}

// ===== Graph =====

/// A data series plus the settings and formatting to draw it.
pub struct Graph<T> {
    values: Vec<T>,
    settings: GraphSettings<T>,
    formatting: AnyGraphFormatting,
}

impl<T> Graph<T>
where
    T: Copy + Into<f64> + fmt::Display + 'static,
{
    /// A bar chart of plain numbers with default settings.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self::with_settings(values, GraphSettings::default())
    }

    /// A pie chart of plain numbers, already carrying pie formatting.
    pub fn pie(values: impl IntoIterator<Item = T>) -> Self {
        Self::new(values)
            .with_graph_type(GraphType::Pie)
            .with_formatting(PieGraphFormatting::default())
    }
}

impl<T> Graph<T> {
    pub fn with_settings(values: impl IntoIterator<Item = T>, settings: GraphSettings<T>) -> Self {
        Self {
            values: values.into_iter().collect(),
            settings,
            formatting: AnyGraphFormatting::default(),
        }
    }

    #[must_use]
    pub fn with_formatting(mut self, formatting: impl Into<AnyGraphFormatting>) -> Self {
        self.formatting = formatting.into();
        self
    }

    #[must_use]
    pub fn with_graph_type(mut self, graph_type: GraphType) -> Self {
        self.settings.graph_type = graph_type;
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.settings.header = header.into();
        self
    }

    pub fn set_settings(&mut self, settings: GraphSettings<T>) {
        self.settings = settings;
    }

    pub fn set_formatting(&mut self, formatting: impl Into<AnyGraphFormatting>) {
        self.formatting = formatting.into();
    }

    pub fn settings_mut(&mut self) -> &mut GraphSettings<T> {
        &mut self.settings
    }

    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    pub fn settings(&self) -> &GraphSettings<T> {
        &self.settings
    }

    #[must_use]
    pub fn formatting(&self) -> &AnyGraphFormatting {
        &self.formatting
    }

    #[must_use]
    pub fn graph_type(&self) -> GraphType {
        self.settings.graph_type
    }

    /// Compute the coordinate layout for the current values and settings.
    ///
    /// # Errors
    ///
    /// [`TabulaError::InvalidArgument`] when there are no values or
    /// `num_of_y_ticks` is zero.
    pub fn layout(&self) -> Result<ChartLayout> {
        ChartLayout::compute(&self.values, &self.settings)
    }
}

impl<T: Clone> Graph<T> {
    /// Split the samples into graphs of at most `columns_per_page` samples,
    /// each sharing these settings and formatting.
    ///
    /// # Errors
    ///
    /// [`TabulaError::InvalidArgument`] for a zero page size or an empty
    /// graph.
    pub fn paginate(&self, columns_per_page: usize) -> Result<PaginatedGraph<T>> {
        if columns_per_page == 0 {
            return Err(TabulaError::invalid_argument("columns per page must be at least 1"));
        }
        if self.values.is_empty() {
            return Err(TabulaError::invalid_argument("graph has no values"));
        }
        let pages = self
            .values
            .chunks(columns_per_page)
            .map(|chunk| Self {
                values: chunk.to_vec(),
                settings: self.settings.clone(),
                formatting: self.formatting.clone(),
            })
            .collect();
        Paginated::new(pages)
    }

    /// [`Graph::paginate`] with [`DEFAULT_COLUMNS_PER_PAGE`].
    pub fn paginate_default(&self) -> Result<PaginatedGraph<T>> {
        self.paginate(DEFAULT_COLUMNS_PER_PAGE)
    }
}

impl<T: Clone> Clone for Graph<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            settings: self.settings.clone(),
            formatting: self.formatting.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("values", &self.values)
            .field("settings", &self.settings)
            .field("formatting", &self.formatting)
            .finish()
    }
}

/// Pages of a [`Graph`].
pub type PaginatedGraph<T> = Paginated<Graph<T>>;

impl<T> Render for Graph<T> {
    fn to_canvas(&self) -> Result<Canvas> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Graph",
            kind = ?self.settings.graph_type,
            values = self.values.len()
        )
        .entered();

        match self.settings.graph_type {
            GraphType::Pie => {
                let pie = self.formatting.as_pie().ok_or_else(|| {
                    TabulaError::invalid_formatting("pie charts require PieGraphFormatting")
                })?;
                pie::render(&self.values, &self.settings, pie)
            }
            kind => {
                let layout = self.layout()?;
                let base = self.formatting.base();
                let canvas = match kind {
                    GraphType::Line => layout.draw(base, &self.settings.header, |y| layout.line_row(base, y, true)),
                    GraphType::Scatter => layout.draw(base, &self.settings.header, |y| layout.line_row(base, y, false)),
                    _ => layout.draw(base, &self.settings.header, |y| layout.bar_row(base, y)),
                };
                Ok(canvas)
            }
        }
    }
}

// ===== Coordinate mapping =====

/// Where every part of a bar/line/scatter chart goes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    values: Vec<f64>,
    x_labels: Vec<String>,
    /// One entry per row; `Some` on tick rows.
    y_labels: Vec<Option<String>>,
    centers: Vec<usize>,
    min: f64,
    max: f64,
    y_label_width: usize,
    x0: usize,
    line_width: usize,
    line_count: usize,
    y_axis_padding: usize,
}

impl ChartLayout {
    /// Map samples onto rows and columns.
    ///
    /// # Errors
    ///
    /// [`TabulaError::InvalidArgument`] when `samples` is empty or
    /// `num_of_y_ticks` is zero.
    pub fn compute<T>(samples: &[T], settings: &GraphSettings<T>) -> Result<Self> {
        if samples.is_empty() {
            return Err(TabulaError::invalid_argument("graph has no values"));
        }
        if settings.num_of_y_ticks == 0 {
            return Err(TabulaError::invalid_argument("num_of_y_ticks must be at least 1"));
        }

        let values: Vec<f64> = samples.iter().map(|s| settings.value_of(s)).collect();
        let x_labels: Vec<String> = samples.iter().map(|s| settings.x_label(s)).collect();

        let largest = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let smallest = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = settings.max_value.unwrap_or(largest * 1.1);
        let min = settings.min_value.unwrap_or(smallest * 0.9);

        let band = settings.y_axis_padding + 1;
        let line_count = settings.num_of_y_ticks * band;
        let step = (max - min) / line_count as f64;

        let y_labels: Vec<Option<String>> = (0..=line_count)
            .map(|y| {
                (y % band == 0).then(|| {
                    let value = if y == line_count { min } else { max - y as f64 * step };
                    (settings.y_tick_formatter)(value)
                })
            })
            .collect();
        let y_label_width = y_labels.iter().flatten().map(|l| measure(l)).max().unwrap_or(0);
        let x0 = y_label_width + 2 + 1;

        let mut centers = Vec::with_capacity(x_labels.len());
        let mut next = x0 + 1;
        for label in &x_labels {
            centers.push(next);
            next += measure(label) + settings.x_axis_padding + 1;
        }
        let line_width = next;

        Ok(Self {
            values,
            x_labels,
            y_labels,
            centers,
            min,
            max,
            y_label_width,
            x0,
            line_width,
            line_count,
            y_axis_padding: settings.y_axis_padding,
        })
    }

    /// Mapped sample values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Column of the y axis plus one: the first plot column.
    #[must_use]
    pub const fn x0(&self) -> usize {
        self.x0
    }

    #[must_use]
    pub const fn y_label_width(&self) -> usize {
        self.y_label_width
    }

    /// Width of the x axis line; plot rows extend one column further.
    #[must_use]
    pub const fn line_width(&self) -> usize {
        self.line_width
    }

    /// Index of the last plot row (rows are `0..=line_count`).
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    /// First column of sample `i`'s x label.
    #[must_use]
    pub fn label_start(&self, i: usize) -> usize {
        self.centers[i]
    }

    /// Column in which sample `i` is plotted.
    #[must_use]
    pub fn sample_column(&self, i: usize) -> usize {
        self.centers[i] + measure(&self.x_labels[i]) / 2
    }

    #[must_use]
    pub const fn is_tick_row(&self, y: usize) -> bool {
        y % (self.y_axis_padding + 1) == 0
    }

    /// Value represented by row `y`; the last row is exactly the lower bound.
    #[must_use]
    pub fn row_value(&self, y: usize) -> f64 {
        if y >= self.line_count {
            self.min
        } else {
            self.max - y as f64 * (self.max - self.min) / self.line_count as f64
        }
    }

    /// Half the value range covered by one row.
    #[must_use]
    pub fn half_row_span(&self) -> f64 {
        (self.max - self.min) / self.line_count as f64 / 2.0
    }

    fn plot_width(&self) -> usize {
        self.line_width - self.x0 + 1
    }

    fn column_of(&self, i: usize) -> usize {
        self.sample_column(i) - self.x0
    }

    // ----- Row rasterizers (plot columns only, `None` = background) -----

    fn bar_row(&self, fmt: &GraphFormatting, y: usize) -> Vec<Option<Glyph>> {
        let threshold = self.row_value(y);
        let mut row = vec![None; self.plot_width()];
        for (i, value) in self.values.iter().enumerate() {
            if *value >= threshold {
                row[self.column_of(i)] = Some(Glyph::colored(fmt.graph_icon, fmt.graph_icon_color));
            }
        }
        row
    }

    fn line_row(&self, fmt: &GraphFormatting, y: usize, connect: bool) -> Vec<Option<Glyph>> {
        let target = self.row_value(y);
        let half = self.half_row_span();
        let mut row = vec![None; self.plot_width()];

        for (i, value) in self.values.iter().enumerate() {
            if (value - target).abs() < half {
                row[self.column_of(i)] = Some(Glyph::colored(fmt.graph_icon, fmt.graph_icon_color));
            }
        }
        if !connect {
            return row;
        }

        for i in 1..self.values.len() {
            let (from, to) = (self.column_of(i - 1), self.column_of(i));
            let (v0, v1) = (self.values[i - 1], self.values[i]);
            let span = (to - from) as f64;
            for x in from + 1..to {
                if row[x].is_some() {
                    continue;
                }
                let t = (x - from) as f64 / span;
                let interpolated = v0 + t * (v1 - v0);
                if (interpolated - target).abs() < half {
                    row[x] = Some(Glyph::colored(fmt.graph_line, fmt.graph_icon_color));
                }
            }
        }
        row
    }

    // ----- Frame -----

    fn draw(
        &self,
        fmt: &GraphFormatting,
        header: &str,
        plot_row: impl Fn(usize) -> Vec<Option<Glyph>>,
    ) -> Canvas {
        let mut canvas = Canvas::new();

        if !header.is_empty() {
            let mut line = GlyphLine::new();
            line.push_repeat(' ', self.line_width.saturating_sub(measure(header)) / 2, None);
            line.push_str(header, None);
            canvas.push_line(line);
        }

        for y in 0..=self.line_count {
            let mut line = GlyphLine::with_capacity(self.line_width + 1);
            let tick = self.is_tick_row(y);
            match self.y_labels.get(y).and_then(Option::as_ref) {
                Some(label) => {
                    line.push_str(label, Some(fmt.y_axis_label_color));
                    let gap = self.y_label_width - measure(label) + 2;
                    line.push_repeat(fmt.empty_point, gap, Some(fmt.y_axis_color));
                    line.push(fmt.y_axis_tick, Some(fmt.y_axis_color));
                }
                None => {
                    line.push_repeat(fmt.empty_point, self.y_label_width + 2, Some(fmt.y_axis_color));
                    line.push(fmt.vertical_line, Some(fmt.y_axis_color));
                }
            }

            let background = if tick {
                Glyph::colored(fmt.y_axis_tick_line, fmt.y_axis_tick_line_color)
            } else {
                Glyph::colored(fmt.empty_point, fmt.empty_point_color)
            };
            for glyph in plot_row(y) {
                let glyph = glyph.unwrap_or(background);
                line.push(glyph.ch, glyph.color);
            }
            canvas.push_line(line);
        }

        let mut axis = GlyphLine::with_capacity(self.line_width);
        axis.push_repeat(fmt.horizontal_line, self.line_width, Some(fmt.x_axis_color));
        for i in 0..self.values.len() {
            axis.set(self.sample_column(i), Glyph::colored(fmt.x_axis_tick, fmt.x_axis_tick_color));
        }
        axis.set(self.x0 - 1, Glyph::colored(fmt.origin, fmt.x_axis_color));
        canvas.push_line(axis);

        let label_color = Some(fmt.x_axis_label_color);
        let mut labels = GlyphLine::with_capacity(self.line_width);
        let mut x = 0;
        let mut next_label = 0;
        while x < self.line_width {
            if x == self.x0 - 1 {
                labels.push(fmt.vertical_line, label_color);
                x += 1;
            } else if next_label < self.centers.len() && self.centers[next_label] == x {
                let label = &self.x_labels[next_label];
                labels.push_str(label, label_color);
                x += measure(label);
                next_label += 1;
            } else {
                labels.push(' ', label_color);
                x += 1;
            }
        }
        canvas.push_line(labels);

        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(graph: &Graph<i32>) -> Vec<String> {
        graph
            .render_to_string()
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn layout_matches_axis_formulas() {
        let graph = Graph::new(vec![10, 20, 5]);
        let layout = graph.layout().unwrap();
        let (min, max) = layout.bounds();
        assert!((max - 22.0).abs() < 1e-9);
        assert!((min - 4.5).abs() < 1e-9);
        // "22.00" is the widest y label
        assert_eq!(layout.y_label_width(), 5);
        assert_eq!(layout.x0(), 8);
        assert_eq!(layout.label_start(0), 9);
        assert_eq!(layout.label_start(1), 9 + 2 + 2 + 1);
        assert_eq!(layout.sample_column(1), 14 + 1);
        assert_eq!(layout.line_width(), 19 + 1 + 2 + 1);
        assert_eq!(layout.line_count(), 10);
        assert!((layout.row_value(10) - 4.5).abs() < f64::EPSILON);
        assert!((layout.half_row_span() - 17.5 / 10.0 / 2.0).abs() < 1e-12);
    }

    #[test]
    fn validation_errors() {
        let empty: Graph<i32> = Graph::new(Vec::new());
        assert!(matches!(empty.render_to_string(), Err(TabulaError::InvalidArgument(_))));

        let mut no_ticks = Graph::new(vec![1, 2]);
        no_ticks.settings_mut().num_of_y_ticks = 0;
        assert!(matches!(no_ticks.render_to_string(), Err(TabulaError::InvalidArgument(_))));
    }

    #[test]
    fn frame_has_rows_axis_and_labels() {
        let graph = Graph::new(vec![10, 20, 5]);
        let out = lines(&graph);
        // 11 plot rows + axis + labels, no header
        assert_eq!(out.len(), 13);
        assert!(out[0].starts_with("22.00  +"));
        assert!(out[1].starts_with("       |"));

        let axis = &out[11];
        assert_eq!(axis.chars().count(), 23);
        assert_eq!(axis.chars().nth(7), Some('O'));
        assert_eq!(axis.chars().nth(10), Some('+'));
        assert_eq!(axis.chars().nth(15), Some('+'));

        let labels = &out[12];
        assert_eq!(labels.chars().nth(7), Some('|'));
        assert_eq!(&labels[9..11], "10");
        assert_eq!(&labels[14..16], "20");
        assert_eq!(&labels[19..20], "5");
    }

    #[test]
    fn header_is_centered_over_line_width() {
        let graph = Graph::new(vec![1, 2]).with_header("Hi");
        let out = lines(&graph);
        let width = graph.layout().unwrap().line_width();
        assert_eq!(out[0], format!("{}Hi", " ".repeat((width - 2) / 2)));
    }

    #[test]
    fn bars_fill_down_to_the_axis() {
        let graph = Graph::new(vec![10, 20, 5]);
        let layout = graph.layout().unwrap();
        let out = lines(&graph);
        let col = layout.sample_column(1);
        let column: Vec<char> = out[..=layout.line_count()]
            .iter()
            .map(|l| l.chars().nth(col).unwrap())
            .collect();
        let first = column.iter().position(|&c| c == '#').unwrap();
        assert!(column[first..].iter().all(|&c| c == '#'));
    }

    #[test]
    fn tick_rows_use_tick_line_background() {
        let out = lines(&Graph::new(vec![3, 4]));
        assert!(out[0].ends_with('.'));
        assert!(out[1].ends_with(' '));
    }

    #[test]
    fn scatter_draws_only_points() {
        let graph = Graph::new(vec![1, 9, 1, 9]).with_graph_type(GraphType::Scatter);
        let out = graph.render_to_string().unwrap();
        assert!(out.contains('#'));
        let plot: String = out.lines().take(11).collect();
        assert!(!plot.contains('-'));
    }

    #[test]
    fn line_connects_neighbouring_points() {
        let graph = Graph::new(vec![10, 10, 10]).with_graph_type(GraphType::Line);
        let layout = graph.layout().unwrap();
        let out = lines(&graph);
        let row = (0..=layout.line_count())
            .find(|&y| out[y].contains('#'))
            .unwrap();
        let between = layout.sample_column(0) + 1;
        assert_eq!(out[row].chars().nth(between), Some('-'));
    }

    #[test]
    fn line_connectors_follow_interpolated_slope() {
        let settings = GraphSettings::default().with_min(0.0).with_max(10.0);
        let graph = Graph::with_settings(vec![0, 10, 0], settings).with_graph_type(GraphType::Line);
        let layout = graph.layout().unwrap();
        let out = lines(&graph);
        let at = |y: usize, x: usize| out[y].chars().nth(x);

        // row y shows value 10 - y; columns 9, 14, 18 hold the samples
        assert_eq!(
            (0..3).map(|i| layout.sample_column(i)).collect::<Vec<_>>(),
            [9, 14, 18]
        );
        assert_eq!(at(10, 9), Some('#'));
        assert_eq!(at(0, 14), Some('#'));
        assert_eq!(at(10, 18), Some('#'));

        // rising: 2, 4, 6, 8 at columns 10..=13
        assert_eq!(at(8, 10), Some('-'));
        assert_eq!(at(6, 11), Some('-'));
        assert_eq!(at(4, 12), Some('-'));
        assert_eq!(at(2, 13), Some('-'));
        // falling: only the midpoint lands on a row, 7.5 and 2.5 sit between rows
        assert_eq!(at(5, 16), Some('-'));
        assert_ne!(at(7, 15), Some('-'));
        assert_ne!(at(2, 17), Some('-'));

        let connectors: usize = out[..=layout.line_count()]
            .iter()
            .map(|l| l.chars().skip(layout.x0()).filter(|&c| c == '-').count())
            .sum();
        assert_eq!(connectors, 5);
    }

    #[test]
    fn empty_x_label_keeps_later_labels_in_place() {
        let settings = GraphSettings::new(
            |v: &i32| f64::from(*v),
            |v: &i32| if *v == 3 { String::new() } else { v.to_string() },
        );
        let graph = Graph::with_settings(vec![1, 2, 3, 4], settings);
        let layout = graph.layout().unwrap();
        let out = lines(&graph);
        let labels = out.last().unwrap();

        assert_eq!(labels.chars().count(), layout.line_width());
        assert_eq!(labels.chars().nth(layout.label_start(0)), Some('1'));
        assert_eq!(labels.chars().nth(layout.label_start(1)), Some('2'));
        assert_eq!(labels.chars().nth(layout.label_start(2)), Some(' '));
        assert_eq!(labels.chars().nth(layout.label_start(3)), Some('4'));
    }

    #[test]
    fn explicit_bounds_override_auto_bounds() {
        let settings = GraphSettings::default().with_min(0.0).with_max(100.0);
        let graph = Graph::with_settings(vec![50, 60], settings);
        assert_eq!(graph.layout().unwrap().bounds(), (0.0, 100.0));
    }

    #[test]
    fn custom_sample_types_use_getters() {
        struct Sale {
            month: &'static str,
            total: u32,
        }
        let settings = GraphSettings::new(|s: &Sale| f64::from(s.total), |s: &Sale| s.month.to_owned());
        let graph = Graph::with_settings(
            [Sale { month: "Jan", total: 4 }, Sale { month: "Feb", total: 8 }],
            settings,
        );
        let out = graph.render_to_string().unwrap();
        assert!(out.lines().last().unwrap().contains("Jan"));
    }

    #[test]
    fn pie_without_pie_formatting_fails_before_output() {
        let graph = Graph::new(vec![1, 2]).with_graph_type(GraphType::Pie);
        let mut sink = tabula_render::CaptureSink::new();
        let err = graph.render(&mut sink).unwrap_err();
        assert!(matches!(err, TabulaError::InvalidFormatting(_)));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn pagination_chunks_values() {
        use tabula_widgets::Pagination;
        let graph = Graph::new(1..=16);
        let pages = graph.paginate_default().unwrap();
        let sizes: Vec<_> = pages.pages().iter().map(|g| g.values().len()).collect();
        assert_eq!(sizes, [7, 7, 2]);
        assert!(graph.paginate(0).is_err());
    }
}
