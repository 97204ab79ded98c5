//! Glyph and color sets for charts.

use crate::color::ColorToken;

/// Glyphs and colors used by the bar, line, and scatter renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GraphFormatting {
    /// Background of plot cells on rows between y ticks.
    pub empty_point: char,
    pub horizontal_line: char,
    pub vertical_line: char,
    pub origin: char,
    pub x_axis_tick: char,
    pub y_axis_tick: char,
    /// Background of plot cells on y tick rows.
    pub y_axis_tick_line: char,
    /// Bar fill, data point, or pie slice glyph.
    pub graph_icon: char,
    /// Connector between data points on line charts.
    pub graph_line: char,

    pub y_axis_color: ColorToken,
    pub x_axis_color: ColorToken,
    pub graph_icon_color: ColorToken,
    pub empty_point_color: ColorToken,
    pub y_axis_tick_line_color: ColorToken,
    pub y_axis_label_color: ColorToken,
    pub x_axis_label_color: ColorToken,
    pub x_axis_tick_color: ColorToken,
}

impl GraphFormatting {
    pub const DEFAULT: Self = Self {
        empty_point: ' ',
        horizontal_line: '-',
        vertical_line: '|',
        origin: 'O',
        x_axis_tick: '+',
        y_axis_tick: '+',
        y_axis_tick_line: '.',
        graph_icon: '#',
        graph_line: '-',
        y_axis_color: ColorToken::Gray,
        x_axis_color: ColorToken::Gray,
        graph_icon_color: ColorToken::Yellow,
        empty_point_color: ColorToken::DarkGray,
        y_axis_tick_line_color: ColorToken::DarkGray,
        y_axis_label_color: ColorToken::White,
        x_axis_label_color: ColorToken::White,
        x_axis_tick_color: ColorToken::White,
    };

    #[must_use]
    pub const fn with_graph_icon(mut self, icon: char) -> Self {
        self.graph_icon = icon;
        self
    }

    #[must_use]
    pub const fn with_graph_line(mut self, line: char) -> Self {
        self.graph_line = line;
        self
    }

    #[must_use]
    pub const fn with_empty_point(mut self, empty: char) -> Self {
        self.empty_point = empty;
        self
    }

    #[must_use]
    pub const fn with_y_axis_tick_line(mut self, tick_line: char) -> Self {
        self.y_axis_tick_line = tick_line;
        self
    }

    #[must_use]
    pub const fn with_graph_icon_color(mut self, color: ColorToken) -> Self {
        self.graph_icon_color = color;
        self
    }
}

impl Default for GraphFormatting {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Formatting for pie charts: the base glyph set plus the polar raster
/// parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct PieGraphFormatting {
    pub base: GraphFormatting,
    /// Slice colors, assigned by slice index modulo length.
    pub palette: Vec<ColorToken>,
    /// Height of the circle in rows from center to edge.
    pub radius: usize,
    /// Slices whose share of the total is below this fraction are merged
    /// into one "Other" slice, provided at least two of them qualify.
    pub group_threshold: f64,
    pub show_legend: bool,
    pub center_char: char,
    /// Columns per row unit; compensates for character cells being taller
    /// than they are wide.
    pub horizontal_stretch: f64,
}

impl PieGraphFormatting {
    pub const DEFAULT_PALETTE: [ColorToken; 10] = [
        ColorToken::Red,
        ColorToken::Green,
        ColorToken::Blue,
        ColorToken::Yellow,
        ColorToken::Cyan,
        ColorToken::Magenta,
        ColorToken::DarkRed,
        ColorToken::DarkGreen,
        ColorToken::DarkBlue,
        ColorToken::DarkYellow,
    ];

    #[must_use]
    pub fn with_base(mut self, base: GraphFormatting) -> Self {
        self.base = base;
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_group_threshold(mut self, threshold: f64) -> Self {
        self.group_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: impl IntoIterator<Item = ColorToken>) -> Self {
        self.palette = palette.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    #[must_use]
    pub fn with_center_char(mut self, center: char) -> Self {
        self.center_char = center;
        self
    }

    #[must_use]
    pub fn with_horizontal_stretch(mut self, stretch: f64) -> Self {
        self.horizontal_stretch = stretch;
        self
    }

    /// Color of slice `index`, cycling through the palette.
    #[must_use]
    pub fn slice_color(&self, index: usize) -> ColorToken {
        if self.palette.is_empty() {
            self.base.graph_icon_color
        } else {
            self.palette[index % self.palette.len()]
        }
    }
}

impl Default for PieGraphFormatting {
    fn default() -> Self {
        Self {
            base: GraphFormatting::DEFAULT,
            palette: Self::DEFAULT_PALETTE.to_vec(),
            radius: 10,
            group_threshold: 0.05,
            show_legend: true,
            center_char: ' ',
            horizontal_stretch: 2.0,
        }
    }
}

/// Formatting attached to a graph: the base set, or the pie extension.
///
/// Bar, line, and scatter charts accept either variant (pie formatting
/// contributes its base glyphs). Pie charts require [`AnyGraphFormatting::Pie`].
#[derive(Clone, Debug, PartialEq)]
pub enum AnyGraphFormatting {
    Base(GraphFormatting),
    Pie(PieGraphFormatting),
}

impl AnyGraphFormatting {
    /// The glyph/color set shared by every chart type.
    #[must_use]
    pub fn base(&self) -> &GraphFormatting {
        match self {
            Self::Base(base) => base,
            Self::Pie(pie) => &pie.base,
        }
    }

    /// The pie extension, if present.
    #[must_use]
    pub fn as_pie(&self) -> Option<&PieGraphFormatting> {
        match self {
            Self::Base(_) => None,
            Self::Pie(pie) => Some(pie),
        }
    }
}

impl Default for AnyGraphFormatting {
    fn default() -> Self {
        Self::Base(GraphFormatting::DEFAULT)
    }
}

impl From<GraphFormatting> for AnyGraphFormatting {
    fn from(base: GraphFormatting) -> Self {
        Self::Base(base)
    }
}

impl From<PieGraphFormatting> for AnyGraphFormatting {
    fn from(pie: PieGraphFormatting) -> Self {
        Self::Pie(pie)
    }
}
