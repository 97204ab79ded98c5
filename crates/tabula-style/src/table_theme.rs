//! Table border themes and preset definitions.

use crate::color::ColorToken;

/// Built-in table preset identifiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TablePreset {
    Default,
    Ascii,
    DoubleLined,
    SingleLined,
    Minimalist,
}

/// The eleven glyphs needed to draw a grid of boxes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_middle: char,
    pub top_right: char,
    pub left_middle: char,
    pub middle: char,
    pub right_middle: char,
    pub bottom_left: char,
    pub bottom_middle: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderGlyphs {
    /// `┌─┬─┐` light box drawing.
    pub const SINGLE: Self = Self {
        top_left: '┌',
        top_middle: '┬',
        top_right: '┐',
        left_middle: '├',
        middle: '┼',
        right_middle: '┤',
        bottom_left: '└',
        bottom_middle: '┴',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// `╔═╦═╗` double box drawing.
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_middle: '╦',
        top_right: '╗',
        left_middle: '╠',
        middle: '╬',
        right_middle: '╣',
        bottom_left: '╚',
        bottom_middle: '╩',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    /// `+-+` and `|` only.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_middle: '+',
        top_right: '+',
        left_middle: '+',
        middle: '+',
        right_middle: '+',
        bottom_left: '+',
        bottom_middle: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };

    /// Every glyph is `fill`.
    #[must_use]
    pub const fn uniform(fill: char) -> Self {
        Self {
            top_left: fill,
            top_middle: fill,
            top_right: fill,
            left_middle: fill,
            middle: fill,
            right_middle: fill,
            bottom_left: fill,
            bottom_middle: fill,
            bottom_right: fill,
            horizontal: fill,
            vertical: fill,
        }
    }

    /// Copy with a different vertical glyph.
    #[must_use]
    pub const fn with_vertical(mut self, vertical: char) -> Self {
        self.vertical = vertical;
        self
    }

    /// `(left, junction, right)` for the top edge.
    #[must_use]
    pub const fn top(&self) -> (char, char, char) {
        (self.top_left, self.top_middle, self.top_right)
    }

    /// `(left, junction, right)` for a divider between two rows.
    #[must_use]
    pub const fn middle_row(&self) -> (char, char, char) {
        (self.left_middle, self.middle, self.right_middle)
    }

    /// `(left, junction, right)` for the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> (char, char, char) {
        (self.bottom_left, self.bottom_middle, self.bottom_right)
    }
}

/// Border glyphs and flags for the header block.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct HeaderFormatting {
    pub glyphs: BorderGlyphs,
    pub divider_color: ColorToken,
    /// Draw a divider above the header row.
    pub has_top_divider: bool,
    /// Close the header block with its own bottom edge and open the body with
    /// a fresh top edge, instead of sharing one middle divider.
    pub separated: bool,
}

impl HeaderFormatting {
    #[must_use]
    pub const fn new(glyphs: BorderGlyphs, divider_color: ColorToken) -> Self {
        Self {
            glyphs,
            divider_color,
            has_top_divider: true,
            separated: false,
        }
    }

    #[must_use]
    pub const fn with_top_divider(mut self, has_top_divider: bool) -> Self {
        self.has_top_divider = has_top_divider;
        self
    }

    #[must_use]
    pub const fn with_separated(mut self, separated: bool) -> Self {
        self.separated = separated;
        self
    }
}

impl Default for HeaderFormatting {
    fn default() -> Self {
        Self::new(BorderGlyphs::DOUBLE, ColorToken::White)
    }
}

/// Border glyphs and colors for a whole table.
///
/// Values are immutable by convention: the `with_*` methods return modified
/// copies, so a preset constant can be tweaked without affecting other users.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TableFormatting {
    pub glyphs: BorderGlyphs,
    pub divider_color: ColorToken,
    pub header: HeaderFormatting,
}

impl TableFormatting {
    /// Light single-line body under a white double-line header.
    pub const DEFAULT: Self = Self {
        glyphs: BorderGlyphs::SINGLE,
        divider_color: ColorToken::DarkGray,
        header: HeaderFormatting::new(BorderGlyphs::DOUBLE, ColorToken::White),
    };

    /// Plain ASCII borders for terminals without box-drawing glyphs.
    pub const ASCII: Self = Self {
        glyphs: BorderGlyphs::ASCII,
        divider_color: ColorToken::Gray,
        header: HeaderFormatting::new(BorderGlyphs::ASCII, ColorToken::White),
    };

    /// Double lines everywhere.
    pub const DOUBLE_LINED: Self = Self {
        glyphs: BorderGlyphs::DOUBLE,
        divider_color: ColorToken::DarkGray,
        header: HeaderFormatting::new(BorderGlyphs::DOUBLE, ColorToken::White),
    };

    /// Single lines everywhere.
    pub const SINGLE_LINED: Self = Self {
        glyphs: BorderGlyphs::SINGLE,
        divider_color: ColorToken::DarkGray,
        header: HeaderFormatting::new(BorderGlyphs::SINGLE, ColorToken::White),
    };

    /// Invisible body borders with a dashed rule under the header.
    pub const MINIMALIST: Self = Self {
        glyphs: BorderGlyphs::uniform(' '),
        divider_color: ColorToken::DarkGray,
        header: HeaderFormatting::new(BorderGlyphs::uniform('─').with_vertical(' '), ColorToken::White)
            .with_top_divider(false),
    };

    /// Look up a preset by id.
    #[must_use]
    pub const fn preset(id: TablePreset) -> Self {
        match id {
            TablePreset::Default => Self::DEFAULT,
            TablePreset::Ascii => Self::ASCII,
            TablePreset::DoubleLined => Self::DOUBLE_LINED,
            TablePreset::SingleLined => Self::SINGLE_LINED,
            TablePreset::Minimalist => Self::MINIMALIST,
        }
    }

    #[must_use]
    pub const fn with_glyphs(mut self, glyphs: BorderGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    #[must_use]
    pub const fn with_divider_color(mut self, color: ColorToken) -> Self {
        self.divider_color = color;
        self
    }

    #[must_use]
    pub const fn with_header(mut self, header: HeaderFormatting) -> Self {
        self.header = header;
        self
    }

    /// Copy with the header block detached from the body.
    #[must_use]
    pub const fn separated(mut self, separated: bool) -> Self {
        self.header.separated = separated;
        self
    }
}

impl Default for TableFormatting {
    fn default() -> Self {
        Self::DEFAULT
    }
}
