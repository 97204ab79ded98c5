//! Console color tokens.

use std::fmt;

/// One of the sixteen classic console colors.
///
/// Renderers only request a token per glyph; how the token reaches a terminal
/// (SGR codes, crossterm commands, nothing at all for plain text) is decided
/// by the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorToken {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    #[default]
    White,
}

impl ColorToken {
    /// All tokens in console palette order.
    pub const ALL: [ColorToken; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkCyan,
        Self::DarkRed,
        Self::DarkMagenta,
        Self::DarkYellow,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Cyan,
        Self::Red,
        Self::Magenta,
        Self::Yellow,
        Self::White,
    ];

    /// Human-readable name, e.g. `"dark-gray"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark-blue",
            Self::DarkGreen => "dark-green",
            Self::DarkCyan => "dark-cyan",
            Self::DarkRed => "dark-red",
            Self::DarkMagenta => "dark-magenta",
            Self::DarkYellow => "dark-yellow",
            Self::Gray => "gray",
            Self::DarkGray => "dark-gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Red => "red",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    /// Classic console palette value as `(r, g, b)`.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Black => (0, 0, 0),
            Self::DarkBlue => (0, 0, 128),
            Self::DarkGreen => (0, 128, 0),
            Self::DarkCyan => (0, 128, 128),
            Self::DarkRed => (128, 0, 0),
            Self::DarkMagenta => (128, 0, 128),
            Self::DarkYellow => (128, 128, 0),
            Self::Gray => (192, 192, 192),
            Self::DarkGray => (128, 128, 128),
            Self::Blue => (0, 0, 255),
            Self::Green => (0, 255, 0),
            Self::Cyan => (0, 255, 255),
            Self::Red => (255, 0, 0),
            Self::Magenta => (255, 0, 255),
            Self::Yellow => (255, 255, 0),
            Self::White => (255, 255, 255),
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
