//! ANSI terminal sink backed by crossterm.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use tabula_style::ColorToken;

use crate::sink::GlyphSink;

/// Map a color token onto crossterm's named 16-color palette.
#[must_use]
pub const fn to_crossterm(color: ColorToken) -> Color {
    match color {
        ColorToken::Black => Color::Black,
        ColorToken::DarkBlue => Color::DarkBlue,
        ColorToken::DarkGreen => Color::DarkGreen,
        ColorToken::DarkCyan => Color::DarkCyan,
        ColorToken::DarkRed => Color::DarkRed,
        ColorToken::DarkMagenta => Color::DarkMagenta,
        ColorToken::DarkYellow => Color::DarkYellow,
        ColorToken::Gray => Color::Grey,
        ColorToken::DarkGray => Color::DarkGrey,
        ColorToken::Blue => Color::Blue,
        ColorToken::Green => Color::Green,
        ColorToken::Cyan => Color::Cyan,
        ColorToken::Red => Color::Red,
        ColorToken::Magenta => Color::Magenta,
        ColorToken::Yellow => Color::Yellow,
        ColorToken::White => Color::White,
    }
}

/// Writes glyph runs as crossterm commands to any writer.
///
/// Commands are queued, not executed; call [`AnsiSink::flush`] (or drop the
/// sink over a line-buffered writer) to push them out.
pub struct AnsiSink<W: Write> {
    writer: W,
}

impl<W: Write> AnsiSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl AnsiSink<io::Stdout> {
    /// Sink over the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> GlyphSink for AnsiSink<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        queue!(self.writer, Print(text))
    }

    fn set_foreground(&mut self, color: ColorToken) -> io::Result<()> {
        queue!(self.writer, SetForegroundColor(to_crossterm(color)))
    }

    fn reset_color(&mut self) -> io::Result<()> {
        queue!(self.writer, ResetColor)
    }

    fn newline(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")
    }
}
