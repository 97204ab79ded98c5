//! Colored glyph lines and their presentation to a sink.

use std::io;

use tabula_style::ColorToken;

use crate::sink::GlyphSink;

/// One character cell with its requested foreground.
///
/// `None` means "terminal default": the sink is reset rather than recolored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: Option<ColorToken>,
}

impl Glyph {
    #[must_use]
    pub const fn new(ch: char, color: Option<ColorToken>) -> Self {
        Self { ch, color }
    }

    #[must_use]
    pub const fn colored(ch: char, color: ColorToken) -> Self {
        Self {
            ch,
            color: Some(color),
        }
    }
}

/// A single output line, built left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphLine {
    glyphs: Vec<Glyph>,
}

impl GlyphLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            glyphs: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, ch: char, color: Option<ColorToken>) {
        self.glyphs.push(Glyph::new(ch, color));
    }

    pub fn push_str(&mut self, text: &str, color: Option<ColorToken>) {
        self.glyphs.extend(text.chars().map(|ch| Glyph::new(ch, color)));
    }

    pub fn push_repeat(&mut self, ch: char, count: usize, color: Option<ColorToken>) {
        self.glyphs
            .extend(std::iter::repeat_n(Glyph::new(ch, color), count));
    }

    /// Overwrite the glyph at column `x`. Out-of-range columns are ignored.
    pub fn set(&mut self, x: usize, glyph: Glyph) {
        if let Some(slot) = self.glyphs.get_mut(x) {
            *slot = glyph;
        }
    }

    #[must_use]
    pub fn get(&self, x: usize) -> Option<Glyph> {
        self.glyphs.get(x).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// The characters of this line without colors.
    #[must_use]
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.ch).collect()
    }

    /// Write this line as color runs followed by a newline.
    pub fn present(&self, sink: &mut dyn GlyphSink) -> io::Result<()> {
        let mut current: Option<ColorToken> = None;
        let mut run = String::new();

        for glyph in &self.glyphs {
            if glyph.color != current {
                if !run.is_empty() {
                    sink.write_text(&run)?;
                    run.clear();
                }
                match glyph.color {
                    Some(color) => sink.set_foreground(color)?,
                    None => sink.reset_color()?,
                }
                current = glyph.color;
            }
            run.push(glyph.ch);
        }

        if !run.is_empty() {
            sink.write_text(&run)?;
        }
        if current.is_some() {
            sink.reset_color()?;
        }
        sink.newline()
    }
}

/// A full render result: lines in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    lines: Vec<GlyphLine>,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: GlyphLine) {
        self.lines.push(line);
    }

    #[must_use]
    pub fn lines(&self) -> &[GlyphLine] {
        &self.lines
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Write every line to `sink`, top to bottom.
    pub fn present(&self, sink: &mut dyn GlyphSink) -> io::Result<()> {
        for line in &self.lines {
            line.present(sink)?;
        }
        Ok(())
    }

    /// All lines joined with `\n` (each line terminated), colors dropped.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.extend(line.glyphs.iter().map(|g| g.ch));
            out.push('\n');
        }
        out
    }
}

impl Extend<GlyphLine> for Canvas {
    fn extend<I: IntoIterator<Item = GlyphLine>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}
