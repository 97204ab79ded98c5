//! Output sinks.
//!
//! A sink receives text in render order together with color changes. It never
//! sees layout: the four operations below are the whole contract.
//! - [`PlainSink`] keeps text only (for `to_string`-style output and exports)
//! - [`CaptureSink`] keeps text and colors per line (for tests)
//! - [`AnsiSink`](crate::AnsiSink) emits crossterm color commands to any
//!   `io::Write`

use std::io;

use tabula_style::ColorToken;

/// Destination for rendered glyph runs.
pub trait GlyphSink {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
    fn set_foreground(&mut self, color: ColorToken) -> io::Result<()>;
    fn reset_color(&mut self) -> io::Result<()>;
    fn newline(&mut self) -> io::Result<()>;
}

/// Collects text into a `String`, discarding colors.
#[derive(Debug, Clone, Default)]
pub struct PlainSink {
    out: String,
}

impl PlainSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.out
    }
}

impl GlyphSink for PlainSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.out.push_str(text);
        Ok(())
    }

    fn set_foreground(&mut self, _color: ColorToken) -> io::Result<()> {
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn newline(&mut self) -> io::Result<()> {
        self.out.push('\n');
        Ok(())
    }
}

/// A run of text written under one foreground color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRun {
    pub text: String,
    pub color: Option<ColorToken>,
}

/// One captured output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedLine {
    pub runs: Vec<CapturedRun>,
}

impl CapturedLine {
    /// Text of the line without colors.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Foreground of the character at column `x`.
    #[must_use]
    pub fn color_at(&self, x: usize) -> Option<ColorToken> {
        let mut col = 0;
        for run in &self.runs {
            let len = run.text.chars().count();
            if x < col + len {
                return run.color;
            }
            col += len;
        }
        None
    }
}

/// Records every run with its color, one entry per finished line.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Vec<CapturedLine>,
    current: CapturedLine,
    color: Option<ColorToken>,
}

impl CaptureSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed lines. Text written after the last newline is not included.
    #[must_use]
    pub fn lines(&self) -> &[CapturedLine] {
        &self.lines
    }

    /// Completed lines as plain strings.
    #[must_use]
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(CapturedLine::plain_text).collect()
    }
}

impl GlyphSink for CaptureSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        match self.current.runs.last_mut() {
            Some(last) if last.color == self.color => last.text.push_str(text),
            _ => self.current.runs.push(CapturedRun {
                text: text.to_owned(),
                color: self.color,
            }),
        }
        Ok(())
    }

    fn set_foreground(&mut self, color: ColorToken) -> io::Result<()> {
        self.color = Some(color);
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.color = None;
        Ok(())
    }

    fn newline(&mut self) -> io::Result<()> {
        self.lines.push(std::mem::take(&mut self.current));
        Ok(())
    }
}
