#![forbid(unsafe_code)]

//! Rendering kernel for Tabula.
//!
//! Renderers never talk to a terminal directly. They rasterize into a
//! [`Canvas`] of colored glyphs, and the canvas is then presented to a
//! [`GlyphSink`] strictly top-to-bottom, left-to-right. Building the whole
//! canvas first means every validation error surfaces before the first
//! byte reaches the sink.
//!
//! # Example
//! ```
//! use tabula_render::{Canvas, GlyphLine, PlainSink};
//! use tabula_style::ColorToken;
//!
//! let mut line = GlyphLine::new();
//! line.push_str("ok", Some(ColorToken::Green));
//!
//! let mut canvas = Canvas::new();
//! canvas.push_line(line);
//!
//! let mut sink = PlainSink::new();
//! canvas.present(&mut sink).unwrap();
//! assert_eq!(sink.into_string(), "ok\n");
//! ```

pub mod canvas;
pub mod sink;
#[cfg(feature = "crossterm")]
pub mod terminal;

pub use canvas::{Canvas, Glyph, GlyphLine};
pub use sink::{CaptureSink, CapturedLine, CapturedRun, GlyphSink, PlainSink};
#[cfg(feature = "crossterm")]
pub use terminal::AnsiSink;

use tabula_core::Result;

/// Something that can be drawn as colored text.
///
/// Implementors only provide [`Render::to_canvas`]; presenting to a sink and
/// producing a plain string come for free. A render is a pure function of the
/// implementor's current state, so it may be repeated after settings change.
pub trait Render {
    /// Rasterize into a canvas without writing anywhere.
    fn to_canvas(&self) -> Result<Canvas>;

    /// Rasterize, then write to `sink`.
    fn render(&self, sink: &mut dyn GlyphSink) -> Result<()> {
        let canvas = self.to_canvas()?;
        canvas.present(sink)?;
        Ok(())
    }

    /// Rasterize into a plain string with no color codes.
    fn render_to_string(&self) -> Result<String> {
        Ok(self.to_canvas()?.to_plain_string())
    }
}
