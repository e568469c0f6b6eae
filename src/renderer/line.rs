//! Single-line status renderer.
//!
//! Redraws one terminal line in place on every update: cursor back to column
//! zero, clear the line, print the formatted value, flush once. Generic over
//! the output sink so tests can render into a `Vec<u8>`.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::bridge::Setter;
use crate::mount::Renderer;

/// Renders the cell value as one in-place terminal line.
pub struct LineRenderer<T, W: Write> {
    out: W,
    format: Box<dyn Fn(&T) -> String>,
}

impl<T, W: Write> LineRenderer<T, W> {
    /// Create a renderer writing to `out`, formatting values with `format`.
    pub fn new(out: W, format: impl Fn(&T) -> String + 'static) -> Self {
        LineRenderer {
            out,
            format: Box::new(format),
        }
    }

    /// Consume the renderer and return its sink.
    pub fn into_sink(self) -> W {
        self.out
    }
}

impl<T> LineRenderer<T, io::Stdout> {
    /// Create a renderer writing to stdout.
    pub fn stdout(format: impl Fn(&T) -> String + 'static) -> Self {
        LineRenderer::new(io::stdout(), format)
    }
}

impl<T, W: Write> Renderer<T> for LineRenderer<T, W> {
    fn render(&mut self, value: &T, _setter: &Setter<T>) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print((self.format)(value))
        )?;
        self.out.flush()
    }

    /// Move past the status line so later output starts fresh.
    fn teardown(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\n"))?;
        self.out.flush()
    }
}
