//! Output buffering and stateful cell rendering.
//!
//! Terminal output is optimized two ways: all writes for a frame are
//! accumulated into one buffer and flushed in a single syscall, and a
//! small state machine tracks the last cursor position, colors, and
//! attributes so redundant escape codes are never emitted.

use std::io::{self, Write};

use super::ansi;
use crate::types::{Attr, Cell, Rgba};

// =============================================================================
// OutputBuffer
// =============================================================================

/// A buffer that accumulates output for batch writing.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16384)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear without deallocating.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a unicode codepoint. Invalid codepoints are dropped.
    #[inline]
    pub fn write_codepoint(&mut self, cp: u32) {
        if let Some(c) = char::from_u32(cp) {
            self.write_char(c);
        }
    }

    /// Flush everything to stdout in one write.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.data)?;
        stdout.flush()?;
        self.data.clear();
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Buffering only; the real flush is flush_stdout.
        Ok(())
    }
}

// =============================================================================
// StatefulCellRenderer
// =============================================================================

/// Renders cells while tracking terminal state to minimize output.
///
/// Tracks the last cursor position, colors, and attributes; when a cell
/// is rendered, only escape codes for state that actually changed are
/// emitted.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    last_x: i32,
    last_y: i32,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    /// Reset all tracked state. Call at the start of each frame.
    pub fn reset(&mut self) {
        self.last_x = -1;
        self.last_y = -1;
        self.last_fg = None;
        self.last_bg = None;
        self.last_attrs = Attr::NONE;
    }

    /// Render a single cell, emitting only the escape codes whose state
    /// differs from the previous cell.
    pub fn render_cell(&mut self, output: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) {
        // Continuation cells (wide character placeholders) emit nothing.
        if cell.char == 0 {
            self.last_x = x as i32;
            self.last_y = y as i32;
            return;
        }

        // Cursor movement, skipped when cells are sequential.
        if y as i32 != self.last_y || x as i32 != self.last_x + 1 {
            ansi::cursor_to(output, x, y).ok();
        }

        // Attribute change forces a reset, which also clears colors.
        if cell.attrs != self.last_attrs {
            ansi::reset(output).ok();
            if !cell.attrs.is_empty() {
                ansi::attrs(output, cell.attrs).ok();
            }
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }

        if self.last_fg != Some(cell.fg) {
            ansi::fg(output, cell.fg).ok();
            self.last_fg = Some(cell.fg);
        }
        if self.last_bg != Some(cell.bg) {
            ansi::bg(output, cell.bg).ok();
            self.last_bg = Some(cell.bg);
        }

        output.write_codepoint(cell.char);

        self.last_x = x as i32;
        self.last_y = y as i32;
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_buffer_write() {
        let mut buf = OutputBuffer::new();
        buf.write_str("hello");
        buf.write_char(' ');
        buf.write_str("world");
        assert_eq!(buf.as_str().as_ref(), "hello world");
    }

    #[test]
    fn test_output_buffer_clear() {
        let mut buf = OutputBuffer::new();
        buf.write_str("test");
        assert!(!buf.is_empty());
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_stateful_renderer_skips_sequential() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();

        let cell = Cell {
            char: 'A' as u32,
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            attrs: Attr::NONE,
        };

        renderer.render_cell(&mut output, 0, 0, &cell);
        let first_len = output.len();

        output.clear();
        renderer.render_cell(&mut output, 1, 0, &cell);
        let second_len = output.len();

        // No cursor move, no color change
        assert!(second_len < first_len);
    }

    #[test]
    fn test_stateful_renderer_skips_same_colors() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();

        let cell = Cell {
            char: 'X' as u32,
            fg: Rgba::rgb(255, 0, 0),
            bg: Rgba::rgb(0, 0, 255),
            attrs: Attr::NONE,
        };

        renderer.render_cell(&mut output, 0, 0, &cell);
        let first_len = output.len();

        // Non-sequential position, same colors: cursor move only.
        output.clear();
        renderer.render_cell(&mut output, 5, 0, &cell);
        assert!(output.len() < first_len);
    }

    #[test]
    fn test_continuation_cell_emits_nothing() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();

        let continuation = Cell {
            char: 0,
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            attrs: Attr::NONE,
        };

        renderer.render_cell(&mut output, 0, 0, &continuation);
        assert!(output.is_empty());
    }
}
