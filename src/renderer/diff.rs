//! Differential renderer for fullscreen mode.
//!
//! Compares the current frame to the previous one and only outputs cells
//! that changed, wrapped in a synchronized-output block so the terminal
//! applies each frame atomically. With the portfolio's animations this
//! typically reduces a frame to a few dozen cells.

use std::io;

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

/// Diff-based frame renderer. Keeps the previous frame for comparison.
pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if anything was written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;

        ansi::begin_sync(&mut self.output)?;
        self.cell_renderer.reset();

        let width = buffer.width();
        let height = buffer.height();
        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|p| p.width() == width && p.height() == height);

        for y in 0..height {
            for x in 0..width {
                let cell = match buffer.get(x, y) {
                    Some(c) => c,
                    None => continue,
                };

                let changed = if same_size {
                    self.previous
                        .as_ref()
                        .and_then(|p| p.get(x, y))
                        .is_none_or(|prev| prev != cell)
                } else {
                    true
                };

                if changed {
                    has_changes = true;
                    self.cell_renderer.render_cell(&mut self.output, x, y, cell);
                }
            }
        }

        ansi::end_sync(&mut self.output)?;
        self.output.flush_stdout()?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Drop the previous frame so the next render repaints everything.
    /// Call after a terminal resize.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}
