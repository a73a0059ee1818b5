//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells representing what should be on
//! screen. Sections draw into it with the primitives below; the
//! differential renderer turns it into terminal output.
//!
//! Flat `Vec<Cell>` storage with row-major indexing keeps iteration cache
//! friendly. Every drawing function takes an optional clip `Rect` so
//! sliding content (the project carousel) can overflow without bleeding
//! into neighboring regions.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::{Attr, Cell, Rect, Rgba};

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells, indexed as `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Full buffer bounds.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Reset every cell to a solid background.
    pub fn clear_with_bg(&mut self, bg: Rgba) {
        for cell in &mut self.cells {
            cell.char = b' ' as u32;
            cell.fg = Rgba::TERMINAL_DEFAULT;
            cell.bg = bg;
            cell.attrs = Attr::NONE;
        }
    }

    /// Resize the buffer (clears content).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let size = width as usize * height as usize;
        self.cells.clear();
        self.cells.resize(size, Cell::default());
    }

    // =========================================================================
    // Drawing primitives
    // =========================================================================

    /// Set a single cell with optional clipping. `bg: None` keeps the
    /// cell's existing background so text layers over filled panels.
    ///
    /// Returns true if the cell was set.
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        char: u32,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        if let Some(clip) = clip {
            if !clip.contains(x, y) {
                return false;
            }
        }

        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];
        cell.char = char;
        cell.fg = fg;
        if let Some(bg) = bg {
            cell.bg = bg;
        }
        cell.attrs = attrs;
        true
    }

    /// Fill a rectangle with a background color, blanking its characters.
    pub fn fill_rect(&mut self, rect: Rect, bg: Rgba, clip: Option<&Rect>) {
        let bounded = match rect.intersect(&self.bounds()) {
            Some(r) => r,
            None => return,
        };
        let target = match clip {
            Some(clip) => match bounded.intersect(clip) {
                Some(r) => r,
                None => return,
            },
            None => bounded,
        };

        for row in target.y..target.bottom() {
            let start = self.index(target.x, row);
            let end = self.index(target.right(), row);
            for cell in &mut self.cells[start..end] {
                cell.char = b' ' as u32;
                cell.bg = bg;
                cell.attrs = Attr::NONE;
            }
        }
    }

    /// Draw a single character.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        char: char,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> bool {
        self.set_cell(x, y, char as u32, fg, bg, attrs, clip)
    }

    /// Draw text at a position.
    ///
    /// Returns the number of columns used. Wide characters (emoji, CJK)
    /// take two cells; the second is marked as a continuation (char 0) so
    /// the output stage skips it.
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }

            let char_width = ch.width().unwrap_or(0);
            if char_width == 0 {
                continue;
            }

            if self.set_cell(col, y, ch as u32, fg, bg, attrs, clip)
                && char_width == 2
                && col + 1 < self.width
                && clip.is_none_or(|c| c.contains(col + 1, y))
            {
                if let Some(next) = self.get_mut(col + 1, y) {
                    next.char = 0;
                    next.fg = fg;
                    if let Some(bg) = bg {
                        next.bg = bg;
                    }
                    next.attrs = attrs;
                }
            }

            col += char_width as u16;
        }

        col.saturating_sub(x)
    }

    /// Draw text centered within a width.
    pub fn draw_text_centered(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> u16 {
        let text_width = text.width();
        if text_width >= width as usize {
            return self.draw_text(x, y, text, fg, bg, attrs, clip);
        }
        let offset = ((width as usize - text_width) / 2) as u16;
        self.draw_text(x + offset, y, text, fg, bg, attrs, clip)
    }

    /// Draw text right-aligned within a width.
    pub fn draw_text_right(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> u16 {
        let text_width = text.width();
        if text_width >= width as usize {
            return self.draw_text(x, y, text, fg, bg, attrs, clip);
        }
        let offset = (width as usize - text_width) as u16;
        self.draw_text(x + offset, y, text, fg, bg, attrs, clip)
    }

    /// Draw a horizontal line.
    pub fn draw_hline(
        &mut self,
        x: u16,
        y: u16,
        length: u16,
        char: char,
        fg: Rgba,
        bg: Option<Rgba>,
        clip: Option<&Rect>,
    ) {
        for col in x..x.saturating_add(length).min(self.width) {
            self.draw_char(col, y, char, fg, bg, Attr::NONE, clip);
        }
    }

    /// Draw a rounded border around a rectangle.
    pub fn draw_border(&mut self, rect: Rect, color: Rgba, bg: Option<Rgba>, clip: Option<&Rect>) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }

        let x2 = rect.right() - 1;
        let y2 = rect.bottom() - 1;

        self.draw_char(rect.x, rect.y, '╭', color, bg, Attr::NONE, clip);
        self.draw_char(x2, rect.y, '╮', color, bg, Attr::NONE, clip);
        self.draw_char(x2, y2, '╯', color, bg, Attr::NONE, clip);
        self.draw_char(rect.x, y2, '╰', color, bg, Attr::NONE, clip);

        for col in (rect.x + 1)..x2 {
            self.draw_char(col, rect.y, '─', color, bg, Attr::NONE, clip);
            self.draw_char(col, y2, '─', color, bg, Attr::NONE, clip);
        }
        for row in (rect.y + 1)..y2 {
            self.draw_char(rect.x, row, '│', color, bg, Attr::NONE, clip);
            self.draw_char(x2, row, '│', color, bg, Attr::NONE, clip);
        }
    }

    /// Draw a progress bar.
    pub fn draw_progress(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        progress: f32,
        filled_fg: Rgba,
        empty_fg: Rgba,
        bg: Option<Rgba>,
        clip: Option<&Rect>,
    ) {
        let progress = progress.clamp(0.0, 1.0);
        let filled = (progress * width as f32).round() as u16;

        for col in 0..width {
            let (char, fg) = if col < filled {
                ('█', filled_fg)
            } else {
                ('░', empty_fg)
            };
            self.draw_char(x + col, y, char, fg, bg, Attr::NONE, clip);
        }
    }
}

/// Display width of a string in terminal columns.
pub fn string_width(s: &str) -> usize {
    s.width()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framebuffer_creation() {
        let buffer = FrameBuffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.get(79, 23).unwrap().char, b' ' as u32);
        assert!(buffer.get(80, 0).is_none());
    }

    #[test]
    fn test_set_cell() {
        let mut buffer = FrameBuffer::new(10, 10);
        buffer.set_cell(5, 5, 'X' as u32, Rgba::WHITE, Some(Rgba::BLACK), Attr::BOLD, None);

        let cell = buffer.get(5, 5).unwrap();
        assert_eq!(cell.char, 'X' as u32);
        assert_eq!(cell.fg, Rgba::WHITE);
        assert_eq!(cell.bg, Rgba::BLACK);
        assert_eq!(cell.attrs, Attr::BOLD);
    }

    #[test]
    fn test_set_cell_none_bg_preserves_background() {
        let mut buffer = FrameBuffer::new(10, 10);
        buffer.fill_rect(Rect::new(0, 0, 10, 10), Rgba::rgb(10, 10, 20), None);
        buffer.set_cell(3, 3, 'a' as u32, Rgba::WHITE, None, Attr::NONE, None);

        assert_eq!(buffer.get(3, 3).unwrap().bg, Rgba::rgb(10, 10, 20));
    }

    #[test]
    fn test_fill_rect_clamps_to_bounds() {
        let mut buffer = FrameBuffer::new(20, 20);
        buffer.fill_rect(Rect::new(15, 15, 10, 10), Rgba::rgb(0, 0, 255), None);

        assert_eq!(buffer.get(19, 19).unwrap().bg, Rgba::rgb(0, 0, 255));
        assert_eq!(buffer.get(14, 15).unwrap().bg, Rgba::TERMINAL_DEFAULT);
    }

    #[test]
    fn test_draw_text() {
        let mut buffer = FrameBuffer::new(20, 5);
        let used = buffer.draw_text(0, 0, "Hello", Rgba::WHITE, None, Attr::NONE, None);

        assert_eq!(used, 5);
        assert_eq!(buffer.get(0, 0).unwrap().char, 'H' as u32);
        assert_eq!(buffer.get(4, 0).unwrap().char, 'o' as u32);
    }

    #[test]
    fn test_draw_text_clips() {
        let mut buffer = FrameBuffer::new(20, 5);
        let clip = Rect::new(0, 0, 3, 5);
        buffer.draw_text(0, 0, "Hello", Rgba::WHITE, None, Attr::NONE, Some(&clip));

        assert_eq!(buffer.get(2, 0).unwrap().char, 'l' as u32);
        assert_eq!(buffer.get(3, 0).unwrap().char, b' ' as u32);
    }

    #[test]
    fn test_draw_text_wide_chars_use_continuation() {
        let mut buffer = FrameBuffer::new(10, 2);
        let used = buffer.draw_text(0, 0, "中", Rgba::WHITE, None, Attr::NONE, None);

        assert_eq!(used, 2);
        assert_eq!(buffer.get(0, 0).unwrap().char, '中' as u32);
        assert_eq!(buffer.get(1, 0).unwrap().char, 0);
    }

    #[test]
    fn test_draw_text_centered() {
        let mut buffer = FrameBuffer::new(11, 2);
        buffer.draw_text_centered(0, 0, 11, "abc", Rgba::WHITE, None, Attr::NONE, None);
        assert_eq!(buffer.get(4, 0).unwrap().char, 'a' as u32);
    }

    #[test]
    fn test_draw_border_corners() {
        let mut buffer = FrameBuffer::new(10, 5);
        buffer.draw_border(Rect::new(0, 0, 10, 5), Rgba::WHITE, None, None);

        assert_eq!(buffer.get(0, 0).unwrap().char, '╭' as u32);
        assert_eq!(buffer.get(9, 0).unwrap().char, '╮' as u32);
        assert_eq!(buffer.get(9, 4).unwrap().char, '╯' as u32);
        assert_eq!(buffer.get(0, 4).unwrap().char, '╰' as u32);
        assert_eq!(buffer.get(5, 0).unwrap().char, '─' as u32);
        assert_eq!(buffer.get(0, 2).unwrap().char, '│' as u32);
    }

    #[test]
    fn test_draw_progress() {
        let mut buffer = FrameBuffer::new(10, 1);
        buffer.draw_progress(0, 0, 10, 0.5, Rgba::WHITE, Rgba::BLACK, None, None);

        assert_eq!(buffer.get(4, 0).unwrap().char, '█' as u32);
        assert_eq!(buffer.get(5, 0).unwrap().char, '░' as u32);
    }

    #[test]
    fn test_resize_clears() {
        let mut buffer = FrameBuffer::new(5, 5);
        buffer.draw_text(0, 0, "x", Rgba::WHITE, None, Attr::NONE, None);
        buffer.resize(8, 3);

        assert_eq!(buffer.width(), 8);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.get(0, 0).unwrap().char, b' ' as u32);
    }

    #[test]
    fn test_string_width() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width("中文"), 4);
        assert_eq!(string_width("a中b"), 4);
    }
}
