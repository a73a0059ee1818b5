//! Skills section: category panels plus three marquee rows.
//!
//! The marquee is pure arithmetic over virtual time: each row scrolls a
//! duplicated strip of skill chips, alternating direction and speed, so
//! no timer state is needed - the frame clock drives it.

use unicode_width::UnicodeWidthStr;

use crate::content::SKILL_CATEGORIES;
use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::{Attr, Rect};

/// Snapshot for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillsView {
    pub clock: u64,
    /// Freeze marquee drift entirely.
    pub reduced_motion: bool,
}

/// Cells per second for each marquee row. Odd rows run backwards.
const ROW_SPEEDS: [u64; 3] = [6, 9, 7];

/// One marquee row's text: chips of two consecutive categories joined,
/// with a trailing separator so the loop seam reads cleanly.
fn row_strip(row: usize) -> String {
    let mut s = String::new();
    for cat in SKILL_CATEGORIES.iter().skip(row * 2).take(2) {
        for skill in cat.skills {
            s.push_str(skill);
            s.push_str("  ·  ");
        }
    }
    s
}

/// Offset in cells of a marquee row at virtual time `clock`.
fn row_offset(row: usize, clock: u64, strip_width: usize) -> usize {
    if strip_width == 0 {
        return 0;
    }
    (clock * ROW_SPEEDS[row % ROW_SPEEDS.len()] / 1000) as usize % strip_width
}

pub fn render(fb: &mut FrameBuffer, area: Rect, theme: &Theme, view: &SkillsView) {
    let inner = area.inset(2);
    if inner.width < 20 || inner.height < 10 {
        return;
    }
    let mut y = inner.y;

    fb.draw_text(inner.x, y, "Skills", theme.text, None, Attr::BOLD, Some(&inner));
    y += 2;

    // Marquee rows.
    for row in 0..3 {
        if y >= inner.bottom() {
            break;
        }
        let strip = row_strip(row);
        let strip_width = strip.width();
        if strip_width == 0 {
            continue;
        }

        let offset = if view.reduced_motion {
            0
        } else {
            row_offset(row, view.clock, strip_width)
        };

        // Duplicate the strip and take a window starting at the offset.
        // Odd rows scroll the opposite way.
        let doubled: Vec<char> = strip.chars().chain(strip.chars()).collect();
        let start = if row % 2 == 0 {
            offset
        } else {
            strip_width - offset
        };
        let window: String = doubled
            .iter()
            .skip(start.min(doubled.len()))
            .take(inner.width as usize)
            .collect();

        let accent = SKILL_CATEGORIES[(row * 2) % SKILL_CATEGORIES.len()].accent;
        fb.draw_text(inner.x, y, &window, theme.accent(accent), None, Attr::NONE, Some(&inner));
        y += 2;
    }

    // Category panels with skill chips, as many as fit.
    for cat in SKILL_CATEGORIES {
        if y + 2 >= inner.bottom() {
            break;
        }
        fb.draw_text(inner.x, y, cat.title, theme.accent(cat.accent), None, Attr::BOLD, Some(&inner));
        y += 1;

        let mut x = inner.x + 2;
        for skill in cat.skills {
            let chip = format!("[{skill}]");
            if x + chip.width() as u16 > inner.right() {
                break;
            }
            x += fb.draw_text(x, y, &chip, theme.text, None, Attr::DIM, Some(&inner));
            x += 1;
        }
        y += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::aurora;

    #[test]
    fn test_row_offset_wraps() {
        let width = row_strip(0).width();
        assert!(width > 0);
        assert_eq!(row_offset(0, 0, width), 0);
        // One full loop returns to the start.
        let loop_ms = width as u64 * 1000 / ROW_SPEEDS[0];
        assert_eq!(row_offset(0, loop_ms, width), 0);
        assert_ne!(row_offset(0, loop_ms / 2, width), 0);
    }

    #[test]
    fn test_rows_drift_at_different_speeds() {
        let w0 = row_strip(0).width();
        let w1 = row_strip(1).width();
        let a = row_offset(0, 5000, w0);
        let b = row_offset(1, 5000, w1);
        assert_ne!(a * w1, b * w0);
    }

    #[test]
    fn test_reduced_motion_freezes_marquee() {
        let theme = aurora();
        let area = Rect::new(0, 0, 80, 30);

        let frame = |clock, reduced| {
            let mut fb = FrameBuffer::new(80, 30);
            render(&mut fb, area, &theme, &SkillsView { clock, reduced_motion: reduced });
            (0..30)
                .map(|y| {
                    (0..80)
                        .map(|x| char::from_u32(fb.get(x, y).unwrap().char).unwrap_or(' '))
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(frame(0, true), frame(8000, true));
        assert_ne!(frame(0, false), frame(8000, false));
    }

    #[test]
    fn test_small_area_is_safe() {
        let mut fb = FrameBuffer::new(15, 5);
        let theme = aurora();
        render(&mut fb, Rect::new(0, 0, 15, 5), &theme, &SkillsView { clock: 123, reduced_motion: false });
    }
}
