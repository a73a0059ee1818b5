//! Experience section: the work timeline.

use unicode_width::UnicodeWidthStr;

use super::draw_paragraph;
use crate::content::EXPERIENCES;
use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::{Attr, Rect};

pub fn render(fb: &mut FrameBuffer, area: Rect, theme: &Theme) {
    let inner = area.inset(2);
    if inner.width < 30 || inner.height < 8 {
        return;
    }
    let mut y = inner.y;

    fb.draw_text(inner.x, y, "Experience", theme.text, None, Attr::BOLD, Some(&inner));
    y += 2;

    for exp in EXPERIENCES {
        if y + 3 >= inner.bottom() {
            break;
        }

        // Header line: company, role, duration right-aligned.
        fb.draw_text(inner.x, y, "◆ ", theme.primary, None, Attr::NONE, Some(&inner));
        let mut x = inner.x + 2;
        x += fb.draw_text(x, y, exp.company, theme.text, None, Attr::BOLD, Some(&inner));
        x += fb.draw_text(x, y, " · ", theme.muted, None, Attr::NONE, Some(&inner));
        fb.draw_text(x, y, exp.role, theme.secondary, None, Attr::NONE, Some(&inner));
        fb.draw_text_right(inner.x, y, inner.width, exp.duration, theme.muted, None, Attr::NONE, Some(&inner));
        y += 1;

        let meta = format!("  {} · {}", exp.location, exp.kind.label());
        fb.draw_text(inner.x, y, &meta, theme.muted, None, Attr::ITALIC, Some(&inner));
        y += 1;

        // First few highlights, wrapped under the header.
        for highlight in exp.highlights.iter().take(2) {
            if y >= inner.bottom() {
                break;
            }
            fb.draw_text(inner.x + 2, y, "- ", theme.muted, None, Attr::NONE, Some(&inner));
            let body = Rect::new(
                inner.x + 4,
                y,
                inner.width.saturating_sub(4).min(72),
                (inner.bottom() - y).min(2),
            );
            y += draw_paragraph(fb, body, highlight, theme.text, Attr::NONE).max(1);
        }

        // Tech chips.
        if y < inner.bottom() {
            let mut x = inner.x + 2;
            for tech in exp.technologies {
                let chip = format!("[{tech}]");
                if x + chip.width() as u16 > inner.right() {
                    break;
                }
                x += fb.draw_text(x, y, &chip, theme.secondary, None, Attr::DIM, Some(&inner));
                x += 1;
            }
            y += 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::aurora;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| char::from_u32(fb.get(x, y).unwrap().char).unwrap_or(' '))
            .collect()
    }

    #[test]
    fn test_renders_companies_in_order() {
        let mut fb = FrameBuffer::new(100, 40);
        let theme = aurora();
        render(&mut fb, Rect::new(0, 0, 100, 40), &theme);

        let screen: Vec<String> = (0..40).map(|y| row_text(&fb, y)).collect();
        let ford = screen.iter().position(|r| r.contains("Ford Motor Company"));
        let rocket = screen.iter().position(|r| r.contains("Rocket Mortgage"));
        let opentext = screen.iter().position(|r| r.contains("OpenText"));

        assert!(ford.is_some() && rocket.is_some() && opentext.is_some());
        assert!(ford < rocket && rocket < opentext);
    }

    #[test]
    fn test_duration_right_aligned() {
        let mut fb = FrameBuffer::new(100, 40);
        let theme = aurora();
        render(&mut fb, Rect::new(0, 0, 100, 40), &theme);

        let header = row_text(&fb, 4);
        assert!(header.trim_end().ends_with("Jul 2025 - Present"));
    }

    #[test]
    fn test_small_area_is_safe() {
        let mut fb = FrameBuffer::new(20, 4);
        let theme = aurora();
        render(&mut fb, Rect::new(0, 0, 20, 4), &theme);
    }
}
