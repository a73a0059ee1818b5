//! Education section: degree, the eased GPA reveal, coursework.

use unicode_width::UnicodeWidthStr;

use super::draw_paragraph;
use crate::content::{ACHIEVEMENTS, COURSEWORK, EDUCATION};
use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::{Attr, Rect};

/// Snapshot of the GPA counter for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EducationView {
    pub gpa: f64,
}

pub fn render(fb: &mut FrameBuffer, area: Rect, theme: &Theme, view: &EducationView) {
    let inner = area.inset(2);
    if inner.width < 30 || inner.height < 10 {
        return;
    }
    let mut y = inner.y;

    fb.draw_text(inner.x, y, "Education", theme.text, None, Attr::BOLD, Some(&inner));
    y += 2;

    fb.draw_text(inner.x, y, EDUCATION.institution, theme.text, None, Attr::BOLD, Some(&inner));
    y += 1;
    fb.draw_text(inner.x, y, EDUCATION.degree, theme.primary, None, Attr::NONE, Some(&inner));
    y += 1;
    let meta = format!("{} · {}", EDUCATION.graduated, EDUCATION.location);
    fb.draw_text(inner.x, y, &meta, theme.muted, None, Attr::NONE, Some(&inner));
    y += 2;

    let desc_width = inner.width.saturating_sub(16).min(60);
    let desc_area = Rect::new(inner.x, y, desc_width, inner.bottom().saturating_sub(y));
    let desc_lines = draw_paragraph(fb, desc_area, EDUCATION.description, theme.text, Attr::NONE);

    // GPA card to the right of the description.
    let card = Rect::new(inner.right().saturating_sub(14), inner.y + 2, 14, 5);
    if card.intersect(&inner).is_some() {
        fb.draw_border(card, theme.border, None, Some(&inner));
        fb.draw_text_centered(card.x + 1, card.y + 1, card.width - 2, "GPA", theme.muted, None, Attr::NONE, Some(&inner));
        let value = format!("{:.2}", view.gpa);
        fb.draw_text_centered(card.x + 1, card.y + 2, card.width - 2, &value, theme.primary, None, Attr::BOLD, Some(&inner));
        fb.draw_progress(
            card.x + 2,
            card.y + 3,
            card.width - 4,
            (view.gpa / 4.0) as f32,
            theme.primary,
            theme.border,
            None,
            Some(&inner),
        );
    }

    y += desc_lines + 1;

    if y < inner.bottom() {
        fb.draw_text(inner.x, y, "Coursework", theme.secondary, None, Attr::BOLD, Some(&inner));
        y += 1;
        let mut x = inner.x + 2;
        for course in COURSEWORK {
            let chip = format!("[{course}]");
            if x + chip.width() as u16 > inner.right() {
                break;
            }
            x += fb.draw_text(x, y, &chip, theme.text, None, Attr::DIM, Some(&inner));
            x += 1;
        }
        y += 2;
    }

    if y < inner.bottom() {
        let badges = ACHIEVEMENTS
            .iter()
            .map(|a| format!("✦ {a}"))
            .collect::<Vec<_>>()
            .join("   ");
        fb.draw_text(inner.x, y, &badges, theme.tertiary, None, Attr::NONE, Some(&inner));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::aurora;

    fn screen(fb: &FrameBuffer) -> Vec<String> {
        (0..fb.height())
            .map(|y| {
                (0..fb.width())
                    .map(|x| char::from_u32(fb.get(x, y).unwrap().char).unwrap_or(' '))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_renders_gpa_mid_animation() {
        let mut fb = FrameBuffer::new(100, 30);
        let theme = aurora();
        render(&mut fb, Rect::new(0, 0, 100, 30), &theme, &EducationView { gpa: 2.41 });

        let rows = screen(&fb);
        assert!(rows.iter().any(|r| r.contains("2.41")));
        assert!(rows.iter().any(|r| r.contains("Arizona State University")));
    }

    #[test]
    fn test_final_gpa_shows_two_decimals() {
        let mut fb = FrameBuffer::new(100, 30);
        let theme = aurora();
        render(&mut fb, Rect::new(0, 0, 100, 30), &theme, &EducationView { gpa: 3.97 });

        assert!(screen(&fb).iter().any(|r| r.contains("3.97")));
    }

    #[test]
    fn test_small_area_is_safe() {
        let mut fb = FrameBuffer::new(12, 4);
        let theme = aurora();
        render(&mut fb, Rect::new(0, 0, 12, 4), &theme, &EducationView { gpa: 0.0 });
    }
}
