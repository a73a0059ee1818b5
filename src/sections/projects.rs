//! Projects section: one card at a time, slid in by the carousel.

use unicode_width::UnicodeWidthStr;

use super::draw_paragraph;
use crate::anim::carousel::{Direction, SLIDE_MS};
use crate::anim::easing::ease_out_cubic;
use crate::content::PROJECTS;
use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::{Attr, Rect};

/// Snapshot of the carousel for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectsView {
    pub active: usize,
    pub direction: Direction,
    /// Virtual time of the last index change.
    pub changed_at: u64,
    /// Current virtual time.
    pub clock: u64,
}

impl ProjectsView {
    /// Eased slide progress in [0, 1].
    fn slide(&self) -> f32 {
        let elapsed = self.clock.saturating_sub(self.changed_at);
        ease_out_cubic(elapsed as f32 / SLIDE_MS as f32)
    }
}

pub fn render(fb: &mut FrameBuffer, area: Rect, theme: &Theme, view: &ProjectsView) {
    let inner = area.inset(2);
    if inner.width < 30 || inner.height < 10 || PROJECTS.is_empty() {
        return;
    }
    let mut y = inner.y;

    fb.draw_text(inner.x, y, "Projects", theme.text, None, Attr::BOLD, Some(&inner));
    let counter = format!("{} / {}", view.active + 1, PROJECTS.len());
    fb.draw_text_right(inner.x, y, inner.width, &counter, theme.muted, None, Attr::NONE, Some(&inner));
    y += 2;

    // Card slides in from the side the move came from, clipped to the
    // card region so it never bleeds into the header or dots.
    let card_area = Rect::new(inner.x, y, inner.width, inner.bottom().saturating_sub(y + 2));
    let progress = view.slide();
    let offset = ((1.0 - progress) * card_area.width as f32) as i32;
    let dx = match view.direction {
        Direction::Forward => offset,
        Direction::Backward => -offset,
    };
    render_card(fb, card_area, theme, view.active, dx);

    // Dot indicator under the card.
    let dots_y = inner.bottom() - 1;
    let dots_width = (PROJECTS.len() * 2) as u16;
    let mut x = inner.x + (inner.width.saturating_sub(dots_width)) / 2;
    for i in 0..PROJECTS.len() {
        let (ch, fg) = if i == view.active {
            ('●', theme.primary)
        } else {
            ('○', theme.muted)
        };
        fb.draw_char(x, dots_y, ch, fg, None, Attr::NONE, Some(&inner));
        x += 2;
    }

    fb.draw_text(inner.x, dots_y, "← prev", theme.muted, None, Attr::DIM, Some(&inner));
    fb.draw_text_right(inner.x, dots_y, inner.width, "next →", theme.muted, None, Attr::DIM, Some(&inner));
}

/// Draw one project card horizontally shifted by `dx` cells.
fn render_card(fb: &mut FrameBuffer, area: Rect, theme: &Theme, index: usize, dx: i32) {
    let project = &PROJECTS[index];

    // Visible span of the card shifted by dx. Forward slides enter from
    // the right edge, backward from the left; the off-screen part is
    // simply not drawn.
    let x0 = area.x as i32 + dx;
    let left = x0.max(area.x as i32) as u16;
    let right = (x0 + area.width as i32).min(area.right() as i32);
    if right <= left as i32 + 10 {
        return;
    }
    let card = Rect::new(left, area.y, (right - left as i32) as u16, area.height);
    let clip = card;

    fb.fill_rect(clip, theme.surface, None);
    fb.draw_border(card, theme.border, None, Some(&clip));

    let body = card.inset(2);
    if body.width < 8 || body.height < 4 {
        return;
    }
    let mut y = body.y;

    let mut x = body.x;
    x += fb.draw_text(x, y, project.title, theme.primary, None, Attr::BOLD, Some(&clip));
    if project.featured {
        fb.draw_text(x + 1, y, "★", theme.tertiary, None, Attr::NONE, Some(&clip));
    }
    y += 1;

    let cats: Vec<&str> = project.categories.iter().map(|c| c.label()).collect();
    fb.draw_text(body.x, y, &cats.join(" · "), theme.muted, None, Attr::ITALIC, Some(&clip));
    y += 2;

    let desc_area = Rect::new(body.x, y, body.width, body.bottom().saturating_sub(y + 2));
    if let Some(desc_clip) = desc_area.intersect(&clip) {
        y += draw_paragraph(fb, desc_clip, project.long_description, theme.text, Attr::NONE);
        y += 1;
    }

    if y < body.bottom() {
        let mut x = body.x;
        for tech in project.technologies {
            let chip = format!("[{tech}]");
            if x + chip.width() as u16 > body.right() {
                break;
            }
            x += fb.draw_text(x, y, &chip, theme.secondary, None, Attr::DIM, Some(&clip));
            x += 1;
        }
        y += 1;
    }

    if !project.github_url.is_empty() && y < body.bottom() {
        fb.draw_text(body.x, y, project.github_url, theme.secondary, None, Attr::UNDERLINE, Some(&clip));
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

    fn settled(active: usize) -> ProjectsView {
        ProjectsView {
            active,
            direction: Direction::Forward,
            changed_at: 0,
            clock: SLIDE_MS * 2,
        }
    }

    #[test]
    fn test_renders_active_project_only() {
        let mut fb = FrameBuffer::new(100, 30);
        let theme = aurora();
        render(&mut fb, Rect::new(0, 0, 100, 30), &theme, &settled(1));

        let rows = screen(&fb);
        assert!(rows.iter().any(|r| r.contains("NL2SQL")));
        assert!(!rows.iter().any(|r| r.contains("Leet2Git")));
    }

    #[test]
    fn test_counter_reflects_index() {
        let mut fb = FrameBuffer::new(100, 30);
        let theme = aurora();
        render(&mut fb, Rect::new(0, 0, 100, 30), &theme, &settled(4));

        let rows = screen(&fb);
        assert!(rows.iter().any(|r| r.contains("5 / 6")));
    }

    #[test]
    fn test_mid_slide_card_is_offset() {
        let theme = aurora();
        let area = Rect::new(0, 0, 100, 30);

        let mut settled_fb = FrameBuffer::new(100, 30);
        render(&mut settled_fb, area, &theme, &settled(0));

        let mut sliding_fb = FrameBuffer::new(100, 30);
        let sliding = ProjectsView {
            active: 0,
            direction: Direction::Forward,
            changed_at: 1000,
            clock: 1050,
        };
        render(&mut sliding_fb, area, &theme, &sliding);

        // Early in the slide the card sits further right, so the frames
        // must differ.
        assert_ne!(screen(&settled_fb), screen(&sliding_fb));
    }

    #[test]
    fn test_small_area_is_safe() {
        let mut fb = FrameBuffer::new(20, 5);
        let theme = aurora();
        render(&mut fb, Rect::new(0, 0, 20, 5), &theme, &settled(0));
    }
}
