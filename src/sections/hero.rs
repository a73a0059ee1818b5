//! Hero section: name, typewriter role line, tagline, social links.

use unicode_width::UnicodeWidthStr;

use super::draw_paragraph;
use crate::content::{PROFILE, SOCIALS};
use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::{Attr, Rect};

/// Snapshot of the hero's reactive state for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    /// Current typewriter text.
    pub role: String,
    /// Whether the blinking cursor is visible this frame.
    pub cursor_on: bool,
}

pub fn render(fb: &mut FrameBuffer, area: Rect, theme: &Theme, view: &HeroView) {
    let inner = area.inset(2);
    if inner.width < 10 || inner.height < 8 {
        return;
    }
    let mut y = inner.y;

    // Availability badge
    let badge = format!("● {}", PROFILE.availability);
    fb.draw_text(inner.x, y, &badge, theme.secondary, None, Attr::NONE, Some(&inner));
    y += 2;

    // Name, first line plain, second in the primary accent
    fb.draw_text(inner.x, y, PROFILE.first_name, theme.text, None, Attr::BOLD, Some(&inner));
    y += 1;
    fb.draw_text(inner.x, y, PROFILE.last_name, theme.primary, None, Attr::BOLD, Some(&inner));
    y += 2;

    // Role line: `< Software Eng_ />` with the blinking cursor
    let mut x = inner.x;
    x += fb.draw_text(x, y, "< ", theme.muted, None, Attr::NONE, Some(&inner));
    x += fb.draw_text(x, y, &view.role, theme.primary, None, Attr::NONE, Some(&inner));
    if view.cursor_on {
        x += fb.draw_text(x, y, "_", theme.tertiary, None, Attr::BOLD, Some(&inner));
    } else {
        x += 1;
    }
    fb.draw_text(x, y, " />", theme.muted, None, Attr::NONE, Some(&inner));
    y += 2;

    // Tagline
    let tagline_area = Rect::new(inner.x, y, inner.width.min(60), inner.bottom().saturating_sub(y));
    y += draw_paragraph(fb, tagline_area, PROFILE.tagline, theme.muted, Attr::NONE);
    y += 1;

    // Social links
    if y < inner.bottom() {
        let mut x = inner.x;
        for social in SOCIALS {
            let chip = format!("[{}]", social.label);
            if x + chip.width() as u16 > inner.right() {
                break;
            }
            x += fb.draw_text(x, y, &chip, theme.secondary, None, Attr::UNDERLINE, Some(&inner));
            x += 2;
        }
    }
}

/// Width the role line needs at its widest, for layout sanity checks.
pub fn max_role_width(items: &[&str]) -> usize {
    items.iter().map(|s| s.width()).max().unwrap_or(0) + "<  _ />".width()
}
