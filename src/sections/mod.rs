//! Screen sections.
//!
//! One module per section of the portfolio. Each exposes a plain `View`
//! struct (a snapshot of its reactive state, read inside the frame
//! derived) and a pure `render` function that draws into the frame
//! buffer. Widget controllers live in the app, not here - sections never
//! own timers.

pub mod about;
pub mod blog;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

use unicode_width::UnicodeWidthStr;

use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::{Attr, Rect};

// =============================================================================
// SectionId
// =============================================================================

/// The sections of the portfolio, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Blog,
    Contact,
}

impl SectionId {
    /// Navigation order. Blog is included only when enabled.
    pub fn all(show_blog: bool) -> &'static [SectionId] {
        const WITH_BLOG: &[SectionId] = &[
            SectionId::Home,
            SectionId::About,
            SectionId::Experience,
            SectionId::Projects,
            SectionId::Skills,
            SectionId::Education,
            SectionId::Blog,
            SectionId::Contact,
        ];
        const WITHOUT_BLOG: &[SectionId] = &[
            SectionId::Home,
            SectionId::About,
            SectionId::Experience,
            SectionId::Projects,
            SectionId::Skills,
            SectionId::Education,
            SectionId::Contact,
        ];
        if show_blog { WITH_BLOG } else { WITHOUT_BLOG }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Education => "Education",
            SectionId::Blog => "Blog",
            SectionId::Contact => "Contact",
        }
    }
}

// =============================================================================
// Navigation bar
// =============================================================================

/// Draw the tab bar across the top: numbered section titles with the
/// active one highlighted.
pub fn render_nav(fb: &mut FrameBuffer, area: Rect, theme: &Theme, sections: &[SectionId], active: SectionId) {
    fb.fill_rect(area, theme.surface, None);

    let mut x = area.x + 2;
    for (i, section) in sections.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, section.title());
        let width = label.width() as u16;
        if x + width > area.right() {
            break;
        }

        if *section == active {
            fb.draw_text(x, area.y, &label, theme.background, Some(theme.primary), Attr::BOLD, None);
        } else {
            fb.draw_text(x, area.y, &label, theme.muted, None, Attr::NONE, None);
        }
        x += width + 1;
    }
}

// =============================================================================
// Text helpers
// =============================================================================

/// Greedy word wrap to a column budget. Words longer than the budget get
/// a line of their own (the renderer clips them).
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.width() + 1 + word.width() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Draw a wrapped paragraph. Returns the number of lines drawn.
pub fn draw_paragraph(
    fb: &mut FrameBuffer,
    area: Rect,
    text: &str,
    fg: crate::types::Rgba,
    attrs: Attr,
) -> u16 {
    let mut y = area.y;
    for line in wrap(text, area.width as usize) {
        if y >= area.bottom() {
            break;
        }
        fb.draw_text(area.x, y, &line, fg, None, attrs, Some(&area));
        y += 1;
    }
    y - area.y
}

// =============================================================================
// Tests
// =============================================================================
