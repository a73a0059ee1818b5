//! Contact section: headline, email, and the particle-burst button.
//!
//! The "Say hello" button's rectangle comes from one pure layout
//! function used both for drawing and for mouse hit-testing, so the two
//! can never disagree.

use super::draw_paragraph;
use crate::anim::particles::{Particle, sample};
use crate::content::{PROFILE, SOCIALS};
use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::{Attr, Rect};

const BUTTON_LABEL: &str = "  Say hello  ";

/// Snapshot for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    pub particles: Vec<Particle>,
    /// Virtual time the live batch was spawned at.
    pub spawned_at: u64,
    pub particle_lifetime_ms: u64,
    pub clock: u64,
    /// Pointer currently over the button.
    pub hovered: bool,
}

/// The button's rect within a section area. Mouse routing calls this
/// with the same area the renderer gets.
pub fn button_rect(area: Rect) -> Rect {
    let inner = area.inset(2);
    let width = (BUTTON_LABEL.len() as u16 + 2).min(inner.width);
    let x = inner.x + inner.width.saturating_sub(width) / 2;
    let y = inner.y + inner.height / 2;
    Rect::new(x, y, width, 3)
}

pub fn render(fb: &mut FrameBuffer, area: Rect, theme: &Theme, view: &ContactView) {
    let inner = area.inset(2);
    if inner.width < 24 || inner.height < 10 {
        return;
    }
    let mut y = inner.y;

    fb.draw_text(inner.x, y, "Let's build something together", theme.text, None, Attr::BOLD, Some(&inner));
    y += 2;

    let pitch_area = Rect::new(inner.x, y, inner.width.min(60), 3);
    if let Some(clip) = pitch_area.intersect(&inner) {
        y += draw_paragraph(
            fb,
            clip,
            "Open to interesting problems in systems, cloud, and AI/ML. \
             The fastest way to reach me:",
            theme.muted,
            Attr::NONE,
        );
    }
    y += 1;

    for social in SOCIALS {
        if y >= inner.bottom() {
            break;
        }
        let line = format!("{}  {}", social.label, social.url);
        fb.draw_text(inner.x, y, &line, theme.secondary, None, Attr::NONE, Some(&inner));
        y += 1;
    }

    // The button, highlighted under the pointer.
    let button = button_rect(area);
    let (border_fg, label_fg) = if view.hovered {
        (theme.primary, theme.primary)
    } else {
        (theme.border, theme.text)
    };
    fb.draw_border(button, border_fg, None, Some(&inner));
    fb.draw_text_centered(
        button.x + 1,
        button.y + 1,
        button.width - 2,
        BUTTON_LABEL.trim(),
        label_fg,
        None,
        Attr::BOLD,
        Some(&inner),
    );

    render_particles(fb, inner, view, button);

    // Footer credit.
    let footer = format!("© 2026 {} {}", PROFILE.first_name, PROFILE.last_name);
    fb.draw_text_centered(inner.x, inner.bottom() - 1, inner.width, &footer, theme.muted, None, Attr::DIM, Some(&inner));
}

/// Sample the live batch at the frame clock and draw each particle
/// around the button center. Spawn units map to cells at roughly 10:1
/// horizontally and 20:1 vertically to compensate for cell aspect.
fn render_particles(fb: &mut FrameBuffer, clip: Rect, view: &ContactView, button: Rect) {
    if view.particles.is_empty() {
        return;
    }

    let age = view.clock.saturating_sub(view.spawned_at);
    let cx = (button.x + button.width / 2) as f32;
    let cy = (button.y + button.height / 2) as f32;

    for particle in &view.particles {
        let frame = sample(particle, age, view.particle_lifetime_ms);
        if frame.opacity <= 0.0 {
            continue;
        }

        let x = cx + frame.dx / 10.0;
        let y = cy + frame.dy / 20.0;
        if x < 0.0 || y < 0.0 {
            continue;
        }

        // Bigger and more opaque reads as a heavier glyph.
        let weight = frame.size * frame.opacity;
        let glyph = if weight > 3.0 {
            '●'
        } else if weight > 1.5 {
            '•'
        } else {
            '·'
        };
        let color = frame.color.dim(0.4 + 0.6 * frame.opacity);
        fb.draw_char(x as u16, y as u16, glyph, color, None, Attr::NONE, Some(&clip));
    }
}
