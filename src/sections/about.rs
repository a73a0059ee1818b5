//! About section: bio paragraphs and the animated stat cards.

use super::draw_paragraph;
use crate::anim::counter::format_value;
use crate::content::{PROFILE, STATS};
use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::{Attr, Rect};

/// Snapshot of the stat counters for one frame, in `STATS` order.
#[derive(Debug, Clone, PartialEq)]
pub struct AboutView {
    pub stat_values: Vec<f64>,
}

pub fn render(fb: &mut FrameBuffer, area: Rect, theme: &Theme, view: &AboutView) {
    let inner = area.inset(2);
    if inner.width < 20 || inner.height < 10 {
        return;
    }
    let mut y = inner.y;

    fb.draw_text(inner.x, y, "Hi, I'm Omkar!", theme.text, None, Attr::BOLD, Some(&inner));
    y += 2;

    for paragraph in &PROFILE.bio {
        let para_area = Rect::new(inner.x, y, inner.width.min(70), inner.bottom().saturating_sub(y));
        y += draw_paragraph(fb, para_area, paragraph, theme.text, Attr::NONE);
        y += 1;
    }

    render_stat_cards(fb, Rect::new(inner.x, y, inner.width, inner.bottom().saturating_sub(y)), theme, view);
}

/// Four bordered cards in a row, each with its revealed value over its
/// label.
fn render_stat_cards(fb: &mut FrameBuffer, area: Rect, theme: &Theme, view: &AboutView) {
    const CARD_HEIGHT: u16 = 4;
    if area.height < CARD_HEIGHT || STATS.is_empty() {
        return;
    }

    let card_width = (area.width / STATS.len() as u16).min(20);
    if card_width < 8 {
        return;
    }

    for (i, stat) in STATS.iter().enumerate() {
        let x = area.x + i as u16 * card_width;
        let card = Rect::new(x, area.y, card_width - 1, CARD_HEIGHT);
        fb.draw_border(card, theme.border, None, None);

        let value = view.stat_values.get(i).copied().unwrap_or(stat.value);
        let is_integer = stat.value.fract() == 0.0;
        let text = format_value(value, is_integer, stat.suffix);

        fb.draw_text_centered(card.x + 1, card.y + 1, card.width - 2, &text, theme.primary, None, Attr::BOLD, None);
        fb.draw_text_centered(card.x + 1, card.y + 2, card.width - 2, stat.label, theme.muted, None, Attr::NONE, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::aurora;

    #[test]
    fn test_renders_stat_values() {
        let mut fb = FrameBuffer::new(100, 30);
        let theme = aurora();
        let view = AboutView {
            stat_values: vec![3.0, 6.0, 3.0, 3.97],
        };
        render(&mut fb, Rect::new(0, 0, 100, 30), &theme, &view);

        // The cards land somewhere in the lower half; look for "3.97".
        let mut found = false;
        for y in 0..30 {
            let mut row = String::new();
            for x in 0..100 {
                row.push(char::from_u32(fb.get(x, y).unwrap().char).unwrap_or(' '));
            }
            if row.contains("3.97") {
                found = true;
            }
        }
        assert!(found, "GPA stat not rendered");
    }

    #[test]
    fn test_mid_animation_value_renders_floored() {
        // 4 intermediate-valued integers must never show decimals.
        let text = format_value(2.0, true, "+");
        assert_eq!(text, "2+");
    }

    #[test]
    fn test_small_area_is_safe() {
        let mut fb = FrameBuffer::new(10, 5);
        let theme = aurora();
        let view = AboutView { stat_values: vec![] };
        render(&mut fb, Rect::new(0, 0, 10, 5), &theme, &view);
    }
}
