//! Blog section. Rendered only when the blog flag is enabled.

use unicode_width::UnicodeWidthStr;

use super::draw_paragraph;
use crate::content::BLOG_POSTS;
use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::{Attr, Rect};

pub fn render(fb: &mut FrameBuffer, area: Rect, theme: &Theme) {
    let inner = area.inset(2);
    if inner.width < 30 || inner.height < 6 {
        return;
    }
    let mut y = inner.y;

    fb.draw_text(inner.x, y, "Blog", theme.text, None, Attr::BOLD, Some(&inner));
    y += 2;

    for post in BLOG_POSTS {
        if y + 3 >= inner.bottom() {
            break;
        }

        fb.draw_text(inner.x, y, post.title, theme.primary, None, Attr::BOLD, Some(&inner));
        let meta = format!("{} · {}", post.date, post.read_time);
        fb.draw_text_right(inner.x, y, inner.width, &meta, theme.muted, None, Attr::NONE, Some(&inner));
        y += 1;

        let excerpt_area = Rect::new(inner.x + 2, y, inner.width.saturating_sub(2).min(70), 2);
        if let Some(clip) = excerpt_area.intersect(&inner) {
            y += draw_paragraph(fb, clip, post.excerpt, theme.text, Attr::NONE);
        }

        if y < inner.bottom() {
            let mut x = inner.x + 2;
            for tag in post.tags {
                let chip = format!("#{tag}");
                if x + chip.width() as u16 > inner.right() {
                    break;
                }
                x += fb.draw_text(x, y, &chip, theme.secondary, None, Attr::DIM, Some(&inner));
                x += 2;
            }
        }
        y += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::aurora;

    #[test]
    fn test_renders_all_posts() {
        let mut fb = FrameBuffer::new(100, 40);
        let theme = aurora();
        render(&mut fb, Rect::new(0, 0, 100, 40), &theme);

        let rows: Vec<String> = (0..40)
            .map(|y| {
                (0..100)
                    .map(|x| char::from_u32(fb.get(x, y).unwrap().char).unwrap_or(' '))
                    .collect()
            })
            .collect();
        for post in BLOG_POSTS {
            assert!(rows.iter().any(|r| r.contains(post.title)), "missing {}", post.title);
        }
    }

    #[test]
    fn test_small_area_is_safe() {
        let mut fb = FrameBuffer::new(12, 4);
        let theme = aurora();
        render(&mut fb, Rect::new(0, 0, 12, 4), &theme);
    }
}
