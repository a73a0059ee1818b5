//! Theme system.
//!
//! Semantic color definitions for the whole screen. Two presets ship:
//! `aurora` (the violet/cyan/rose palette the portfolio was designed
//! around) and `terminal`, which defers every slot to the terminal's own
//! scheme for users who dislike truecolor backgrounds.
//!
//! # Example
//!
//! ```
//! use folio::theme::{Theme, get_preset};
//!
//! let theme = get_preset("aurora").unwrap();
//! assert!(!theme.primary.is_terminal_default());
//! ```

use crate::types::Rgba;

// =============================================================================
// Accent
// =============================================================================

/// Semantic accent slot. Content tables reference accents by name so the
/// data stays theme-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Tertiary,
}

// =============================================================================
// Theme
// =============================================================================

/// Resolved theme: every slot is a concrete color.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Screen background.
    pub background: Rgba,
    /// Card / panel background, one step above the screen.
    pub surface: Rgba,
    /// Primary accent (headings, active markers).
    pub primary: Rgba,
    /// Secondary accent (links, highlights).
    pub secondary: Rgba,
    /// Tertiary accent (warm highlights, the cursor).
    pub tertiary: Rgba,
    /// Body text.
    pub text: Rgba,
    /// De-emphasized text.
    pub muted: Rgba,
    /// Borders and separators.
    pub border: Rgba,
}

impl Theme {
    /// Resolve a semantic accent slot.
    pub fn accent(&self, accent: Accent) -> Rgba {
        match accent {
            Accent::Primary => self.primary,
            Accent::Secondary => self.secondary,
            Accent::Tertiary => self.tertiary,
        }
    }

    /// Palette the particle burst draws from.
    pub fn particle_palette(&self) -> Vec<Rgba> {
        vec![self.primary, self.secondary, self.tertiary, Rgba::WHITE]
    }
}

// =============================================================================
// Presets
// =============================================================================

/// The palette the portfolio was designed around: violet primary, cyan
/// secondary, rose tertiary on a near-black blue background.
pub fn aurora() -> Theme {
    Theme {
        name: "aurora",
        background: Rgba::from_rgb_int(0x0a0a0f),
        surface: Rgba::from_rgb_int(0x15151f),
        primary: Rgba::from_rgb_int(0x8b5cf6),
        secondary: Rgba::from_rgb_int(0x06b6d4),
        tertiary: Rgba::from_rgb_int(0xf43f5e),
        text: Rgba::from_rgb_int(0xe4e4e7),
        muted: Rgba::from_rgb_int(0x71717a),
        border: Rgba::from_rgb_int(0x27272a),
    }
}

/// Terminal-scheme preset: backgrounds and text defer to the terminal,
/// accents fall back to plain RGB approximations that read on either a
/// light or dark scheme.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal",
        background: Rgba::TERMINAL_DEFAULT,
        surface: Rgba::TERMINAL_DEFAULT,
        primary: Rgba::from_rgb_int(0x8b5cf6),
        secondary: Rgba::from_rgb_int(0x06b6d4),
        tertiary: Rgba::from_rgb_int(0xf43f5e),
        text: Rgba::TERMINAL_DEFAULT,
        muted: Rgba::from_rgb_int(0x808080),
        border: Rgba::from_rgb_int(0x808080),
    }
}

/// Look up a preset by name. Matching is case-insensitive.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "aurora" => Some(aurora()),
        "terminal" => Some(terminal()),
        _ => None,
    }
}

/// Names accepted by [`get_preset`], for CLI help and error text.
pub const PRESET_NAMES: &[&str] = &["aurora", "terminal"];

impl Default for Theme {
    fn default() -> Self {
        aurora()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_preset() {
        assert_eq!(get_preset("aurora").unwrap().name, "aurora");
        assert_eq!(get_preset("AURORA").unwrap().name, "aurora");
        assert_eq!(get_preset("terminal").unwrap().name, "terminal");
        assert!(get_preset("dracula").is_none());
    }

    #[test]
    fn test_every_preset_name_resolves() {
        for name in PRESET_NAMES {
            assert!(get_preset(name).is_some(), "missing preset {name}");
        }
    }

    #[test]
    fn test_accent_slots() {
        let t = aurora();
        assert_eq!(t.accent(Accent::Primary), t.primary);
        assert_eq!(t.accent(Accent::Secondary), t.secondary);
        assert_eq!(t.accent(Accent::Tertiary), t.tertiary);
    }

    #[test]
    fn test_terminal_preset_defers_background() {
        let t = terminal();
        assert!(t.background.is_terminal_default());
        assert!(t.text.is_terminal_default());
    }

    #[test]
    fn test_particle_palette_has_four_colors() {
        assert_eq!(aurora().particle_palette().len(), 4);
    }
}
