//! Application configuration.
//!
//! Everything configurable arrives explicitly through this struct - the
//! composition root in `main.rs` fills it from CLI flags and hands it
//! down. No module reads the environment on its own.

/// Resolved configuration for one app run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Theme preset name (see `theme::PRESET_NAMES`).
    pub theme: String,
    /// Target frames per second for the event loop.
    pub fps: u64,
    /// Show the blog section.
    pub show_blog: bool,
    /// Seed for particle generation. Runs with the same seed produce the
    /// same bursts.
    pub particle_seed: u64,
    /// Skip decorative animation: counters land on their targets, the
    /// typewriter shows its first item, nothing drifts.
    pub reduced_motion: bool,
}

impl AppConfig {
    /// Event-loop poll budget derived from the fps target.
    pub fn frame_budget_ms(&self) -> u64 {
        (1000 / self.fps.max(1)).max(1)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "aurora".to_string(),
            fps: 60,
            show_blog: false,
            particle_seed: 0,
            reduced_motion: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.frame_budget_ms(), 16);

        cfg.fps = 30;
        assert_eq!(cfg.frame_budget_ms(), 33);

        // Degenerate fps never yields a zero budget.
        cfg.fps = 0;
        assert_eq!(cfg.frame_budget_ms(), 1000);
        cfg.fps = 5000;
        assert_eq!(cfg.frame_budget_ms(), 1);
    }
}
