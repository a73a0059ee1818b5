//! Particle burst.
//!
//! A hover (or key) trigger spawns a fixed-size batch of particles that
//! fly outward from an origin, fading and shrinking, and are cleared as a
//! batch once their shared lifetime ends. Particles never interact; the
//! whole effect is fire-and-forget decoration on the contact button.
//!
//! Generation is a pure function of the config and a seed, so tests (and
//! the reduced-motion path) are fully deterministic. Re-triggering before
//! the clear delay elapses *replaces* the current batch - the previous
//! clear timer is cancelled, so the burst owns at most one pending timer
//! at any moment.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spark_signals::{Signal, signal};

use super::easing::ease_out_cubic;
use super::timer::{TimerHandle, Timers};
use crate::types::Rgba;

// =============================================================================
// Config & data
// =============================================================================

/// Particle burst configuration.
#[derive(Debug, Clone)]
pub struct ParticleConfig {
    /// Particles per batch.
    pub count: usize,
    /// Outward travel distance range (in abstract units; the renderer
    /// scales them to cells).
    pub velocity: (f32, f32),
    /// Particle size range.
    pub size: (f32, f32),
    /// Palette to draw colors from.
    pub colors: Vec<Rgba>,
    /// Shared animation lifetime in milliseconds.
    pub lifetime_ms: u64,
}

impl ParticleConfig {
    /// The contact button's burst: 12 particles, travel 50-100,
    /// size 3-7, 600ms flight.
    pub fn burst(colors: Vec<Rgba>) -> Self {
        Self {
            count: 12,
            velocity: (50.0, 100.0),
            size: (3.0, 7.0),
            colors,
            lifetime_ms: 600,
        }
    }

    /// Clear delay: slightly longer than the flight so the last frame of
    /// the fade is visible before the batch disappears.
    pub fn clear_delay_ms(&self) -> u64 {
        self.lifetime_ms + 100
    }
}

/// One ephemeral particle. All fields are fixed at spawn; position over
/// time is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Flight direction in radians.
    pub angle: f32,
    /// Total travel distance.
    pub velocity: f32,
    /// Initial size.
    pub size: f32,
    /// Palette color.
    pub color: Rgba,
}

/// A particle's render state at some age: offset from the origin plus
/// fade factors, all in the spawn units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub dx: f32,
    pub dy: f32,
    /// 1.0 at spawn, 0.0 at end of life.
    pub opacity: f32,
    /// Current size after shrinking.
    pub size: f32,
    pub color: Rgba,
}

// =============================================================================
// Pure generation
// =============================================================================

/// Generate one batch: angles evenly spaced around the circle, velocity
/// and size uniform within their ranges, colors uniform over the palette.
/// Deterministic for a given config and seed.
pub fn spawn_batch(cfg: &ParticleConfig, seed: u64) -> Vec<Particle> {
    if cfg.count == 0 || cfg.colors.is_empty() {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cfg.count)
        .map(|i| Particle {
            angle: (i as f32 / cfg.count as f32) * std::f32::consts::TAU,
            velocity: rng.random_range(cfg.velocity.0..=cfg.velocity.1),
            size: rng.random_range(cfg.size.0..=cfg.size.1),
            color: cfg.colors[rng.random_range(0..cfg.colors.len())],
        })
        .collect()
}

/// Sample a particle at `age_ms`: eased travel along its angle, opacity
/// and scale fading linearly to zero over the lifetime.
pub fn sample(p: &Particle, age_ms: u64, lifetime_ms: u64) -> ParticleFrame {
    let t = if lifetime_ms == 0 {
        1.0
    } else {
        (age_ms as f32 / lifetime_ms as f32).clamp(0.0, 1.0)
    };
    let dist = p.velocity * ease_out_cubic(t);
    ParticleFrame {
        dx: p.angle.cos() * dist,
        dy: p.angle.sin() * dist,
        opacity: 1.0 - t,
        size: p.size * (1.0 - t),
        color: p.color,
    }
}

// =============================================================================
// Burst state
// =============================================================================

/// Stateful burst owner: one batch, one clear timer, reactive for the
/// render pipeline.
pub struct ParticleBurst {
    cfg: ParticleConfig,
    seed: u64,
    /// Bumped per trigger so successive bursts differ under one app seed.
    bursts: u64,
    batch: Signal<Vec<Particle>>,
    spawned_at: Signal<u64>,
    clear_timer: Option<TimerHandle>,
}

impl ParticleBurst {
    pub fn new(cfg: ParticleConfig, seed: u64) -> Self {
        Self {
            cfg,
            seed,
            bursts: 0,
            batch: signal(Vec::new()),
            spawned_at: signal(0),
            clear_timer: None,
        }
    }

    /// Reactive batch. Clone into the render pipeline.
    pub fn batch(&self) -> Signal<Vec<Particle>> {
        self.batch.clone()
    }

    /// Virtual time the live batch was spawned at.
    pub fn spawned_at(&self) -> Signal<u64> {
        self.spawned_at.clone()
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.cfg
    }

    /// Spawn a batch. A trigger while a batch is still live replaces it
    /// and re-arms the clear timer.
    pub fn trigger(&mut self, timers: &mut Timers) {
        if let Some(h) = self.clear_timer.take() {
            timers.cancel(h);
        }
        self.bursts += 1;
        let batch = spawn_batch(&self.cfg, self.seed.wrapping_add(self.bursts));
        self.batch.set(batch);
        self.spawned_at.set(timers.now());
        self.clear_timer = Some(timers.schedule(self.cfg.clear_delay_ms()));
    }

    /// Drop the batch immediately and cancel the clear timer.
    pub fn halt(&mut self, timers: &mut Timers) {
        if let Some(h) = self.clear_timer.take() {
            timers.cancel(h);
        }
        self.batch.set(Vec::new());
    }

    /// Whether this burst owns the fired handle.
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.clear_timer == Some(handle)
    }

    /// Clear the batch. Call when a handle owned by this burst fires.
    pub fn on_timer(&mut self, _timers: &mut Timers) {
        self.clear_timer = None;
        self.batch.set(Vec::new());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<Rgba> {
        vec![
            Rgba::from_rgb_int(0x8b5cf6),
            Rgba::from_rgb_int(0x06b6d4),
            Rgba::from_rgb_int(0xf43f5e),
            Rgba::WHITE,
        ]
    }

    #[test]
    fn test_spawn_is_deterministic_under_seed() {
        let cfg = ParticleConfig::burst(palette());
        let a = spawn_batch(&cfg, 42);
        let b = spawn_batch(&cfg, 42);
        assert_eq!(a, b);

        let c = spawn_batch(&cfg, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_spawn_respects_config_ranges() {
        let cfg = ParticleConfig::burst(palette());
        let batch = spawn_batch(&cfg, 7);

        assert_eq!(batch.len(), 12);
        for p in &batch {
            assert!(p.velocity >= 50.0 && p.velocity <= 100.0);
            assert!(p.size >= 3.0 && p.size <= 7.0);
            assert!(cfg.colors.contains(&p.color));
        }
    }

    #[test]
    fn test_angles_evenly_spaced() {
        let cfg = ParticleConfig::burst(palette());
        let batch = spawn_batch(&cfg, 1);
        let step = std::f32::consts::TAU / 12.0;
        for (i, p) in batch.iter().enumerate() {
            assert!((p.angle - i as f32 * step).abs() < 1e-5);
        }
    }

    #[test]
    fn test_empty_count_or_palette_yields_nothing() {
        let mut cfg = ParticleConfig::burst(palette());
        cfg.count = 0;
        assert!(spawn_batch(&cfg, 1).is_empty());

        let mut cfg = ParticleConfig::burst(Vec::new());
        cfg.count = 12;
        assert!(spawn_batch(&cfg, 1).is_empty());
    }

    #[test]
    fn test_sample_fades_to_zero() {
        let p = Particle {
            angle: 0.0,
            velocity: 80.0,
            size: 5.0,
            color: Rgba::WHITE,
        };
        let start = sample(&p, 0, 600);
        assert_eq!(start.opacity, 1.0);
        assert_eq!(start.dx, 0.0);

        let end = sample(&p, 600, 600);
        assert_eq!(end.opacity, 0.0);
        assert_eq!(end.size, 0.0);
        assert!((end.dx - 80.0).abs() < 1e-4);

        // Past end of life clamps, never overshoots.
        let past = sample(&p, 1000, 600);
        assert_eq!(past.opacity, 0.0);
    }

    #[test]
    fn test_trigger_then_clear() {
        let mut timers = Timers::new();
        let mut burst = ParticleBurst::new(ParticleConfig::burst(palette()), 9);

        burst.trigger(&mut timers);
        assert_eq!(burst.batch().get().len(), 12);
        assert_eq!(timers.pending(), 1);

        for h in timers.advance(700) {
            if burst.owns(h) {
                burst.on_timer(&mut timers);
            }
        }
        assert!(burst.batch().get().is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_rapid_double_trigger_replaces_batch() {
        let mut timers = Timers::new();
        let mut burst = ParticleBurst::new(ParticleConfig::burst(palette()), 9);

        burst.trigger(&mut timers);
        let first = burst.batch().get();

        // Second trigger before the clear delay elapses.
        timers.advance(100);
        burst.trigger(&mut timers);
        let second = burst.batch().get();

        // Replaced, not accumulated; still exactly one clear timer.
        assert_eq!(second.len(), 12);
        assert_ne!(first, second);
        assert_eq!(timers.pending(), 1);

        // The surviving timer clears the replacement on schedule.
        for h in timers.advance(700) {
            if burst.owns(h) {
                burst.on_timer(&mut timers);
            }
        }
        assert!(burst.batch().get().is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_halt_cancels_clear_timer() {
        let mut timers = Timers::new();
        let mut burst = ParticleBurst::new(ParticleConfig::burst(palette()), 9);

        burst.trigger(&mut timers);
        burst.halt(&mut timers);

        assert!(burst.batch().get().is_empty());
        assert_eq!(timers.pending(), 0);
        assert!(timers.advance(10_000).is_empty());
    }
}
