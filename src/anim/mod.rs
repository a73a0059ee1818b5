//! Animation primitives.
//!
//! All motion in folio runs on the virtual clock in [`timer::Timers`]:
//! widgets schedule one-shot ticks, the event loop advances the clock by
//! measured wall time, and tests advance it directly. Each widget exposes
//! its display state through signals so the render pipeline re-runs only
//! when something actually changed.

pub mod blink;
pub mod carousel;
pub mod counter;
pub mod easing;
pub mod particles;
pub mod timer;
pub mod typewriter;

pub use blink::Blink;
pub use carousel::{Carousel, Direction};
pub use counter::{Counter, CounterConfig};
pub use easing::Easing;
pub use particles::{Particle, ParticleBurst, ParticleConfig};
pub use timer::{TimerHandle, Timers};
pub use typewriter::{Typewriter, TypewriterConfig};
