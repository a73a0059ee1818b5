//! folio - a terminal rendition of a personal portfolio.
//!
//! One screen, eight sections, and a handful of timer-driven animations:
//! a typewriter cycling the hero roles, stat counters that reveal their
//! values, a particle burst behind the contact button, and a sliding
//! project carousel.
//!
//! # Architecture
//!
//! ```text
//! input events            widget controllers          render pipeline
//! ────────────            ──────────────────          ───────────────
//! key / mouse / resize →  App (owns Timers,        →  FrameInputs (signal
//!                         Typewriter, Counters,       clones) → derived
//!                         Carousel, Burst, ...)       FrameBuffer → one
//!                              │                      effect → DiffRenderer
//!                              │ signal writes        → terminal
//!                              ▼
//!                         spark-signals graph
//! ```
//!
//! Animations never own threads: everything schedules one-shot ticks on a
//! virtual-time [`anim::Timers`] registry that the event loop advances by
//! measured wall time and tests advance directly.

pub mod anim;
pub mod app;
pub mod config;
pub mod content;
pub mod pipeline;
pub mod renderer;
pub mod sections;
pub mod theme;
pub mod types;

pub use app::{App, run};
pub use config::AppConfig;
