//! App state and the event loop.
//!
//! [`App`] owns every widget controller (typewriter, blink, counters,
//! carousel, particle burst) plus the virtual timer registry and the
//! top-level signals. Input events mutate this state; the render
//! pipeline only ever reads the signal handles it was given at mount.
//!
//! Section visibility drives the timer-based widgets: entering a section
//! starts its animations, leaving it halts them. `pending()` on the
//! registry therefore tells you exactly which section is "live", and
//! tests lean on that.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use spark_signals::{Signal, signal};

use crate::anim::{
    Blink, Carousel, Counter, CounterConfig, ParticleBurst, ParticleConfig, Timers, Typewriter,
    TypewriterConfig,
};
use crate::config::AppConfig;
use crate::content::{EDUCATION, PROJECTS, ROLES, STATS};
use crate::pipeline::{self, FrameInputs, content_area};
use crate::sections::{SectionId, contact};
use crate::theme::{Theme, get_preset};

// =============================================================================
// App
// =============================================================================

pub struct App {
    cfg: AppConfig,
    theme: Theme,
    sections: &'static [SectionId],

    timers: Timers,
    size: Signal<(u16, u16)>,
    clock: Signal<u64>,
    /// Index into `sections`.
    active: Signal<usize>,
    /// Pointer over the contact button.
    hovered: Signal<bool>,

    typewriter: Typewriter,
    blink: Blink,
    stats: Vec<Counter>,
    gpa: Counter,
    carousel: Carousel,
    burst: ParticleBurst,
}

impl App {
    /// Build the app from config at an initial terminal size. The home
    /// section's animations start immediately.
    pub fn new(cfg: AppConfig, size: (u16, u16)) -> Self {
        // CLI validation guarantees the preset exists; the fallback only
        // covers configs built by hand.
        let theme = get_preset(&cfg.theme).unwrap_or_default();
        let sections = SectionId::all(cfg.show_blog);

        let burst = ParticleBurst::new(
            ParticleConfig::burst(theme.particle_palette()),
            cfg.particle_seed,
        );

        let mut app = Self {
            cfg,
            theme,
            sections,
            timers: Timers::new(),
            size: signal(size),
            clock: signal(0),
            active: signal(0),
            hovered: signal(false),
            typewriter: Typewriter::new(TypewriterConfig::new(ROLES.to_vec())),
            blink: Blink::new(),
            stats: STATS
                .iter()
                .map(|s| Counter::new(CounterConfig::stat(s.value)))
                .collect(),
            gpa: Counter::new(CounterConfig::eased(EDUCATION.gpa)),
            carousel: Carousel::new(PROJECTS.len()),
            burst,
        };
        app.section_entered(app.sections[0]);
        app
    }

    /// Currently visible section.
    pub fn active_section(&self) -> SectionId {
        self.sections[self.active.get().min(self.sections.len() - 1)]
    }

    /// Snapshot the signal handles for the render pipeline.
    pub fn frame_inputs(&self) -> FrameInputs {
        FrameInputs {
            cfg: self.cfg.clone(),
            theme: self.theme.clone(),
            sections: self.sections,
            size: self.size.clone(),
            clock: self.clock.clone(),
            active: self.active.clone(),
            role: self.typewriter.displayed(),
            cursor_on: self.blink.on(),
            stat_values: self.stats.iter().map(|c| c.value()).collect(),
            gpa: self.gpa.value(),
            carousel_active: self.carousel.active(),
            carousel_direction: self.carousel.direction(),
            carousel_changed_at: self.carousel.changed_at(),
            particles: self.burst.batch(),
            particles_spawned_at: self.burst.spawned_at(),
            particle_lifetime_ms: self.burst.config().lifetime_ms,
            hovered: self.hovered.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Section lifecycle
    // -------------------------------------------------------------------------

    fn section_entered(&mut self, section: SectionId) {
        let reduced = self.cfg.reduced_motion;
        match section {
            SectionId::Home => {
                if reduced {
                    self.typewriter.finish(&mut self.timers);
                } else {
                    self.typewriter.start(&mut self.timers);
                    self.blink.start(&mut self.timers);
                }
            }
            SectionId::About => {
                for counter in &mut self.stats {
                    if reduced {
                        counter.finish(&mut self.timers);
                    } else {
                        counter.start(&mut self.timers);
                    }
                }
            }
            SectionId::Education => {
                if reduced {
                    self.gpa.finish(&mut self.timers);
                } else {
                    self.gpa.start(&mut self.timers);
                }
            }
            _ => {}
        }
    }

    fn section_left(&mut self, section: SectionId) {
        match section {
            SectionId::Home => {
                self.typewriter.stop(&mut self.timers);
                self.blink.stop(&mut self.timers);
            }
            SectionId::About => {
                for counter in &mut self.stats {
                    counter.halt(&mut self.timers);
                }
            }
            SectionId::Education => {
                self.gpa.halt(&mut self.timers);
            }
            SectionId::Contact => {
                self.burst.halt(&mut self.timers);
                self.hovered.set(false);
            }
            _ => {}
        }
    }

    fn set_active(&mut self, index: usize) {
        if index >= self.sections.len() || index == self.active.get() {
            return;
        }
        let old = self.active_section();
        self.active.set(index);
        self.section_left(old);
        self.section_entered(self.sections[index]);
    }

    fn step_section(&mut self, delta: isize) {
        let len = self.sections.len() as isize;
        let next = (self.active.get() as isize + delta).rem_euclid(len);
        self.set_active(next as usize);
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Handle a key event. Returns false when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return true;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return false,

            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < self.sections.len() {
                    self.set_active(index);
                }
            }

            // Arrows drive the carousel while the projects section is up;
            // h/l and the brackets always move between sections.
            KeyCode::Right => {
                if self.active_section() == SectionId::Projects {
                    self.carousel.next(self.timers.now());
                } else {
                    self.step_section(1);
                }
            }
            KeyCode::Left => {
                if self.active_section() == SectionId::Projects {
                    self.carousel.prev(self.timers.now());
                } else {
                    self.step_section(-1);
                }
            }
            KeyCode::Char('l') | KeyCode::Char(']') => self.step_section(1),
            KeyCode::Char('h') | KeyCode::Char('[') => self.step_section(-1),

            // Keyboard alternative to hovering the contact button.
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.active_section() == SectionId::Contact && !self.cfg.reduced_motion {
                    self.burst.trigger(&mut self.timers);
                }
            }

            _ => {}
        }
        true
    }

    /// Hover tracking and click handling for the contact button. A fresh
    /// pointer entry (or a click inside) fires a burst; re-triggering
    /// while one is live replaces it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.active_section() != SectionId::Contact {
            return;
        }
        let (width, height) = self.size.get();
        let button = contact::button_rect(content_area(width, height));
        let inside = button.contains(mouse.column, mouse.row);

        let entered = inside && !self.hovered.get();
        let clicked = inside && matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
        if (entered || clicked) && !self.cfg.reduced_motion {
            self.burst.trigger(&mut self.timers);
        }
        if inside != self.hovered.get() {
            self.hovered.set(inside);
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.size.set((width, height));
    }

    // -------------------------------------------------------------------------
    // Time
    // -------------------------------------------------------------------------

    /// Advance virtual time by measured wall time, route every fired
    /// handle to its owner, then publish the new clock so clock-driven
    /// sections (marquee, slide, particles) redraw.
    pub fn advance(&mut self, dt_ms: u64) {
        if dt_ms == 0 {
            return;
        }
        for handle in self.timers.advance(dt_ms) {
            if self.typewriter.owns(handle) {
                self.typewriter.on_timer(&mut self.timers);
            } else if self.blink.owns(handle) {
                self.blink.on_timer(&mut self.timers);
            } else if self.gpa.owns(handle) {
                self.gpa.on_timer(&mut self.timers);
            } else if self.burst.owns(handle) {
                self.burst.on_timer(&mut self.timers);
            } else if let Some(counter) = self.stats.iter_mut().find(|c| c.owns(handle)) {
                counter.on_timer(&mut self.timers);
            }
        }
        self.clock.set(self.timers.now());
    }
}

// =============================================================================
// Event loop
// =============================================================================

/// Mount the pipeline and run until a quit key arrives.
pub fn run(cfg: AppConfig) -> io::Result<()> {
    let budget = Duration::from_millis(cfg.frame_budget_ms());
    let size = crossterm::terminal::size()?;
    let mut app = App::new(cfg, size);
    let handle = pipeline::mount(app.frame_inputs())?;

    let mut last = Instant::now();
    while handle.is_running() {
        if event::poll(budget)? {
            match event::read()? {
                Event::Key(key) => {
                    if !app.handle_key(key) {
                        handle.stop();
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }
        let dt = last.elapsed().as_millis() as u64;
        last = Instant::now();
        app.advance(dt);
    }

    handle.unmount()
}

// =============================================================================
// Tests
// =============================================================================
