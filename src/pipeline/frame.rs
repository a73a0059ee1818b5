//! Reactive frame computation.
//!
//! [`FrameInputs`] bundles clones of every signal the screen depends on;
//! [`create_frame_derived`] turns them into a `Derived<FrameBuffer>` that
//! recomputes whenever any input changes. The derived is pure - it reads
//! signals and static content, draws, and returns the buffer. All side
//! effects (terminal writes) live in the mount effect.

use spark_signals::{Derived, Signal, derived};

use crate::anim::carousel::Direction;
use crate::anim::particles::Particle;
use crate::config::AppConfig;
use crate::renderer::FrameBuffer;
use crate::sections::{
    self, SectionId, about, blog, contact, education, experience, hero, projects, skills,
};
use crate::theme::Theme;
use crate::types::Rect;

/// Everything the frame reads. Signal handles are cheap clones into the
/// derived closure; the config and theme are fixed for the app's
/// lifetime.
#[derive(Clone)]
pub struct FrameInputs {
    pub cfg: AppConfig,
    pub theme: Theme,
    pub sections: &'static [SectionId],

    pub size: Signal<(u16, u16)>,
    pub clock: Signal<u64>,
    /// Index into `sections`.
    pub active: Signal<usize>,

    // Hero
    pub role: Signal<String>,
    pub cursor_on: Signal<bool>,

    // About / Education
    pub stat_values: Vec<Signal<f64>>,
    pub gpa: Signal<f64>,

    // Projects
    pub carousel_active: Signal<usize>,
    pub carousel_direction: Signal<Direction>,
    pub carousel_changed_at: Signal<u64>,

    // Contact
    pub particles: Signal<Vec<Particle>>,
    pub particles_spawned_at: Signal<u64>,
    pub particle_lifetime_ms: u64,
    pub hovered: Signal<bool>,
}

/// Content region below the nav bar.
pub fn content_area(width: u16, height: u16) -> Rect {
    Rect::new(0, 1, width, height.saturating_sub(1))
}

/// Build one frame from the current input values.
pub fn build_frame(inputs: &FrameInputs) -> FrameBuffer {
    let (width, height) = inputs.size.get();
    let mut fb = FrameBuffer::new(width, height);
    if width == 0 || height == 0 {
        return fb;
    }

    fb.clear_with_bg(inputs.theme.background);

    let active_index = inputs.active.get().min(inputs.sections.len().saturating_sub(1));
    let active = inputs.sections[active_index];

    sections::render_nav(
        &mut fb,
        Rect::new(0, 0, width, 1),
        &inputs.theme,
        inputs.sections,
        active,
    );

    let area = content_area(width, height);
    let clock = inputs.clock.get();

    match active {
        SectionId::Home => {
            let view = hero::HeroView {
                role: inputs.role.get(),
                cursor_on: inputs.cursor_on.get(),
            };
            hero::render(&mut fb, area, &inputs.theme, &view);
        }
        SectionId::About => {
            let view = about::AboutView {
                stat_values: inputs.stat_values.iter().map(|s| s.get()).collect(),
            };
            about::render(&mut fb, area, &inputs.theme, &view);
        }
        SectionId::Experience => experience::render(&mut fb, area, &inputs.theme),
        SectionId::Projects => {
            let changed_at = inputs.carousel_changed_at.get();
            // Reduced motion lands the slide instantly.
            let clock = if inputs.cfg.reduced_motion {
                changed_at.saturating_add(crate::anim::carousel::SLIDE_MS)
            } else {
                clock
            };
            let view = projects::ProjectsView {
                active: inputs.carousel_active.get(),
                direction: inputs.carousel_direction.get(),
                changed_at,
                clock,
            };
            projects::render(&mut fb, area, &inputs.theme, &view);
        }
        SectionId::Skills => {
            let view = skills::SkillsView {
                clock,
                reduced_motion: inputs.cfg.reduced_motion,
            };
            skills::render(&mut fb, area, &inputs.theme, &view);
        }
        SectionId::Education => {
            let view = education::EducationView {
                gpa: inputs.gpa.get(),
            };
            education::render(&mut fb, area, &inputs.theme, &view);
        }
        SectionId::Blog => blog::render(&mut fb, area, &inputs.theme),
        SectionId::Contact => {
            let view = contact::ContactView {
                particles: inputs.particles.get(),
                spawned_at: inputs.particles_spawned_at.get(),
                particle_lifetime_ms: inputs.particle_lifetime_ms,
                clock,
                hovered: inputs.hovered.get(),
            };
            contact::render(&mut fb, area, &inputs.theme, &view);
        }
    }

    fb
}

/// Create the frame derived.
pub fn create_frame_derived(inputs: FrameInputs) -> Derived<FrameBuffer> {
    derived(move || build_frame(&inputs))
}
