//! Mount API - terminal lifecycle and the render effect.
//!
//! `mount` takes over the terminal (raw mode, alternate screen, hidden
//! cursor, mouse capture), builds the frame derived, and registers the
//! ONE render effect: read the derived, hand the buffer to the
//! differential renderer. Every signal write anywhere in the app flows
//! through that single effect onto the screen.
//!
//! `unmount` (or dropping the handle) restores the terminal even on an
//! error path, so a panic never strands the user in the alt screen.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use spark_signals::effect;

use super::frame::{FrameInputs, create_frame_derived};
use crate::renderer::DiffRenderer;

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`].
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
}

impl MountHandle {
    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request shutdown; the event loop exits on its next pass.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Stop the render effect and restore the terminal.
    pub fn unmount(mut self) -> io::Result<()> {
        self.running.store(false, Ordering::SeqCst);
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        restore_terminal()
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        if let Some(stop) = self.stop_effect.take() {
            stop();
            // Unmount was never called; best-effort restore.
            let _ = restore_terminal();
        }
    }
}

// =============================================================================
// Terminal state
// =============================================================================

fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide, EnableMouseCapture)?;
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    execute!(io::stdout(), DisableMouseCapture, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    io::stdout().flush()
}

// =============================================================================
// Mount
// =============================================================================

/// Take over the terminal and wire the reactive render pipeline.
pub fn mount(inputs: FrameInputs) -> io::Result<MountHandle> {
    setup_terminal()?;

    let fb_derived = create_frame_derived(inputs);
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    let mut renderer = DiffRenderer::new();
    let stop_fn = effect(move || {
        if !running_clone.load(Ordering::SeqCst) {
            return;
        }
        let buffer = fb_derived.get();
        let _ = renderer.render(&buffer);
    });

    Ok(MountHandle {
        stop_effect: Some(Box::new(stop_fn)),
        running,
    })
}
