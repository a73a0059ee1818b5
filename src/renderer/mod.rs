//! Terminal rendering pipeline.
//!
//! Sections draw into a [`FrameBuffer`]; the [`DiffRenderer`] compares it
//! with the previous frame and writes only changed cells to the terminal,
//! batched through an [`OutputBuffer`] and minimized by a
//! [`StatefulCellRenderer`].

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod output;

pub use buffer::{FrameBuffer, string_width};
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
