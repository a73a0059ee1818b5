//! Reactive render pipeline: signals in, terminal frames out.

pub mod frame;
pub mod mount;

pub use frame::{FrameInputs, build_frame, content_area, create_frame_derived};
pub use mount::{MountHandle, mount};
