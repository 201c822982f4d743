//! Frame rendering: display formats, ANSI sequences, per-tick output.

pub mod ansi;
mod format;
mod frame;

pub use format::{DateStyle, DisplayFormat};
pub use frame::render_frame;
