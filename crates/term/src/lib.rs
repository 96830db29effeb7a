//! Terminal "atom renderer" module.
//!
//! A small rendering layer for terminal animation. It avoids widget/layout
//! frameworks and instead composes each frame on a plain character grid, then
//! flushes the finished text in one write.
//!
//! Goals:
//! - Keep frame composition pure, deterministic and testable
//! - Rebuild every frame from scratch (no stale cells between frames)
//! - Redraw in place from the home position to avoid flicker

pub mod atom_view;
pub mod fb;
pub mod frame;
pub mod palette;
pub mod renderer;

pub use tui_atom_core as core;
pub use tui_atom_types as types;

pub use atom_view::{AtomView, RenderTuning, STATIC_ELECTRON_SYMBOLS};
pub use fb::{CellStyle, Glyph, Grid, Ink};
pub use frame::{Frame, FrameBuilder, Line, Span};
pub use renderer::{encode_frame_into, encode_line_into, TerminalRenderer};
