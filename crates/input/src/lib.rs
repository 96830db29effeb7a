//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto animation cancellation, provides an
//! event-polling [`Pacer`](tui_atom_engine::Pacer) that doubles as the
//! inter-frame wait, routes SIGINT/SIGTERM to the same cancel token, and parses
//! the menu and command-line answers.

pub mod map;
pub mod pacer;
pub mod prompt;
pub mod signals;

pub use tui_atom_engine as engine;
pub use tui_atom_types as types;

pub use map::should_quit;
pub use pacer::EventPacer;
pub use prompt::{parse_atomic_number, parse_element_choice, ElementChoice, PromptError};
pub use signals::SignalCancel;
