//! Terminal atom visualizer (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_atom::{core,engine,input,term,types}`
//! and hosts the application layer: environment config, argument parsing and
//! the interactive menu.

pub use tui_atom_core as core;
pub use tui_atom_engine as engine;
pub use tui_atom_input as input;
pub use tui_atom_term as term;
pub use tui_atom_types as types;

pub mod cli;
pub mod config;
pub mod menu;

pub use cli::{parse_args, Invocation};
pub use config::AppConfig;
pub use menu::Menu;
