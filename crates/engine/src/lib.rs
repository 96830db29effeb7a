//! Animation engine - drives the frame composer at a fixed cadence
//!
//! This crate contains the session loop that turns a pure frame composer into
//! motion on screen. It performs no terminal I/O itself; output and waiting go
//! through the [`FrameSink`] and [`Pacer`] traits.
//!
//! # Module Structure
//!
//! - [`clock`]: Time parameter with a fixed step and a wrap ceiling
//! - [`cancel`]: Shared cancellation flag
//! - [`driver`]: The Idle → Running → Stopped session state machine
//!
//! # Timing
//!
//! - **Frame interval**: 120ms
//! - **Time step**: 0.08 per tick
//! - **Wrap**: the clock resets to 0 once it exceeds 50
//!
//! # Example
//!
//! ```no_run
//! use tui_atom_engine::{AnimationDriver, CancelToken, SleepPacer};
//! use tui_atom_engine::core::lookup;
//! use tui_atom_engine::term::TerminalRenderer;
//!
//! let mut term = TerminalRenderer::new();
//! let cancel = CancelToken::new();
//! let mut driver = AnimationDriver::default();
//! driver.run(&lookup(6), &mut term, &mut SleepPacer::default(), &cancel)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cancel;
pub mod clock;
pub mod driver;

pub use tui_atom_core as core;
pub use tui_atom_term as term;
pub use tui_atom_types as types;

pub use cancel::CancelToken;
pub use clock::AnimationClock;
pub use driver::{farewell_line, AnimationDriver, DriverState, FrameSink, Pacer, SleepPacer};
