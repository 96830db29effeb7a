//! Animation driver: compose, flush, wait and advance until cancelled.
//!
//! The driver owns no terminal. It talks to a [`FrameSink`] for output and a
//! [`Pacer`] for the inter-frame wait, so a session can be run headless in
//! tests with a recording sink and a scripted pacer.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use log::{debug, info, trace};

use crate::cancel::CancelToken;
use crate::clock::AnimationClock;
use crate::core::Element;
use crate::term::{palette, AtomView, CellStyle, Frame, Line, TerminalRenderer};
use crate::types::{VisualizationMode, FRAME_INTERVAL_MS};

/// Output side of an animation session.
pub trait FrameSink {
    /// Clear the screen and hide the cursor. Called once per session.
    fn begin(&mut self) -> Result<()>;

    /// Draw a frame over the previous one.
    fn present(&mut self, frame: &Frame) -> Result<()>;

    /// Show the cursor, clear the screen and print `farewell`.
    fn finish(&mut self, farewell: &Line) -> Result<()>;
}

impl FrameSink for TerminalRenderer {
    fn begin(&mut self) -> Result<()> {
        self.enter_animation()
    }

    fn present(&mut self, frame: &Frame) -> Result<()> {
        TerminalRenderer::present(self, frame)
    }

    fn finish(&mut self, farewell: &Line) -> Result<()> {
        self.exit_animation(farewell)
    }
}

/// Inter-frame wait.
pub trait Pacer {
    /// Wait for `interval`, returning early once `cancel` fires.
    fn wait(&mut self, interval: Duration, cancel: &CancelToken) -> Result<()>;
}

/// Sleeps in short slices so cancellation from another thread is noticed
/// within a few milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct SleepPacer {
    slice: Duration,
}

impl Default for SleepPacer {
    fn default() -> Self {
        Self {
            slice: Duration::from_millis(10),
        }
    }
}

impl Pacer for SleepPacer {
    fn wait(&mut self, interval: Duration, cancel: &CancelToken) -> Result<()> {
        let deadline = Instant::now() + interval;
        while !cancel.is_cancelled() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep(self.slice.min(deadline - now));
        }
        Ok(())
    }
}

/// Driver lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Not started yet.
    Idle,
    /// Ticking.
    Running,
    /// Terminal state, reached through cancellation (or a fatal output error).
    Stopped,
}

/// Closing message shown after an animation session.
pub fn farewell_line() -> Line {
    Line::new().with(
        "Thank you for exploring the atomic world! ⚛️",
        CellStyle::plain(palette::INFO),
    )
}

/// Runs one animation session for one element.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    view: AtomView,
    clock: AnimationClock,
    interval: Duration,
    state: DriverState,
    ticks: u64,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(AtomView::default())
    }
}

impl AnimationDriver {
    pub fn new(view: AtomView) -> Self {
        Self {
            view,
            clock: AnimationClock::default(),
            interval: Duration::from_millis(FRAME_INTERVAL_MS),
            state: DriverState::Idle,
            ticks: 0,
        }
    }

    pub fn with_clock(mut self, clock: AnimationClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Completed ticks (frames presented and waited on).
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run until `cancel` fires.
    ///
    /// Cleanup (cursor restore, clear, farewell) runs however the session ends:
    /// cancellation, an output error, or a panic unwinding through the loop.
    pub fn run<S, P>(
        &mut self,
        element: &Element,
        sink: &mut S,
        pacer: &mut P,
        cancel: &CancelToken,
    ) -> Result<()>
    where
        S: FrameSink,
        P: Pacer,
    {
        if self.state != DriverState::Idle {
            bail!("animation session can only be run once (state: {:?})", self.state);
        }

        info!(
            "animation started: {} (Z={}), interval {:?}",
            element.name, element.atomic_number, self.interval
        );
        self.state = DriverState::Running;

        let mut session = Session::new(sink);
        let mut result = session.sink().begin();
        if result.is_ok() {
            result = self.tick_loop(element, session.sink(), pacer, cancel);
        }

        self.state = DriverState::Stopped;
        let cleanup = session.close();
        info!("animation stopped after {} ticks", self.ticks);

        result.and(cleanup)
    }

    fn tick_loop<S, P>(
        &mut self,
        element: &Element,
        sink: &mut S,
        pacer: &mut P,
        cancel: &CancelToken,
    ) -> Result<()>
    where
        S: FrameSink,
        P: Pacer,
    {
        loop {
            if cancel.is_cancelled() {
                return Ok(());
            }

            let started = Instant::now();
            let frame = self
                .view
                .compose(element, VisualizationMode::Animated, self.clock.time());
            sink.present(&frame)?;
            trace!("tick {} composed+flushed in {:?}", self.ticks, started.elapsed());

            pacer.wait(self.interval, cancel)?;
            if cancel.is_cancelled() {
                return Ok(());
            }

            if self.clock.advance() {
                debug!("animation clock wrapped after tick {}", self.ticks);
            }
            self.ticks += 1;
        }
    }
}

/// Scoped terminal session: `finish` is guaranteed to be attempted once.
struct Session<'a, S: FrameSink> {
    sink: &'a mut S,
    closed: bool,
}

impl<'a, S: FrameSink> Session<'a, S> {
    fn new(sink: &'a mut S) -> Self {
        Self {
            sink,
            closed: false,
        }
    }

    fn sink(&mut self) -> &mut S {
        &mut *self.sink
    }

    fn close(mut self) -> Result<()> {
        self.closed = true;
        self.sink.finish(&farewell_line())
    }
}

impl<S: FrameSink> Drop for Session<'_, S> {
    fn drop(&mut self) {
        if !self.closed {
            let _ = self.sink.finish(&farewell_line());
        }
    }
}
