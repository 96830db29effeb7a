//! Inter-frame wait that listens for quit keys.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, warn};

use crate::engine::{CancelToken, Pacer, SleepPacer};
use crate::map::should_quit;

/// Polls terminal events for the length of the frame interval.
///
/// A quit key cancels the token and ends the wait at once, so stopping never
/// has to sit out the remainder of a frame. If the terminal cannot deliver
/// events the pacer falls back to plain sleeping; the session can then only
/// be stopped through the cancel token (signals).
#[derive(Debug, Default, Clone, Copy)]
pub struct EventPacer {
    fallback: Option<SleepPacer>,
}

impl EventPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once terminal events failed and the pacer only sleeps.
    pub fn is_sleeping_only(&self) -> bool {
        self.fallback.is_some()
    }
}

impl Pacer for EventPacer {
    fn wait(&mut self, interval: Duration, cancel: &CancelToken) -> Result<()> {
        if let Some(sleep) = self.fallback.as_mut() {
            return sleep.wait(interval, cancel);
        }

        let deadline = Instant::now() + interval;

        loop {
            if cancel.is_cancelled() {
                return Ok(());
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(());
            }

            let ready = match event::poll(remaining) {
                Ok(ready) => ready,
                Err(e) => {
                    warn!("terminal events unavailable ({}), pacing by sleep", e);
                    let mut sleep = SleepPacer::default();
                    let rest = deadline.saturating_duration_since(Instant::now());
                    let result = sleep.wait(rest, cancel);
                    self.fallback = Some(sleep);
                    return result;
                }
            };

            if ready {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        debug!("quit key {:?} pressed, cancelling animation", key.code);
                        cancel.cancel();
                    }
                }
            }
        }
    }
}
