//! Animation clock with bounded growth.

use crate::types::{TIME_STEP, TIME_WRAP};

/// Monotonic time parameter for one animation session.
///
/// Advances by a fixed step per tick and resets to zero once it exceeds the
/// wrap ceiling, so floating-point error never accumulates without bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    time: f64,
    step: f64,
    wrap: f64,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(TIME_STEP, TIME_WRAP)
    }
}

impl AnimationClock {
    pub fn new(step: f64, wrap: f64) -> Self {
        Self {
            time: 0.0,
            step,
            wrap,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn wrap(&self) -> f64 {
        self.wrap
    }

    /// Advance one tick. Returns `true` when the clock wrapped back to zero.
    pub fn advance(&mut self) -> bool {
        self.time += self.step;
        if self.time > self.wrap {
            self.time = 0.0;
            return true;
        }
        false
    }

    /// Ticks needed from zero until the first wrap.
    pub fn ticks_per_cycle(&self) -> u64 {
        let mut probe = Self::new(self.step, self.wrap);
        let mut ticks = 1;
        while !probe.advance() {
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_steps() {
        let mut clock = AnimationClock::default();
        assert_eq!(clock.time(), 0.0);
        assert!(!clock.advance());
        assert!((clock.time() - 0.08).abs() < 1e-12);
    }

    #[test]
    fn wraps_to_zero_after_exceeding_ceiling() {
        let mut clock = AnimationClock::default();
        let mut wrapped = false;
        for _ in 0..1_000 {
            if clock.advance() {
                wrapped = true;
                break;
            }
            assert!(clock.time() <= TIME_WRAP);
        }
        assert!(wrapped);
        assert_eq!(clock.time(), 0.0);
    }

    #[test]
    fn ticks_per_cycle_matches_manual_count() {
        let clock = AnimationClock::new(1.0, 3.0);
        // 1, 2, 3, then 4 > 3 wraps.
        assert_eq!(clock.ticks_per_cycle(), 4);

        let default_cycle = AnimationClock::default().ticks_per_cycle();
        assert!((625..=627).contains(&default_cycle));
    }
}
