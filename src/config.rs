//! Runtime configuration from environment variables.
//!
//! # Environment Variables
//!
//! - `ATOM_GRID_WIDTH` / `ATOM_GRID_HEIGHT`: canvas size (default 100x40).
//!   Small terminals (e.g. Termux) start to flicker above ~40 columns/rows.
//! - `ATOM_FRAME_MS`: delay between animation frames (default 120)
//! - `ATOM_TIME_STEP`: clock advance per frame (default 0.08)
//! - `ATOM_TIME_WRAP`: clock ceiling before it resets to 0 (default 50)
//! - `ATOM_ELLIPSE_RATIO`: vertical ring compression (default 0.85)
//! - `ATOM_ORBIT_SPEED`: angular speed of the innermost shell (default 1.5)
//! - `ATOM_ORBIT_FALLOFF`: speed lost per shell (default 0.2)
//! - `ATOM_INTRO_MS`: pause on the "Initializing" banner (default 1000)
//!
//! Unparseable or out-of-range values are logged and replaced by the default.

use std::str::FromStr;
use std::time::Duration;

use log::warn;

use crate::engine::{AnimationClock, AnimationDriver};
use crate::term::{AtomView, RenderTuning};
use crate::types::{FRAME_INTERVAL_MS, GRID_HEIGHT, GRID_WIDTH, TIME_STEP, TIME_WRAP};

const DEFAULT_INTRO_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub frame_interval: Duration,
    pub time_step: f64,
    pub time_wrap: f64,
    pub tuning: RenderTuning,
    pub intro_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
            time_step: TIME_STEP,
            time_wrap: TIME_WRAP,
            tuning: RenderTuning::default(),
            intro_delay: Duration::from_millis(DEFAULT_INTRO_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let positive = |v: &f64| v.is_finite() && *v > 0.0;
        let finite = |v: &f64| v.is_finite();

        Self {
            grid_width: read(&lookup, "ATOM_GRID_WIDTH", d.grid_width, |v| *v > 0),
            grid_height: read(&lookup, "ATOM_GRID_HEIGHT", d.grid_height, |v| *v > 0),
            frame_interval: Duration::from_millis(read(
                &lookup,
                "ATOM_FRAME_MS",
                FRAME_INTERVAL_MS,
                |_| true,
            )),
            time_step: read(&lookup, "ATOM_TIME_STEP", d.time_step, positive),
            time_wrap: read(&lookup, "ATOM_TIME_WRAP", d.time_wrap, positive),
            tuning: RenderTuning {
                ellipse_ratio: read(
                    &lookup,
                    "ATOM_ELLIPSE_RATIO",
                    d.tuning.ellipse_ratio,
                    positive,
                ),
                orbit_speed: read(&lookup, "ATOM_ORBIT_SPEED", d.tuning.orbit_speed, finite),
                orbit_falloff: read(
                    &lookup,
                    "ATOM_ORBIT_FALLOFF",
                    d.tuning.orbit_falloff,
                    finite,
                ),
                trail_lag: d.tuning.trail_lag,
            },
            intro_delay: Duration::from_millis(read(
                &lookup,
                "ATOM_INTRO_MS",
                DEFAULT_INTRO_MS,
                |_| true,
            )),
        }
    }

    pub fn view(&self) -> AtomView {
        AtomView::new(self.grid_width, self.grid_height).with_tuning(self.tuning)
    }

    pub fn driver(&self) -> AnimationDriver {
        AnimationDriver::new(self.view())
            .with_clock(AnimationClock::new(self.time_step, self.time_wrap))
            .with_interval(self.frame_interval)
    }
}

fn read<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            warn!("{}: ignoring invalid value {:?}, using {:?}", key, raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("ATOM_GRID_WIDTH", "60"),
            ("ATOM_GRID_HEIGHT", " 30 "),
            ("ATOM_FRAME_MS", "50"),
            ("ATOM_ELLIPSE_RATIO", "0.5"),
        ]);
        assert_eq!(config.grid_width, 60);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.frame_interval, Duration::from_millis(50));
        assert_eq!(config.tuning.ellipse_ratio, 0.5);
        assert_eq!(config.view().center(), (15, 30));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("ATOM_GRID_WIDTH", "0"),
            ("ATOM_TIME_STEP", "-1"),
            ("ATOM_TIME_WRAP", "NaN"),
            ("ATOM_ORBIT_SPEED", "fast"),
        ]);
        let defaults = AppConfig::default();
        assert_eq!(config.grid_width, defaults.grid_width);
        assert_eq!(config.time_step, defaults.time_step);
        assert_eq!(config.time_wrap, defaults.time_wrap);
        assert_eq!(config.tuning.orbit_speed, defaults.tuning.orbit_speed);
    }
}
