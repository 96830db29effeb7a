//! Core types module - shared constants and small value types
//!
//! Everything in here is plain data with no external dependencies, so it can be
//! used by the element tables, the frame composer and the animation driver alike.
//!
//! # Canvas
//!
//! - **Width**: 100 columns
//! - **Height**: 40 rows (smaller terminals, e.g. Termux, flicker above ~40)
//! - **Center**: `(width / 2, height / 2)`
//!
//! # Geometry Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `NUCLEUS_RADIUS` | 3 | Nucleus disc radius in grid units |
//! | `SHELL_BASE_RADIUS` | 8 | Radius of the innermost shell |
//! | `SHELL_SPACING` | 4 | Radius increment per shell |
//! | `STATIC_RING_SAMPLES` | 64 | Ring outline samples in static mode |
//! | `ANIMATED_RING_SAMPLES` | 48 | Ring outline samples in animated mode |
//! | `ELLIPSE_RATIO` | 0.85 | Vertical compression for tall terminal cells |
//!
//! # Animation Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_INTERVAL_MS` | 120 | Sleep between frames |
//! | `TIME_STEP` | 0.08 | Clock advance per tick |
//! | `TIME_WRAP` | 50.0 | Clock resets to 0 once it exceeds this |
//!
//! # Examples
//!
//! ```
//! use tui_atom_types::{oscillate, shell_letter, VisualizationMode, SHELL_CAPACITIES};
//!
//! assert_eq!(VisualizationMode::from_str("animated"), Some(VisualizationMode::Animated));
//! assert_eq!(shell_letter(0), "K");
//! assert_eq!(shell_letter(7), "S8");
//! assert_eq!(SHELL_CAPACITIES.iter().sum::<u32>(), 280);
//!
//! // floor(0.6 * 2) = 1 -> odd phase
//! assert!(oscillate(0.6, 2.0));
//! ```

use std::borrow::Cow;

/// Default grid width in terminal columns.
pub const GRID_WIDTH: u16 = 100;

/// Default grid height in terminal rows.
pub const GRID_HEIGHT: u16 = 40;

/// Nucleus radius in grid units (constant regardless of mass).
pub const NUCLEUS_RADIUS: i32 = 3;

/// Radius of shell 0.
pub const SHELL_BASE_RADIUS: f64 = 8.0;

/// Radius increment per shell index.
pub const SHELL_SPACING: f64 = 4.0;

/// Ring outline samples per full turn in static mode.
pub const STATIC_RING_SAMPLES: u32 = 64;

/// Ring outline samples per full turn in animated mode.
pub const ANIMATED_RING_SAMPLES: u32 = 48;

/// Vertical compression applied to ring y offsets.
pub const ELLIPSE_RATIO: f64 = 0.85;

/// Angular speed of shell 0 in radians per unit of time.
pub const ORBIT_BASE_SPEED: f64 = 1.5;

/// Speed lost per shell index (outer shells rotate slower).
pub const ORBIT_SPEED_FALLOFF: f64 = 0.2;

/// Angle (radians) the trailing dot lags behind an animated electron.
pub const TRAIL_LAG: f64 = 0.4;

/// Nucleus core blink rate (phases per unit of time).
pub const CORE_BLINK_RATE: f64 = 2.0;

/// Animated electron blink rate (phases per unit of time).
pub const ELECTRON_BLINK_RATE: f64 = 3.0;

/// Sleep between animation frames in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 120;

/// Clock advance per animation tick.
pub const TIME_STEP: f64 = 0.08;

/// Clock ceiling; the clock resets to zero once it is exceeded.
pub const TIME_WRAP: f64 = 50.0;

/// Highest atomic number in the curated element table.
pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// Nominal electron capacity per shell (K through Q).
pub const SHELL_CAPACITIES: [u32; 7] = [2, 8, 18, 32, 50, 72, 98];

/// Upper bound on shells a distribution can hold: the seven nominal shells
/// plus one overflow shell.
pub const MAX_SHELLS: usize = SHELL_CAPACITIES.len() + 1;

const SHELL_LETTERS: [&str; 7] = ["K", "L", "M", "N", "O", "P", "Q"];

/// Display letter for a 0-based shell index.
///
/// Shells beyond Q are labelled `S<n>` with `n` counted from 1.
pub fn shell_letter(index: usize) -> Cow<'static, str> {
    match SHELL_LETTERS.get(index) {
        Some(letter) => Cow::Borrowed(letter),
        None => Cow::Owned(format!("S{}", index + 1)),
    }
}

/// Two-phase oscillator: `floor(time * rate) mod 2 == 1`.
///
/// Pure in `time`, so frames stay reproducible without toggle state.
pub fn oscillate(time: f64, rate: f64) -> bool {
    ((time * rate).floor() as i64).rem_euclid(2) == 1
}

/// How an atom is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualizationMode {
    /// Electrons orbit in real time until cancelled.
    Animated,
    /// One snapshot of the atom.
    Static,
}

impl VisualizationMode {
    /// Parse mode from string (case-insensitive)
    ///
    /// Accepts the menu numbers too: "1" is animated, "2" is static.
    ///
    /// ```
    /// use tui_atom_types::VisualizationMode;
    ///
    /// assert_eq!(VisualizationMode::from_str("1"), Some(VisualizationMode::Animated));
    /// assert_eq!(VisualizationMode::from_str("Static"), Some(VisualizationMode::Static));
    /// assert_eq!(VisualizationMode::from_str("3"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "animated" | "a" => Some(VisualizationMode::Animated),
            "2" | "static" | "s" => Some(VisualizationMode::Static),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VisualizationMode::Animated => "animated",
            VisualizationMode::Static => "static",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(FRAME_INTERVAL_MS, 120);
        assert_eq!(TIME_STEP, 0.08);
        assert_eq!(TIME_WRAP, 50.0);
    }

    #[test]
    fn oscillator_follows_floor_parity() {
        assert!(!oscillate(0.0, 2.0));
        assert!(oscillate(0.6, 2.0));
        assert!(!oscillate(1.1, 2.0));
        assert!(!oscillate(0.3, 3.0));
        assert!(oscillate(0.4, 3.0));
    }

    #[test]
    fn shell_letters_fall_back_past_q() {
        let letters: Vec<_> = (0..9).map(shell_letter).collect();
        assert_eq!(letters, ["K", "L", "M", "N", "O", "P", "Q", "S8", "S9"]);
    }

    #[test]
    fn mode_round_trips_through_name() {
        for mode in [VisualizationMode::Animated, VisualizationMode::Static] {
            assert_eq!(VisualizationMode::from_str(mode.as_str()), Some(mode));
        }
    }
}
