//! AtomView: maps an element onto a grid canvas and assembles a frame.
//!
//! This module is pure (no I/O). Output depends only on
//! `(element, mode, time)`, so frames can be compared in unit tests.

use std::f64::consts::PI;

use crate::core::{configuration_of, shells_of, Element};
use crate::fb::{CellStyle, Glyph, Grid, Ink};
use crate::frame::{Frame, FrameBuilder, Line};
use crate::palette::{self, shell_ink};
use crate::types::{
    oscillate, shell_letter, VisualizationMode, ANIMATED_RING_SAMPLES, CORE_BLINK_RATE,
    ELECTRON_BLINK_RATE, ELLIPSE_RATIO, GRID_HEIGHT, GRID_WIDTH, NUCLEUS_RADIUS,
    ORBIT_BASE_SPEED, ORBIT_SPEED_FALLOFF, SHELL_BASE_RADIUS, SHELL_SPACING, STATIC_RING_SAMPLES,
    TRAIL_LAG,
};

const CORE_STYLE: CellStyle = CellStyle::bold(Ink::Blue);
const INNER_NUCLEUS: Glyph = Glyph::new('●', CellStyle::plain(Ink::BrightBlue));
const OUTER_NUCLEUS: Glyph = Glyph::new('●', CellStyle::plain(Ink::Cyan));
const ELECTRON_STYLE: CellStyle = CellStyle::bold(Ink::BrightWhite);
const TRAIL: Glyph = Glyph::new('·', CellStyle::dim(Ink::White));

/// Electron symbols cycled through in static mode.
pub const STATIC_ELECTRON_SYMBOLS: [char; 4] = ['●', '◉', '⬢', '◆'];

/// Empirical visual constants. None of these are physically derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTuning {
    /// Vertical compression of shell rings; compensates for tall terminal cells.
    pub ellipse_ratio: f64,
    /// Angular speed of the innermost shell.
    pub orbit_speed: f64,
    /// Speed lost per shell index.
    pub orbit_falloff: f64,
    /// How far (radians) the trailing dot lags behind its electron.
    pub trail_lag: f64,
}

impl Default for RenderTuning {
    fn default() -> Self {
        Self {
            ellipse_ratio: ELLIPSE_RATIO,
            orbit_speed: ORBIT_BASE_SPEED,
            orbit_falloff: ORBIT_SPEED_FALLOFF,
            trail_lag: TRAIL_LAG,
        }
    }
}

/// Frame composer for one atom.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomView {
    width: u16,
    height: u16,
    tuning: RenderTuning,
}

impl Default for AtomView {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl AtomView {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            tuning: RenderTuning::default(),
        }
    }

    pub fn with_tuning(mut self, tuning: RenderTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Grid cell `(row, col)` of the nucleus center.
    pub fn center(&self) -> (i32, i32) {
        ((self.height / 2) as i32, (self.width / 2) as i32)
    }

    /// Radius of shell `index` in grid units.
    pub fn shell_radius(index: usize) -> f64 {
        SHELL_BASE_RADIUS + SHELL_SPACING * index as f64
    }

    /// Angular speed of shell `index`.
    pub fn orbit_speed(&self, index: usize) -> f64 {
        self.tuning.orbit_speed - self.tuning.orbit_falloff * index as f64
    }

    /// Grid cell `(row, col)` of the point at `angle` on a ring of `radius`.
    ///
    /// Coordinates truncate toward zero, matching integer conversion of the
    /// screen position.
    pub fn orbit_cell(&self, radius: f64, angle: f64) -> (i32, i32) {
        let (cy, cx) = self.center();
        let col = (cx as f64 + radius * angle.cos()) as i32;
        let row = (cy as f64 + radius * angle.sin() * self.tuning.ellipse_ratio) as i32;
        (row, col)
    }

    /// Compose a complete frame. `time` is ignored in static mode.
    pub fn compose(&self, element: &Element, mode: VisualizationMode, time: f64) -> Frame {
        let grid = self.compose_grid(element, mode, time);

        let mut frame = FrameBuilder::new();
        match mode {
            VisualizationMode::Animated => frame.line(
                Line::new().with("Press Ctrl+C to stop animation", CellStyle::plain(palette::INFO)),
            ),
            VisualizationMode::Static => frame.line(title_line(element)),
        };
        frame.blank();
        frame.grid(&grid);
        frame.blank().blank();
        self.push_footer(&mut frame, element);
        frame.build()
    }

    /// Draw nucleus and shells for one instant.
    pub fn compose_grid(&self, element: &Element, mode: VisualizationMode, time: f64) -> Grid {
        let mut grid = Grid::new(self.width, self.height);
        match mode {
            VisualizationMode::Animated => {
                self.draw_nucleus(&mut grid, time);
                self.draw_animated_shells(&mut grid, element, time);
            }
            VisualizationMode::Static => {
                self.draw_nucleus(&mut grid, 0.0);
                self.draw_static_shells(&mut grid, element);
            }
        }
        grid
    }

    /// Nucleus core glyph at `time`.
    pub fn core_glyph(time: f64) -> Glyph {
        let ch = if oscillate(time, CORE_BLINK_RATE) { '◉' } else { '●' };
        Glyph::new(ch, CORE_STYLE)
    }

    /// Animated electron glyph at `time`.
    pub fn electron_glyph(time: f64) -> Glyph {
        let ch = if oscillate(time, ELECTRON_BLINK_RATE) { '◉' } else { '●' };
        Glyph::new(ch, ELECTRON_STYLE)
    }

    fn draw_nucleus(&self, grid: &mut Grid, time: f64) {
        let (cy, cx) = self.center();
        let core = Self::core_glyph(time);
        let radius = NUCLEUS_RADIUS as f64;

        for dy in -NUCLEUS_RADIUS..=NUCLEUS_RADIUS {
            for dx in -NUCLEUS_RADIUS..=NUCLEUS_RADIUS {
                let distance = ((dx * dx + dy * dy) as f64).sqrt();
                let glyph = if distance <= 1.0 {
                    core
                } else if distance <= 2.0 {
                    INNER_NUCLEUS
                } else if distance <= radius {
                    OUTER_NUCLEUS
                } else {
                    continue;
                };
                grid.set(cy + dy, cx + dx, glyph);
            }
        }
    }

    fn draw_static_shells(&self, grid: &mut Grid, element: &Element) {
        for (shell, &count) in shells_of(element.atomic_number).iter().enumerate() {
            let ink = shell_ink(shell);
            let radius = Self::shell_radius(shell);

            for angle in ring_angles(STATIC_RING_SAMPLES) {
                // Accent ticks every eighth of a turn.
                let style = if angle % (PI / 4.0) < 0.2 {
                    CellStyle::bold(ink)
                } else {
                    CellStyle::plain(ink)
                };
                let (row, col) = self.orbit_cell(radius, angle);
                grid.put_if_blank(row, col, Glyph::new('·', style));
            }

            for e in 0..count {
                let angle = electron_angle(e, count);
                let symbol = STATIC_ELECTRON_SYMBOLS[(shell + e as usize) % STATIC_ELECTRON_SYMBOLS.len()];
                let (row, col) = self.orbit_cell(radius, angle);
                grid.set(row, col, Glyph::new(symbol, ELECTRON_STYLE));
            }
        }
    }

    fn draw_animated_shells(&self, grid: &mut Grid, element: &Element, time: f64) {
        let electron = Self::electron_glyph(time);

        for (shell, &count) in shells_of(element.atomic_number).iter().enumerate() {
            let ring = Glyph::new('·', CellStyle::plain(shell_ink(shell)));
            let radius = Self::shell_radius(shell);
            let speed = self.orbit_speed(shell);

            for angle in ring_angles(ANIMATED_RING_SAMPLES) {
                let (row, col) = self.orbit_cell(radius, angle);
                grid.put_if_blank(row, col, ring);
            }

            for e in 0..count {
                let angle = electron_angle(e, count) + time * speed;
                let (row, col) = self.orbit_cell(radius, angle);
                grid.set(row, col, electron);

                let (row, col) = self.orbit_cell(radius, angle - self.tuning.trail_lag);
                grid.put_if_blank(row, col, TRAIL);
            }
        }
    }

    fn push_footer(&self, frame: &mut FrameBuilder, element: &Element) {
        let z = element.atomic_number.to_string();
        let label = CellStyle::plain(palette::INFO);

        frame.line(title_line(element));
        frame.line(
            Line::new()
                .with("Protons: ", label)
                .with(&z, CellStyle::plain(palette::PROTON))
                .with(" | Neutrons: ", label)
                .with(&element.neutrons().to_string(), CellStyle::plain(palette::NEUTRON))
                .with(" | Electrons: ", label)
                .with(&z, CellStyle::plain(palette::ELECTRON)),
        );

        let mut shells = Line::new().with("Shells: ", label);
        let distribution = shells_of(element.atomic_number);
        for (i, count) in distribution.iter().enumerate() {
            if i > 0 {
                shells.push(" | ", CellStyle::default());
            }
            let entry = format!("{}:{}", shell_letter(i), count);
            shells.push(&entry, CellStyle::plain(shell_ink(i)));
        }
        frame.line(shells);

        frame.line(
            Line::new()
                .with("Configuration: ", label)
                .with(&configuration_of(element.atomic_number), palette::VALUE),
        );
        frame.line(
            Line::new()
                .with("Category: ", label)
                .with(&element.category, palette::VALUE),
        );
        frame.line(
            Line::new()
                .with("Atomic Mass: ", label)
                .with(&element.mass_label(), palette::VALUE),
        );
    }
}

fn title_line(element: &Element) -> Line {
    Line::new().with(&format!("⚛️  {}", element.title()), palette::TITLE)
}

fn ring_angles(samples: u32) -> impl Iterator<Item = f64> {
    (0..samples).map(move |i| i as f64 * PI * 2.0 / samples as f64)
}

fn electron_angle(index: u32, count: u32) -> f64 {
    2.0 * PI * index as f64 / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lookup;

    #[test]
    fn shell_radii_grow_by_four() {
        assert_eq!(AtomView::shell_radius(0), 8.0);
        assert_eq!(AtomView::shell_radius(3), 20.0);
    }

    #[test]
    fn outer_shells_rotate_slower() {
        let view = AtomView::default();
        assert!((view.orbit_speed(0) - 1.5).abs() < 1e-12);
        assert!((view.orbit_speed(2) - 1.1).abs() < 1e-12);
        assert!(view.orbit_speed(3) < view.orbit_speed(2));
    }

    #[test]
    fn orbit_cell_applies_ellipse_ratio() {
        let view = AtomView::default();
        // Straight down on shell 0: 8 * 0.85 = 6.8 -> truncated to 6.
        assert_eq!(view.orbit_cell(8.0, PI / 2.0), (26, 50));
        assert_eq!(view.orbit_cell(8.0, 0.0), (20, 58));
    }

    #[test]
    fn nucleus_has_three_tiers() {
        let view = AtomView::default();
        let grid = view.compose_grid(&lookup(1), VisualizationMode::Static, 0.0);
        let (cy, cx) = view.center();

        assert_eq!(grid.get(cy, cx).map(|g| g.style.ink), Some(Ink::Blue));
        assert_eq!(grid.get(cy, cx + 1).map(|g| g.style.ink), Some(Ink::Blue));
        assert_eq!(grid.get(cy + 1, cx + 1).map(|g| g.style.ink), Some(Ink::BrightBlue));
        assert_eq!(grid.get(cy, cx + 3).map(|g| g.style.ink), Some(Ink::Cyan));
        // (3, 3) lies outside the radius.
        assert!(grid.is_blank(cy + 3, cx + 3));
    }

    #[test]
    fn electron_glyph_blinks_at_three_phases_per_unit() {
        assert_eq!(AtomView::electron_glyph(0.0).ch, '●');
        assert_eq!(AtomView::electron_glyph(0.4).ch, '◉');
        assert_eq!(AtomView::electron_glyph(0.7).ch, '●');
    }

    #[test]
    fn tiny_grid_clips_everything_without_panicking() {
        let view = AtomView::new(4, 3);
        let frame = view.compose(&lookup(118), VisualizationMode::Animated, 12.5);
        assert_eq!(frame.grid_rows().len(), 3);
    }
}
