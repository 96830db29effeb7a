//! Grid canvas and style types for terminal rendering.

/// Terminal color, limited to what a basic ANSI terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ink {
    /// Terminal default foreground.
    #[default]
    Default,
    Blue,
    Cyan,
    White,
    BrightBlue,
    BrightCyan,
    BrightGreen,
    BrightMagenta,
    BrightRed,
    BrightWhite,
    BrightYellow,
    /// Entry of the 256-color palette.
    Indexed(u8),
}

/// Minimal per-glyph styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub ink: Ink,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn plain(ink: Ink) -> Self {
        Self {
            ink,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(ink: Ink) -> Self {
        Self {
            ink,
            bold: true,
            dim: false,
        }
    }

    pub const fn dim(ink: Ink) -> Self {
        Self {
            ink,
            bold: false,
            dim: true,
        }
    }
}

/// A visible character plus its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: CellStyle,
}

impl Glyph {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

/// 2D canvas of optional glyphs, addressed by `(row, col)`.
///
/// `None` is the blank marker. Coordinates are signed so that geometry which
/// falls off the canvas can be passed straight in; such writes are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Option<Glyph>>,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![None; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.height as i32 || col >= self.width as i32 {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    pub fn get(&self, row: i32, col: i32) -> Option<Glyph> {
        self.idx(row, col).and_then(|i| self.cells[i])
    }

    /// Write a glyph, silently clipping out-of-bounds coordinates.
    pub fn set(&mut self, row: i32, col: i32, glyph: Glyph) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = Some(glyph);
        }
    }

    /// True only for in-bounds cells nothing has been written to.
    pub fn is_blank(&self, row: i32, col: i32) -> bool {
        self.idx(row, col).is_some_and(|i| self.cells[i].is_none())
    }

    /// Write a glyph only if the cell is still blank.
    pub fn put_if_blank(&mut self, row: i32, col: i32, glyph: Glyph) {
        if let Some(i) = self.idx(row, col) {
            if self.cells[i].is_none() {
                self.cells[i] = Some(glyph);
            }
        }
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Glyph>]> {
        // chunks_exact panics on a zero chunk size.
        let width = (self.width as usize).max(1);
        self.cells.chunks_exact(width).take(self.height as usize)
    }
}
