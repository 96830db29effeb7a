//! Frame: the finished, immutable text buffer handed to the terminal.

use crate::fb::{CellStyle, Glyph, Grid};

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: CellStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a span, merging it into the previous one when the style matches.
    pub fn push(&mut self, text: &str, style: CellStyle) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.spans.push(Span::new(text, style)),
        }
    }

    pub fn with(mut self, text: &str, style: CellStyle) -> Self {
        self.push(text, style);
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Text without styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Render one grid row; blank cells become unstyled spaces.
    pub fn from_cells(cells: &[Option<Glyph>]) -> Self {
        let mut line = Line::new();
        let mut utf8 = [0u8; 4];
        for cell in cells {
            let (ch, style) = match cell {
                Some(glyph) => (glyph.ch, glyph.style),
                None => (' ', CellStyle::default()),
            };
            line.push(ch.encode_utf8(&mut utf8), style);
        }
        line
    }
}

/// A complete rendered snapshot: header, grid rows, footer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<Line>,
    grid_rows: std::ops::Range<usize>,
}

impl Frame {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Line indices occupied by the grid.
    pub fn grid_rows(&self) -> std::ops::Range<usize> {
        self.grid_rows.clone()
    }

    /// All lines without styling.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(Line::plain).collect()
    }
}

/// Incremental frame assembly.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    lines: Vec<Line>,
    grid_rows: std::ops::Range<usize>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: Line) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(Line::new());
        self
    }

    pub fn grid(&mut self, grid: &Grid) -> &mut Self {
        let start = self.lines.len();
        self.lines.extend(grid.rows().map(Line::from_cells));
        self.grid_rows = start..self.lines.len();
        self
    }

    pub fn build(self) -> Frame {
        Frame {
            lines: self.lines,
            grid_rows: self.grid_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Ink;

    #[test]
    fn adjacent_spans_with_same_style_merge() {
        let style = CellStyle::plain(Ink::Cyan);
        let line = Line::new().with("Pro", style).with("tons", style);
        assert_eq!(line.spans().len(), 1);
        assert_eq!(line.plain(), "Protons");
    }

    #[test]
    fn grid_rows_are_tracked() {
        let grid = Grid::new(4, 3);
        let mut builder = FrameBuilder::new();
        builder.blank().grid(&grid).blank();
        let frame = builder.build();
        assert_eq!(frame.grid_rows(), 1..4);
        assert_eq!(frame.plain_lines()[1], "    ");
    }
}
