//! TerminalRenderer: flushes frames to a real terminal.
//!
//! Frames are always written over the previous one from the home position
//! instead of erase-then-redraw, so the screen never blanks between frames.
//! Leftovers from a longer previous frame are cleared line by line and below
//! the last line.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::fb::{CellStyle, Ink};
use crate::frame::{Frame, Line};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    raw: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            raw: false,
        }
    }

    /// Prepare the terminal for an animation session.
    ///
    /// Raw mode makes Ctrl+C arrive as a key event instead of a signal, so the
    /// session can always restore the cursor on the way out.
    pub fn enter_animation(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        self.buf.clear();
        encode_clear_into(&mut self.buf)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    /// Restore the terminal and leave a closing message on a clean screen.
    pub fn exit_animation(&mut self, farewell: &Line) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        encode_clear_into(&mut self.buf)?;
        encode_line_into(farewell, &mut self.buf)?;
        self.buf.queue(Print("\r\n"))?;
        let flushed = self.flush_buf();

        if self.raw {
            self.raw = false;
            terminal::disable_raw_mode()?;
        }
        flushed
    }

    /// Overwrite the screen with `frame`.
    pub fn present(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    /// Clear the screen and draw a single frame (static mode).
    pub fn show_static(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_clear_into(&mut self.buf)?;
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn show_cursor(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// Encode a whole frame, starting from the home position, into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    for line in frame.lines() {
        encode_line_into(line, out)?;
        out.queue(terminal::Clear(ClearType::UntilNewLine))?;
        out.queue(Print("\r\n"))?;
    }
    out.queue(terminal::Clear(ClearType::FromCursorDown))?;
    Ok(())
}

/// Encode one styled line (no line terminator) into `out`.
pub fn encode_line_into(line: &Line, out: &mut Vec<u8>) -> Result<()> {
    for span in line.spans() {
        apply_style_into(out, span.style)?;
        out.queue(Print(&span.text))?;
    }
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    Ok(())
}

fn encode_clear_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    // Attribute reset also resets colors, so it has to come first.
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(ink_to_color(style.ink)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn ink_to_color(ink: Ink) -> Color {
    match ink {
        Ink::Default => Color::Reset,
        Ink::Blue => Color::DarkBlue,
        Ink::Cyan => Color::DarkCyan,
        Ink::White => Color::Grey,
        Ink::BrightBlue => Color::Blue,
        Ink::BrightCyan => Color::Cyan,
        Ink::BrightGreen => Color::Green,
        Ink::BrightMagenta => Color::Magenta,
        Ink::BrightRed => Color::Red,
        Ink::BrightWhite => Color::White,
        Ink::BrightYellow => Color::Yellow,
        Ink::Indexed(n) => Color::AnsiValue(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Grid;
    use crate::frame::FrameBuilder;

    fn encode(frame: &Frame) -> String {
        let mut out = Vec::new();
        encode_frame_into(frame, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn frame_starts_at_home_and_truncates_tail() {
        let mut builder = FrameBuilder::new();
        builder.line(Line::new().with("hello", CellStyle::plain(Ink::Cyan)));
        let text = encode(&builder.build());

        // MoveTo(0, 0) is CSI 1;1 H.
        assert!(text.starts_with("\x1b[1;1H"));
        assert!(text.contains("hello"));
        // Clear(UntilNewLine) then Clear(FromCursorDown).
        assert!(text.contains("\x1b[K"));
        assert!(text.ends_with("\x1b[J"));
    }

    #[test]
    fn frame_never_clears_whole_screen() {
        let mut builder = FrameBuilder::new();
        builder.grid(&Grid::new(3, 3));
        let text = encode(&builder.build());
        assert!(!text.contains("\x1b[2J"));
        assert_eq!(text.matches("\r\n").count(), 3);
    }

    #[test]
    fn bright_and_plain_inks_differ() {
        assert_ne!(ink_to_color(Ink::Blue), ink_to_color(Ink::BrightBlue));
        assert_eq!(ink_to_color(Ink::Indexed(135)), Color::AnsiValue(135));
    }
}
