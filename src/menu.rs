//! Interactive menu: element selection, info card, mode choice.
//!
//! All text is built as styled [`Line`]s and written through the same encoder
//! the renderer uses, so the menu and the atom share one color vocabulary.

use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::{cursor, terminal, QueueableCommand};
use log::debug;

use crate::config::AppConfig;
use crate::core::{
    element_group, element_period, lookup, noble_gas_notation, orbital_diagram,
    valence_electrons, Element, POPULAR_ELEMENTS,
};
use crate::engine::{CancelToken, Pacer, SleepPacer};
use crate::input::{
    parse_element_choice, ElementChoice, EventPacer, PromptError, SignalCancel,
};
use crate::term::{encode_line_into, palette, CellStyle, Ink, Line, TerminalRenderer};
use crate::types::{VisualizationMode, MAX_ATOMIC_NUMBER};

const BOLD: CellStyle = CellStyle::bold(Ink::Default);
const DIM: CellStyle = CellStyle::dim(Ink::Default);

/// Banner shown at the top of every menu screen.
pub fn banner_lines() -> Vec<Line> {
    vec![
        Line::new(),
        Line::new().with("    ⚛️  TERMINAL ATOM VISUALIZER  ⚛️", palette::TITLE),
        Line::new(),
        Line::new().with(
            "Explore the beautiful structure of atoms in your terminal!",
            palette::LABEL,
        ),
        Line::new().with(&"═".repeat(55), DIM),
        Line::new(),
    ]
}

/// Popular elements by theme, two entries per row.
pub fn popular_element_lines() -> Vec<Line> {
    let mut lines = vec![Line::new().with("Popular Elements:", CellStyle::bold(palette::HIGHLIGHT))];

    for (theme, numbers) in POPULAR_ELEMENTS.iter() {
        lines.push(Line::new());
        lines.push(Line::new().with(&format!("{}:", theme), CellStyle::plain(palette::SUCCESS)));
        for pair in numbers.chunks(2) {
            let mut row = Line::new();
            for &z in pair {
                let element = lookup(z);
                row.push(&format!("  {:3}.{:<12}", z, element.name), palette::LABEL);
            }
            lines.push(row);
        }
    }
    lines.push(Line::new());
    lines
}

/// Detailed card for a selected element.
pub fn element_info_lines(element: &Element) -> Vec<Line> {
    let z = element.atomic_number;

    vec![
        Line::new(),
        Line::new().with("✨ Element Selected:", CellStyle::bold(palette::SUCCESS)),
        field("Name", &element.name),
        field("Symbol", &element.symbol),
        field("Atomic Number", &z.to_string()),
        field("Atomic Mass", &element.mass_label()),
        field("Category", &element.category),
        field("Period", &element_period(z).to_string()),
        field("Group", &group_label(element_group(z))),
        field("Valence Electrons", &valence_electrons(z).to_string()),
        field("Noble Gas Notation", &noble_gas_notation(z)),
        field("Orbital Diagram", &orbital_diagram(z)),
    ]
}

fn field(label: &str, value: &str) -> Line {
    Line::new()
        .with(&format!("{}: ", label), palette::LABEL)
        .with(value, palette::VALUE)
}

fn group_label(group: u32) -> String {
    match group {
        0 => "-".to_string(),
        g => g.to_string(),
    }
}

/// Menu session over any line-based input and any output.
pub struct Menu<R, W> {
    input: R,
    out: W,
    config: AppConfig,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W, config: AppConfig) -> Self {
        Self {
            input,
            out,
            config,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Loop until the user quits (or input ends).
    pub fn run_interactive(&mut self) -> Result<()> {
        loop {
            self.clear()?;
            self.write_lines(&banner_lines())?;

            let Some(atomic_number) = self.ask_atomic_number()? else {
                break;
            };

            let element = lookup(atomic_number);
            self.show_element_info(&element)?;

            let Some(mode) = self.ask_mode()? else {
                continue;
            };
            self.visualize(&element, mode)?;
        }

        self.clear()?;
        self.write_lines(&[
            Line::new(),
            Line::new().with(
                "Thank you for exploring the periodic table!",
                CellStyle::bold(palette::SUCCESS),
            ),
            Line::new()
                .with("🧪 You discovered the amazing world of ", palette::LABEL)
                .with(
                    &format!("{} elements", MAX_ATOMIC_NUMBER),
                    CellStyle::plain(Ink::BrightCyan),
                )
                .with("! ⚛️", palette::LABEL),
            Line::new(),
        ])
    }

    /// Show one element chosen on the command line.
    pub fn run_direct(&mut self, atomic_number: u32, mode: Option<VisualizationMode>) -> Result<()> {
        let element = lookup(atomic_number);
        self.show_element_info(&element)?;

        let mode = match mode {
            Some(mode) => Some(mode),
            None => self.ask_mode()?,
        };
        if let Some(mode) = mode {
            self.visualize(&element, mode)?;
        }
        Ok(())
    }

    /// Print a styled error line.
    pub fn error(&mut self, message: &str) -> Result<()> {
        self.write_lines(&[Line::new().with(message, CellStyle::plain(palette::ERROR))])
    }

    /// Render `element` in `mode`, blocking until the view is dismissed.
    pub fn visualize(&mut self, element: &Element, mode: VisualizationMode) -> Result<()> {
        debug!("visualizing {} ({})", element.name, mode.as_str());
        self.out.flush()?;

        match mode {
            VisualizationMode::Static => {
                let frame = self.config.view().compose(element, mode, 0.0);
                TerminalRenderer::new().show_static(&frame)?;
                self.wait_for_continue()
            }
            VisualizationMode::Animated => {
                // Signals cancel the session from here on, including the intro.
                let cancel = CancelToken::new();
                let _signals = SignalCancel::register(&cancel)?;

                self.write_lines(&[
                    Line::new(),
                    Line::new().with(
                        "🚀 Initializing atomic visualization...",
                        CellStyle::bold(palette::HIGHLIGHT),
                    ),
                    Line::new().with("Press Ctrl+C to stop animation", DIM),
                ])?;
                SleepPacer::default().wait(self.config.intro_delay, &cancel)?;

                let mut term = TerminalRenderer::new();
                self.config
                    .driver()
                    .run(element, &mut term, &mut EventPacer::new(), &cancel)
            }
        }
    }

    fn show_element_info(&mut self, element: &Element) -> Result<()> {
        self.clear()?;
        self.write_lines(&banner_lines())?;
        self.write_lines(&element_info_lines(element))
    }

    fn ask_atomic_number(&mut self) -> Result<Option<u32>> {
        self.write_lines(&popular_element_lines())?;

        loop {
            let prompt = format!("Enter atomic number (1-{}) or 'q' to quit: ", MAX_ATOMIC_NUMBER);
            let Some(answer) = self.prompt(&prompt)? else {
                return Ok(None);
            };

            match parse_element_choice(&answer) {
                Ok(ElementChoice::Quit) => return Ok(None),
                Ok(ElementChoice::Element(z)) => {
                    debug!("selected atomic number {}", z);
                    return Ok(Some(z));
                }
                Err(PromptError::OutOfRange(_)) => self.error(&format!(
                    "Please enter a number between 1 and {}.",
                    MAX_ATOMIC_NUMBER
                ))?,
                Err(PromptError::NotANumber(_)) => self.error("Please enter a valid number.")?,
            }
        }
    }

    fn ask_mode(&mut self) -> Result<Option<VisualizationMode>> {
        self.write_lines(&[
            Line::new(),
            Line::new().with("Choose visualization mode:", BOLD),
            Line::new()
                .with("1. ", palette::LABEL)
                .with("Animated", palette::VALUE)
                .with(" - Watch electrons orbit in real-time", palette::LABEL),
            Line::new()
                .with("2. ", palette::LABEL)
                .with("Static", palette::VALUE)
                .with(" - Traditional atomic model view", palette::LABEL),
        ])?;

        loop {
            let Some(answer) = self.prompt("Enter choice (1-2): ")? else {
                return Ok(None);
            };
            match answer.trim() {
                "1" => return Ok(Some(VisualizationMode::Animated)),
                "2" => return Ok(Some(VisualizationMode::Static)),
                _ => self.error("Please enter 1 or 2.")?,
            }
        }
    }

    fn wait_for_continue(&mut self) -> Result<()> {
        self.prompt_styled("Press Enter to continue...", DIM)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.prompt_styled(text, BOLD)
    }

    /// Print `text` without a newline and read one line. `None` on end of input.
    fn prompt_styled(&mut self, text: &str, style: CellStyle) -> Result<Option<String>> {
        self.buf.clear();
        encode_line_into(&Line::new().with(text, style), &mut self.buf)?;
        self.out.write_all(&self.buf)?;
        self.out.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer))
    }

    fn write_lines(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        for line in lines {
            encode_line_into(line, &mut self.buf)?;
            self.buf.push(b'\n');
        }
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }
}
