//! Named styles shared by the atom view and the menu.

use crate::fb::{CellStyle, Ink};

pub const PROTON: Ink = Ink::Indexed(208);
pub const NEUTRON: Ink = Ink::Indexed(250);
pub const ELECTRON: Ink = Ink::BrightCyan;

pub const HEADER: Ink = Ink::BrightCyan;
pub const INFO: Ink = Ink::Cyan;
pub const HIGHLIGHT: Ink = Ink::BrightYellow;
pub const ERROR: Ink = Ink::BrightRed;
pub const SUCCESS: Ink = Ink::BrightGreen;

/// One color per shell, K through Q.
pub const SHELL_INKS: [Ink; 7] = [
    Ink::BrightYellow,
    Ink::BrightGreen,
    Ink::BrightBlue,
    Ink::BrightMagenta,
    Ink::Indexed(135),
    Ink::Indexed(201),
    Ink::Indexed(87),
];

/// Shell color; overflow shells share the electron color.
pub fn shell_ink(index: usize) -> Ink {
    SHELL_INKS.get(index).copied().unwrap_or(ELECTRON)
}

pub const TITLE: CellStyle = CellStyle::bold(HEADER);
pub const LABEL: CellStyle = CellStyle::plain(INFO);
pub const VALUE: CellStyle = CellStyle::plain(HIGHLIGHT);
