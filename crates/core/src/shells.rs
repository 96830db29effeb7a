//! Shell model - electron counts per shell and orbital notation
//!
//! Two simple models live side by side:
//!
//! - **Shell distribution**: fills K, L, M, ... up to their nominal capacities
//!   (2, 8, 18, 32, 50, 72, 98). This drives the geometry of the rendered atom.
//! - **Orbital configuration**: fills subshells in Aufbau (Madelung) order and
//!   prints the familiar `1s² 2s² 2p⁶` notation. Used for the text footer only.
//!
//! Neither model tries to capture the real exceptions (Cr, Cu, ...); this is a
//! schematic visualizer, not a chemistry reference.

use arrayvec::ArrayVec;

use crate::types::{MAX_SHELLS, SHELL_CAPACITIES};

/// Electron counts per shell, innermost first.
pub type ShellDistribution = ArrayVec<u32, MAX_SHELLS>;

/// Subshells in filling order with their capacities.
const AUFBAU_ORDER: [(&str, u32); 19] = [
    ("1s", 2),
    ("2s", 2),
    ("2p", 6),
    ("3s", 2),
    ("3p", 6),
    ("4s", 2),
    ("3d", 10),
    ("4p", 6),
    ("5s", 2),
    ("4d", 10),
    ("5p", 6),
    ("6s", 2),
    ("4f", 14),
    ("5d", 10),
    ("6p", 6),
    ("7s", 2),
    ("5f", 14),
    ("6d", 10),
    ("7p", 6),
];

/// (atomic number, symbol) of the noble gases usable as a notation core.
const NOBLE_GAS_CORES: [(u32, &str); 6] = [
    (2, "He"),
    (10, "Ne"),
    (18, "Ar"),
    (36, "Kr"),
    (54, "Xe"),
    (86, "Rn"),
];

/// Distribute `atomic_number` electrons over the shells.
///
/// Each shell takes `min(remaining, capacity)`. Anything left after the seventh
/// shell goes into one overflow shell, which may exceed the nominal maximum.
/// Zero electrons yields an empty distribution.
pub fn shells_of(atomic_number: u32) -> ShellDistribution {
    let mut shells = ShellDistribution::new();
    let mut remaining = atomic_number;

    for &capacity in SHELL_CAPACITIES.iter() {
        if remaining == 0 {
            break;
        }
        let count = remaining.min(capacity);
        shells.push(count);
        remaining -= count;
    }

    if remaining > 0 {
        shells.push(remaining);
    }

    shells
}

/// Orbital configuration in Aufbau order, e.g. `"1s² 2s² 2p⁶ 3s¹"`.
///
/// The filling table holds 118 electrons; anything beyond that is not listed.
pub fn configuration_of(atomic_number: u32) -> String {
    let mut parts = Vec::new();
    let mut remaining = atomic_number;

    for &(orbital, capacity) in AUFBAU_ORDER.iter() {
        if remaining == 0 {
            break;
        }
        let count = remaining.min(capacity);
        parts.push(format!("{}{}", orbital, superscript(count)));
        remaining -= count;
    }

    parts.join(" ")
}

/// Noble-gas shorthand: `[core]` followed by the electrons beyond the core.
///
/// The core is the largest noble gas strictly lighter than the element. The
/// remaining electrons are written with the plain configuration of that count,
/// which is only a rough approximation of the real outer shell.
pub fn noble_gas_notation(atomic_number: u32) -> String {
    if atomic_number <= 2 {
        return configuration_of(atomic_number);
    }

    let core = NOBLE_GAS_CORES
        .iter()
        .take_while(|(z, _)| *z < atomic_number)
        .last();

    match core {
        Some(&(core_z, symbol)) => {
            let outer = atomic_number - core_z;
            format!("[{}] {}", symbol, configuration_of(outer))
        }
        None => configuration_of(atomic_number),
    }
}

/// Electrons in the outermost occupied shell.
pub fn valence_electrons(atomic_number: u32) -> u32 {
    shells_of(atomic_number).last().copied().unwrap_or(0)
}

/// Periodic-table row; 8 for hypothetical elements past Og.
pub fn element_period(atomic_number: u32) -> u32 {
    match atomic_number {
        0..=2 => 1,
        3..=10 => 2,
        11..=18 => 3,
        19..=36 => 4,
        37..=54 => 5,
        55..=86 => 6,
        87..=118 => 7,
        _ => 8,
    }
}

/// Main-group column (1, 2, 13-18), or 0 for transition metals,
/// lanthanides, actinides and unknown elements.
pub fn element_group(atomic_number: u32) -> u32 {
    const GROUPS: [(u32, [u32; 6]); 8] = [
        (1, [3, 11, 19, 37, 55, 87]),
        (2, [4, 12, 20, 38, 56, 88]),
        (13, [5, 13, 31, 49, 81, 113]),
        (14, [6, 14, 32, 50, 82, 114]),
        (15, [7, 15, 33, 51, 83, 115]),
        (16, [8, 16, 34, 52, 84, 116]),
        (17, [9, 17, 35, 53, 85, 117]),
        (18, [10, 18, 36, 54, 86, 118]),
    ];

    match atomic_number {
        1 => 1,
        2 => 18,
        z => GROUPS
            .iter()
            .find(|(_, members)| members.contains(&z))
            .map(|(group, _)| *group)
            .unwrap_or(0),
    }
}

/// Arrow diagram of the first five subshells (1s through 3p).
///
/// Each occupied subshell shows `↑` for its first electron and `↓` once it
/// holds two or more, e.g. `"1s:↑↓ 2s:↑"`. Returns `"No electrons"` for zero.
pub fn orbital_diagram(atomic_number: u32) -> String {
    let mut remaining = atomic_number;
    let mut parts = Vec::new();

    for &(orbital, capacity) in AUFBAU_ORDER.iter().take(5) {
        if remaining == 0 {
            break;
        }
        let count = remaining.min(capacity);
        remaining -= count;

        let arrows = if count > 1 { "↑↓" } else { "↑" };
        parts.push(format!("{}:{}", orbital, arrows));
    }

    parts.join(" ")
}

fn superscript(n: u32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    n.to_string()
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| DIGITS[d as usize]))
        .collect()
}
