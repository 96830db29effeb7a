//! Core chemistry module - pure, deterministic, and testable
//!
//! This crate holds the periodic-table data and the electron arithmetic the
//! renderer consumes. It has **zero dependencies** on terminal I/O:
//!
//! - **Total**: every lookup succeeds; unknown atomic numbers get synthesized data
//! - **Pure**: same atomic number, same answer
//! - **Allocation-light**: shell distributions live in a fixed-capacity `ArrayVec`
//!
//! # Module Structure
//!
//! - [`elements`]: Element table for Z = 1..=118 plus placeholder synthesis
//! - [`shells`]: Shell distribution (2, 8, 18, ...) and orbital notation
//!
//! # Example
//!
//! ```
//! use tui_atom_core::{configuration_of, lookup, shells_of};
//!
//! let neon = lookup(10);
//! assert_eq!(neon.symbol, "Ne");
//! assert_eq!(shells_of(neon.atomic_number).as_slice(), &[2, 8]);
//! assert_eq!(configuration_of(10), "1s² 2s² 2p⁶");
//! ```

pub mod elements;
pub mod shells;

pub use tui_atom_types as types;

pub use elements::{lookup, Element, POPULAR_ELEMENTS};
pub use shells::{
    configuration_of, element_group, element_period, noble_gas_notation, orbital_diagram,
    shells_of, valence_electrons, ShellDistribution,
};
