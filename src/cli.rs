//! Command-line arguments.
//!
//! ```text
//! tui-atom                      interactive menu
//! tui-atom <Z>                  show element Z, ask for the mode
//! tui-atom <Z> static|animated  show element Z in the given mode
//! ```

use anyhow::{anyhow, Result};

use crate::input::parse_atomic_number;
use crate::types::VisualizationMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Interactive,
    Direct {
        atomic_number: u32,
        mode: Option<VisualizationMode>,
    },
}

pub fn parse_args(args: &[String]) -> Result<Invocation> {
    let Some(raw) = args.first() else {
        return Ok(Invocation::Interactive);
    };

    let atomic_number = parse_atomic_number(raw)?;

    let mode = match args.get(1) {
        Some(m) => Some(
            VisualizationMode::from_str(m)
                .ok_or_else(|| anyhow!("Unknown mode: {} (expected static or animated)", m))?,
        ),
        None => None,
    };

    if let Some(extra) = args.get(2) {
        return Err(anyhow!("Unexpected argument: {}", extra));
    }

    Ok(Invocation::Direct {
        atomic_number,
        mode,
    })
}
