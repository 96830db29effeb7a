//! Terminal atom visualizer (default binary).
//!
//! `tui-atom` with no arguments opens the interactive menu; `tui-atom <Z>`
//! jumps straight to element Z. Invalid arguments exit with status 1.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use log::info;

use tui_atom::term::TerminalRenderer;
use tui_atom::{parse_args, AppConfig, Invocation, Menu};

fn main() -> Result<ExitCode> {
    // Default to warnings only so log output never interleaves with frames.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let config = AppConfig::from_env();
    info!("configuration: {:?}", config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), config);

    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            menu.error(&e.to_string())?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let result = match invocation {
        Invocation::Interactive => menu.run_interactive(),
        Invocation::Direct {
            atomic_number,
            mode,
        } => menu.run_direct(atomic_number, mode),
    };

    // Always try to leave the cursor visible.
    let _ = TerminalRenderer::new().show_cursor();
    result.map(|()| ExitCode::SUCCESS)
}
