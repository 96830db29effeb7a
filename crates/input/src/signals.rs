//! Process signals (SIGINT, SIGTERM) as animation cancellation.
//!
//! Raw mode turns Ctrl+C typed at the terminal into a key event, but a signal
//! sent to the process (`kill -INT`, a supervising shell) bypasses the key
//! path. While a [`SignalCancel`] is alive those signals only set the
//! session's cancel token, so the driver still runs its cleanup. Outside a
//! session they exit the process with the conventional `128 + signo` status.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use anyhow::Result;
use log::debug;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::{flag, low_level, SigId};

use crate::engine::CancelToken;

const SIGNALS: [i32; 2] = [SIGINT, SIGTERM];

/// Set while no session owns the signals; the registered shutdown actions
/// only fire when it is true.
static EXIT_ON_SIGNAL: OnceLock<Arc<AtomicBool>> = OnceLock::new();

fn exit_on_signal() -> Result<&'static Arc<AtomicBool>> {
    if let Some(armed) = EXIT_ON_SIGNAL.get() {
        return Ok(armed);
    }
    let armed = Arc::new(AtomicBool::new(true));
    for signal in SIGNALS {
        flag::register_conditional_shutdown(signal, 128 + signal, Arc::clone(&armed))?;
    }
    Ok(EXIT_ON_SIGNAL.get_or_init(|| armed))
}

/// Routes SIGINT and SIGTERM to a cancel token until dropped.
pub struct SignalCancel {
    ids: Vec<SigId>,
    armed: &'static Arc<AtomicBool>,
}

impl SignalCancel {
    pub fn register(cancel: &CancelToken) -> Result<Self> {
        let armed = exit_on_signal()?;
        armed.store(false, Ordering::SeqCst);

        let mut guard = Self {
            ids: Vec::with_capacity(SIGNALS.len()),
            armed,
        };
        for signal in SIGNALS {
            guard.ids.push(flag::register(signal, cancel.shared_flag())?);
        }
        debug!("SIGINT/SIGTERM routed to animation cancel");
        Ok(guard)
    }
}

impl Drop for SignalCancel {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            low_level::unregister(id);
        }
        self.armed.store(true, Ordering::SeqCst);
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    // Raising a signal outside a live guard would exit the test binary, so
    // every raise happens inside one test while the guard is held.
    #[test]
    fn signals_cancel_the_token_while_registered() {
        let first = CancelToken::new();
        {
            let _guard = SignalCancel::register(&first).unwrap();
            assert!(!first.is_cancelled());
            low_level::raise(SIGINT).unwrap();
            assert!(first.is_cancelled());
        }
        assert!(EXIT_ON_SIGNAL.get().unwrap().load(Ordering::SeqCst));

        let second = CancelToken::new();
        let _guard = SignalCancel::register(&second).unwrap();
        low_level::raise(SIGTERM).unwrap();
        assert!(second.is_cancelled());
    }
}
