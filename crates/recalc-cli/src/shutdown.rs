#![forbid(unsafe_code)]

//! Signal-driven shutdown.
//!
//! SIGINT/SIGTERM end the session cleanly with the conventional 128+signal
//! exit status. Auto-save (when enabled) persists the history after every
//! record, so there is nothing left to flush at this point.

#[cfg(unix)]
pub fn install() {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = match Signals::new([SIGINT, SIGTERM]) {
        Ok(signals) => signals,
        Err(error) => {
            tracing::warn!(error = %error, "could not install signal handlers");
            return;
        }
    };

    std::thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            tracing::info!(signal, "interrupt received, shutting down");
            std::process::exit(128 + signal);
        }
    });
}

#[cfg(not(unix))]
pub fn install() {}
