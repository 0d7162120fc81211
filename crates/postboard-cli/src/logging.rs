#![forbid(unsafe_code)]

//! Tracing subscriber for the terminal host.
//!
//! Logs go to stderr so stdout carries only rendered output. `POSTBOARD_LOG`
//! takes an `EnvFilter` directive and wins over `-v` flags.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "POSTBOARD_LOG";

#[must_use]
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
