#![forbid(unsafe_code)]

//! Terminal host for the posts board.
//!
//! Mounts a [`postboard_core::Board`] and drives it from line commands read
//! from stdin (`run`) or a script file (`replay`).

pub mod cli;
pub mod error;
pub mod logging;
pub mod session;

pub use cli::{Cli, Commands, run, run_from_env};
pub use error::{CliError, CommandError, Result};
pub use session::{Command, ErrorPolicy, OutputFormat, Session};
